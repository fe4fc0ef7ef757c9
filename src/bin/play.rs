//! Play Binary
//!
//! You are the agent. Each hand: shove or fold against the villain.

use colored::Colorize;
use pokerworld::players::Human;
use pokerworld::players::Player;
use pokerworld::tally::Tally;
use pokerworld::*;

fn main() -> anyhow::Result<()> {
    log();
    let mut env = PokerWorld::default();
    let mut human = Human;
    let mut tally = Tally::default();
    loop {
        let (observation, info) = env.reset(None);
        let action = human.act(&observation, &info)?;
        let step = env.step(action.into())?;
        let villain = step.observation.villain;
        let shown = match step.info.villain {
            Some(strength) => format!("{} ({})", villain, strength),
            None => format!("{}", villain),
        };
        let outcome = match step.info.outcome {
            Some(outcome @ (Outcome::Won | Outcome::Stolen)) => outcome.to_string().green(),
            Some(outcome @ Outcome::Lost) => outcome.to_string().red(),
            Some(outcome) => outcome.to_string().normal(),
            None => "".normal(),
        };
        println!("villain held {}: {} {:+}", shown, outcome, step.reward);
        tally.record(&step);
        let again = dialoguer::Confirm::new()
            .with_prompt("deal again?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }
    env.close();
    log::info!("{}", tally);
    Ok(())
}
