pub struct Human;

impl Player for Human {
    fn act(&mut self, observation: &Observation, info: &Info) -> anyhow::Result<Action> {
        let choices = Action::all();
        let items = choices
            .iter()
            .map(|action| action.to_string())
            .collect::<Vec<String>>();
        let selection = Select::new()
            .with_prompt(format!(
                "\nYOU HOLD {}   BOARD {}   {} ({:.0}% equity)",
                observation.agent,
                observation.cards,
                info.hand,
                info.equity * 100.
            ))
            .report(false)
            .items(items.as_slice())
            .default(1)
            .interact()?;
        Ok(choices[selection])
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use super::Player;
use crate::env::Action;
use crate::env::Info;
use crate::env::Observation;
use dialoguer::Select;
use std::fmt::Debug;
use std::fmt::Formatter;
