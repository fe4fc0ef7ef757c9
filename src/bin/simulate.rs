//! Simulate Binary
//!
//! Plays many hands of a fixed agent style against a villain policy
//! and reports how the agent fared.

use anyhow::Context;
use clap::Parser;
use pokerworld::players::Player;
use pokerworld::players::Robot;
use pokerworld::players::Style;
use pokerworld::tally::Tally;
use pokerworld::villain::Heuristic;
use pokerworld::villain::Nit;
use pokerworld::villain::Station;
use pokerworld::villain::Villain;
use pokerworld::*;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Opponent {
    Heuristic,
    Station,
    Nit,
}

#[derive(Debug, Parser)]
#[command(about = "simulate heads-up all-in-or-fold hands")]
struct Args {
    /// number of hands to play
    #[arg(short, long, default_value_t = 10_000)]
    episodes: u64,
    /// base seed; hand i is dealt with seed + i
    #[arg(short, long)]
    seed: Option<u64>,
    /// JSON config overriding stacks and villain frequencies
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Style::Value)]
    agent: Style,
    #[arg(short, long, value_enum, default_value_t = Opponent::Heuristic)]
    villain: Opponent,
    /// print every transition as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    let seed = args.seed.or(config.seed);
    let villain: Box<dyn Villain> = match args.villain {
        Opponent::Heuristic => Box::new(Heuristic::from(&config)),
        Opponent::Station => Box::new(Station),
        Opponent::Nit => Box::new(Nit),
    };
    log::info!("{:?} agent vs {:?} villain, {:?}", args.agent, villain, config);
    let mut env = PokerWorld::new(config, villain).context("building environment")?;
    let mut agent = Robot::new(args.agent, seed);
    let mut tally = Tally::default();
    let mut stdout = std::io::stdout().lock();
    for i in 0..args.episodes {
        let (observation, info) = env.reset(seed.map(|s| s.wrapping_add(i)));
        let action = agent.act(&observation, &info)?;
        let step = env.step(action.into())?;
        if args.json {
            serde_json::to_writer(&mut stdout, &step).context("writing transition")?;
            writeln!(stdout)?;
        }
        tally.record(&step);
    }
    env.close();
    log::info!("{}", tally);
    Ok(())
}
