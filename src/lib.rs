//! A heads-up, single-decision poker environment for reinforcement learning.
//!
//! Each episode is one hand: [`Environment::reset`] deals two hole cards to
//! the agent and the villain plus a full five-card board, and a single
//! [`Environment::step`] with [`Action::Raise`] (all-in) or [`Action::Fold`]
//! settles it for a reward of -1, 0 or +1.

pub mod cards;
pub mod config;
pub mod env;
pub mod players;
pub mod tally;
pub mod villain;

pub use config::Config;
pub use env::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and pot amounts.
pub type Chips = i16;
/// Episode rewards.
pub type Utility = f32;
/// Villain continuation frequencies and policy weights.
pub type Probability = f32;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Starting stack for both players. The whole table holds N * STACK chips.
pub const STACK: Chips = 100;
/// Size of the discrete action space. Only Raise (1) and Fold (2) are playable.
pub const ACTION_SPACE: usize = 3;

// ============================================================================
// VILLAIN HEURISTIC
// Bernoulli continuation facing an all-in, biased by made hands.
// ============================================================================
/// Probability the villain calls when it holds better than high card.
pub const AGGRESSION: Probability = 0.75;
/// Probability the villain calls holding only high card.
pub const BLUFF: Probability = 0.10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
