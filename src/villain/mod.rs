//! Opponent policies facing the agent's all-in.
mod fixed;
mod heuristic;

pub use fixed::*;
pub use heuristic::*;

use crate::cards::Holding;
use rand::rngs::SmallRng;
use std::fmt::Debug;

/// What the villain does when the agent shoves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Call,
    Fold,
}

/// A villain sees only its own hole cards and the board.
///
/// The environment's RNG is passed in so that a seeded episode also
/// replays the villain's decisions.
pub trait Villain: Debug {
    fn respond(&self, holding: &Holding, rng: &mut SmallRng) -> Response;
}
