use crate::Chips;
use crate::Utility;

/// How a hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// agent folded before committing anything
    Folded,
    /// agent shoved and the villain folded
    Stolen,
    /// called, agent's hand was stronger
    Won,
    /// called, villain's hand was stronger
    Lost,
    /// called, equal strength
    Split,
}

impl Outcome {
    pub fn reward(&self) -> Utility {
        match self {
            Outcome::Stolen | Outcome::Won => 1.,
            Outcome::Folded | Outcome::Split => 0.,
            Outcome::Lost => -1.,
        }
    }
    /// (agent, villain) stacks once the pot is pushed
    pub fn stacks(&self, stack: Chips) -> (Chips, Chips) {
        match self {
            Outcome::Won => (stack * 2, 0),
            Outcome::Lost => (0, stack * 2),
            Outcome::Folded | Outcome::Stolen | Outcome::Split => (stack, stack),
        }
    }
    /// chips that were put in the middle during the hand
    pub fn pot(&self, stack: Chips) -> Chips {
        match self {
            Outcome::Folded => 0,
            Outcome::Stolen => stack,
            Outcome::Won | Outcome::Lost | Outcome::Split => stack * 2,
        }
    }
    /// whether the hand reached a showdown
    pub fn called(&self) -> bool {
        matches!(self, Outcome::Won | Outcome::Lost | Outcome::Split)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Folded => write!(f, "folded"),
            Outcome::Stolen => write!(f, "stolen"),
            Outcome::Won => write!(f, "won"),
            Outcome::Lost => write!(f, "lost"),
            Outcome::Split => write!(f, "split"),
        }
    }
}
