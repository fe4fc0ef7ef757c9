use super::error::StepError;

/// The agent's single decision.
///
/// The discrete space has three slots; 1 and 2 are the playable ones and
/// slot 0 is reserved without a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// all-in for the whole stack
    Raise = 1,
    Fold = 2,
}

impl Action {
    pub const fn all() -> [Action; 2] {
        [Action::Raise, Action::Fold]
    }
}

impl TryFrom<usize> for Action {
    type Error = StepError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Action::Raise),
            2 => Ok(Action::Fold),
            n if n < crate::ACTION_SPACE => Err(StepError::Undefined(n)),
            n => Err(StepError::OutOfRange(n)),
        }
    }
}
impl From<Action> for usize {
    fn from(a: Action) -> usize {
        a as usize
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Raise => write!(f, "RAISE"),
            Action::Fold => write!(f, "FOLD"),
        }
    }
}
