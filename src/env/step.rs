use super::info::Info;
use super::observation::Observation;
use crate::Utility;
use serde::Serialize;

/// The result of one transition:
/// (observation, reward, terminated, truncated, info).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub observation: Observation,
    pub reward: Utility,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

impl From<Step> for (Observation, Utility, bool, bool, Info) {
    fn from(s: Step) -> Self {
        (s.observation, s.reward, s.terminated, s.truncated, s.info)
    }
}
