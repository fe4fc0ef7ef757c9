use crate::env::Action;
use crate::env::Info;
use crate::env::Observation;
use std::fmt::Debug;

/// Chooses the agent's action from what the environment reports.
pub trait Player: Debug {
    fn act(&mut self, observation: &Observation, info: &Info) -> anyhow::Result<Action>;
}
