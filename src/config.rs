use crate::Chips;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Environment parameters.
///
/// Defaults reproduce the fixed table: 100-chip stacks, a villain that
/// calls 75% of the time with a made hand and 10% without one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// starting stack for each player
    pub stack: Chips,
    /// villain call frequency when it has something
    pub aggression: Probability,
    /// villain call frequency holding high card
    pub bluff: Probability,
    /// seed for the first reset that doesn't pass its own
    pub seed: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("stack must be positive and fit {} times in the pot, got {0}", crate::N)]
    Stack(Chips),
    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability {
        name: &'static str,
        value: Probability,
    },
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Json(#[from] serde_json::Error),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack: crate::STACK,
            aggression: crate::AGGRESSION,
            bluff: crate::BLUFF,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.stack <= 0 || self.stack > Chips::MAX / crate::N as Chips {
            return Err(ConfigError::Stack(self.stack));
        }
        for (name, value) in [("aggression", self.aggression), ("bluff", self.bluff)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }
        Ok(self)
    }
    /// Reads a JSON config. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str::<Self>(&text)?.validate()
    }
    /// Chips on the table, which is also the largest possible pot.
    pub fn total(&self) -> Chips {
        self.stack * crate::N as Chips
    }
}
