use super::Response;
use super::Villain;
use crate::Probability;
use crate::cards::Holding;
use crate::config::Config;
use rand::Rng;
use rand::rngs::SmallRng;

/// Fixed Bernoulli opponent.
///
/// Calls with probability `aggression` when it has something (better than
/// high card with the board), and with probability `bluff` otherwise.
/// Not adaptive: the same holding always faces the same odds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heuristic {
    aggression: Probability,
    bluff: Probability,
}

impl Heuristic {
    /// # Panics
    /// if either frequency lies outside [0, 1]. Run configs through
    /// [`Config::validate`] first.
    pub fn new(aggression: Probability, bluff: Probability) -> Self {
        assert!((0.0..=1.0).contains(&aggression));
        assert!((0.0..=1.0).contains(&bluff));
        Self { aggression, bluff }
    }
    /// the call frequency this holding faces
    pub fn frequency(&self, holding: &Holding) -> Probability {
        match holding.has_something() {
            true => self.aggression,
            false => self.bluff,
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Heuristic {
    fn from(config: &Config) -> Self {
        Self::new(config.aggression, config.bluff)
    }
}

impl Villain for Heuristic {
    fn respond(&self, holding: &Holding, rng: &mut SmallRng) -> Response {
        let p = self.frequency(holding);
        let response = match rng.random_bool(p as f64) {
            true => Response::Call,
            false => Response::Fold,
        };
        log::trace!("villain {} calls {:.2} -> {:?}", holding, p, response);
        response
    }
}
