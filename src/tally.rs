use crate::Utility;
use crate::env::Outcome;
use crate::env::Step;
use crate::villain::Response;

/// Running totals over many episodes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Tally {
    pub episodes: usize,
    pub folded: usize,
    pub stolen: usize,
    pub won: usize,
    pub lost: usize,
    pub split: usize,
    pub reward: Utility,
}

impl Tally {
    pub fn record(&mut self, step: &Step) {
        self.episodes += 1;
        self.reward += step.reward;
        match step.info.outcome {
            Some(Outcome::Folded) => self.folded += 1,
            Some(Outcome::Stolen) => self.stolen += 1,
            Some(Outcome::Won) => self.won += 1,
            Some(Outcome::Lost) => self.lost += 1,
            Some(Outcome::Split) => self.split += 1,
            None => unreachable!("every step settles the hand"),
        }
        debug_assert!(step.info.response != Some(Response::Fold) || step.reward == 1.);
    }
    pub fn raises(&self) -> usize {
        self.episodes - self.folded
    }
    /// how often the villain gave up facing a shove
    pub fn fold_rate(&self) -> f32 {
        match self.raises() {
            0 => 0.,
            n => self.stolen as f32 / n as f32,
        }
    }
    pub fn mean(&self) -> Utility {
        match self.episodes {
            0 => 0.,
            n => self.reward / n as Utility,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hands | won {} lost {} split {} stolen {} folded {} | villain fold rate {:.3} | mean reward {:+.4}",
            self.episodes,
            self.won,
            self.lost,
            self.split,
            self.stolen,
            self.folded,
            self.fold_rate(),
            self.mean()
        )
    }
}
