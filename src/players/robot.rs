use super::Choice;
use super::Player;
use super::Policy;
use crate::env::Action;
use crate::env::Info;
use crate::env::Observation;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Fixed agent behaviours, mostly useful as baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
pub enum Style {
    /// always shove
    Maniac,
    /// always fold
    Rock,
    /// coin flip
    Random,
    /// shove made hands, fold high card
    Value,
    /// shove when showdown equity beats a coin flip
    Equity,
}

/// An automated agent sampling from a weighted policy.
#[derive(Debug)]
pub struct Robot {
    style: Style,
    rng: SmallRng,
}

impl Robot {
    pub fn new(style: Style, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self { style, rng }
    }

    fn weight(&self, action: Action, info: &Info) -> u32 {
        let shove = match self.style {
            Style::Maniac => true,
            Style::Rock => false,
            Style::Random => return 1,
            Style::Value => info.has_something,
            Style::Equity => info.equity > 0.5,
        };
        match (action, shove) {
            (Action::Raise, true) | (Action::Fold, false) => 1,
            (Action::Raise, false) | (Action::Fold, true) => 0,
        }
    }

    fn policy(&self, info: &Info) -> Policy {
        Policy {
            choices: Action::all()
                .into_iter()
                .map(|action| Choice {
                    action,
                    weight: self.weight(action, info),
                })
                .collect(),
        }
    }
}

impl Player for Robot {
    fn act(&mut self, _: &Observation, info: &Info) -> anyhow::Result<Action> {
        let policy = self.policy(info);
        Ok(policy.choose(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::cards::Hole;
    use crate::env::Episode;

    fn spot(agent: &str, board: &str) -> (Observation, Info) {
        let episode = Episode::try_from((
            Hole::try_from(agent).unwrap(),
            Hole::try_from("2h 3h").unwrap(),
            Board::try_from(board).unwrap(),
            100,
        ))
        .unwrap();
        (Observation::from(&episode), Info::from(&episode))
    }

    #[test]
    fn value_shoves_pairs_only() {
        let mut robot = Robot::new(Style::Value, Some(0));
        let (obs, info) = spot("Ac Kd", "As 9h 7c 5d 4s");
        assert_eq!(robot.act(&obs, &info).unwrap(), Action::Raise);
        let (obs, info) = spot("Jc Td", "As 9h 7c 5d 4s");
        assert_eq!(robot.act(&obs, &info).unwrap(), Action::Fold);
    }

    #[test]
    fn fixed_styles_never_deviate() {
        let mut maniac = Robot::new(Style::Maniac, Some(1));
        let mut rock = Robot::new(Style::Rock, Some(1));
        let (obs, info) = spot("Jc Td", "As 9h 7c 5d 4s");
        for _ in 0..100 {
            assert_eq!(maniac.act(&obs, &info).unwrap(), Action::Raise);
            assert_eq!(rock.act(&obs, &info).unwrap(), Action::Fold);
        }
    }

    #[test]
    fn equity_shoves_the_nuts() {
        let mut robot = Robot::new(Style::Equity, Some(2));
        let (obs, info) = spot("Ac Ad", "As Ah 7c 5d 2s");
        assert_eq!(robot.act(&obs, &info).unwrap(), Action::Raise);
    }
}
