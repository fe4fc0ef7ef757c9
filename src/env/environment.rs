use super::action::Action;
use super::episode::Episode;
use super::error::StepError;
use super::info::Info;
use super::observation::Observation;
use super::outcome::Outcome;
use super::step::Step;
use crate::config::Config;
use crate::config::ConfigError;
use crate::villain::Heuristic;
use crate::villain::Response;
use crate::villain::Villain;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The reset/step/close contract an external training loop drives.
pub trait Environment {
    /// Starts a new episode. A seed makes the deal and every random
    /// decision inside the episode reproducible.
    fn reset(&mut self, seed: Option<u64>) -> (Observation, Info);
    /// Applies the agent's discrete action.
    fn step(&mut self, action: usize) -> Result<Step, StepError>;
    /// Ends the current episode.
    fn close(&mut self);
}

/// Heads-up, one decision, all-in or fold.
#[derive(Debug)]
pub struct PokerWorld {
    config: Config,
    villain: Box<dyn Villain>,
    rng: SmallRng,
    episode: Option<Episode>,
}

impl Default for PokerWorld {
    fn default() -> Self {
        Self::build(Config::default(), Box::new(Heuristic::default()))
    }
}

/// A heuristic villain playing the configured frequencies.
impl TryFrom<Config> for PokerWorld {
    type Error = ConfigError;
    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let config = config.validate()?;
        Ok(Self::build(config, Box::new(Heuristic::from(&config))))
    }
}

impl PokerWorld {
    /// Rejects configs whose stacks or frequencies are out of range.
    pub fn new(config: Config, villain: Box<dyn Villain>) -> Result<Self, ConfigError> {
        Ok(Self::build(config.validate()?, villain))
    }
    fn build(config: Config, villain: Box<dyn Villain>) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            config,
            villain,
            rng,
            episode: None,
        }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn episode(&self) -> Option<&Episode> {
        self.episode.as_ref()
    }
    pub fn observation(&self) -> Option<Observation> {
        self.episode.as_ref().map(Observation::from)
    }

    /// Starts from a known deal instead of a random one.
    pub fn replay(&mut self, episode: Episode) -> (Observation, Info) {
        log::debug!("replay {}", episode);
        let result = (Observation::from(&episode), Info::from(&episode));
        self.episode = Some(episode);
        result
    }

    fn resolve(&mut self, action: Action, episode: &Episode) -> (Outcome, Option<Response>) {
        match action {
            Action::Fold => (Outcome::Folded, None),
            Action::Raise => match self.villain.respond(&episode.villain(), &mut self.rng) {
                Response::Fold => (Outcome::Stolen, Some(Response::Fold)),
                Response::Call => (episode.showdown(), Some(Response::Call)),
            },
        }
    }
}

impl Environment for PokerWorld {
    fn reset(&mut self, seed: Option<u64>) -> (Observation, Info) {
        if let Some(seed) = seed {
            self.rng = SmallRng::seed_from_u64(seed);
        }
        let episode = Episode::deal(&mut self.rng, self.config.stack);
        log::debug!("deal {}", episode);
        let result = (Observation::from(&episode), Info::from(&episode));
        self.episode = Some(episode);
        result
    }

    fn step(&mut self, action: usize) -> Result<Step, StepError> {
        let mut episode = self.episode.ok_or(StepError::NotReset)?;
        if episode.is_over() {
            return Err(StepError::EpisodeDone);
        }
        let action = Action::try_from(action)?;
        let (outcome, response) = self.resolve(action, &episode);
        episode.settle(outcome);
        log::debug!(
            "{} -> {} ({}/{})",
            action,
            outcome,
            episode.agent_stack(),
            episode.villain_stack()
        );
        let info = Info::from(&episode);
        let info = match response {
            Some(response) => info.with_response(response),
            None => info,
        };
        self.episode = Some(episode);
        Ok(Step {
            observation: Observation::from(&episode),
            reward: outcome.reward(),
            terminated: true,
            truncated: false,
            info,
        })
    }

    fn close(&mut self) {
        if let Some(episode) = self.episode.as_mut().filter(|e| !e.is_over()) {
            log::debug!("close mid-hand, folding {}", episode);
            episode.settle(Outcome::Folded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::cards::Hole;
    use crate::villain::Nit;
    use crate::villain::Station;

    fn spot(agent: &str, villain: &str, board: &str) -> Episode {
        Episode::try_from((
            Hole::try_from(agent).unwrap(),
            Hole::try_from(villain).unwrap(),
            Board::try_from(board).unwrap(),
            100,
        ))
        .unwrap()
    }

    fn world(villain: Box<dyn Villain>) -> PokerWorld {
        PokerWorld::new(Config::default(), villain).unwrap()
    }

    #[test]
    fn reset_starts_fresh() {
        let mut env = PokerWorld::default();
        let (observation, info) = env.reset(Some(0));
        assert_eq!(observation.pot, 0);
        assert_eq!(observation.agent_stack, 100);
        assert_eq!(observation.villain_stack, 100);
        assert!(info.outcome.is_none());
    }

    #[test]
    fn step_before_reset() {
        let mut env = PokerWorld::default();
        assert_eq!(env.step(1).unwrap_err(), StepError::NotReset);
    }

    #[test]
    fn step_after_termination() {
        let mut env = PokerWorld::default();
        env.reset(Some(1));
        assert!(env.step(2).is_ok());
        assert_eq!(env.step(2).unwrap_err(), StepError::EpisodeDone);
    }

    #[test]
    fn rejected_actions_leave_episode_alone() {
        let mut env = PokerWorld::default();
        env.reset(Some(2));
        assert_eq!(env.step(0).unwrap_err(), StepError::Undefined(0));
        assert_eq!(env.step(7).unwrap_err(), StepError::OutOfRange(7));
        assert!(env.step(2).is_ok());
    }

    #[test]
    fn fold_is_neutral() {
        let mut env = PokerWorld::default();
        env.reset(Some(3));
        let step = env.step(Action::Fold.into()).unwrap();
        assert_eq!(step.reward, 0.);
        assert!(step.terminated);
        assert!(!step.truncated);
        assert_eq!(step.observation.agent_stack, 100);
        assert_eq!(step.observation.villain_stack, 100);
        assert_eq!(step.observation.pot, 0);
        assert_eq!(step.info.outcome, Some(Outcome::Folded));
        assert_eq!(step.info.response, None);
    }

    #[test]
    fn villain_fold_rewards_raise() {
        let mut env = world(Box::new(Nit));
        env.replay(spot("2c 7d", "As Ad", "Ks Qh 9c 4d 3s"));
        let step = env.step(Action::Raise.into()).unwrap();
        assert_eq!(step.reward, 1.);
        assert_eq!(step.observation.pot, 100);
        assert_eq!(step.observation.agent_stack, 100);
        assert_eq!(step.info.outcome, Some(Outcome::Stolen));
        assert_eq!(step.info.response, Some(Response::Fold));
        assert_eq!(step.info.villain, None);
    }

    #[test]
    fn called_and_won() {
        let mut env = world(Box::new(Station));
        env.replay(spot("As Ad", "Kc Kd", "2c 7h 9s Jd 3c"));
        let step = env.step(Action::Raise.into()).unwrap();
        assert_eq!(step.reward, 1.);
        assert_eq!(step.observation.agent_stack, 200);
        assert_eq!(step.observation.villain_stack, 0);
        assert_eq!(step.observation.pot, 200);
        assert_eq!(step.info.outcome, Some(Outcome::Won));
    }

    #[test]
    fn called_and_lost() {
        let mut env = world(Box::new(Station));
        env.replay(spot("Kc Kd", "As Ad", "2c 7h 9s Jd 3c"));
        let step = env.step(Action::Raise.into()).unwrap();
        assert_eq!(step.reward, -1.);
        assert_eq!(step.observation.agent_stack, 0);
        assert_eq!(step.observation.villain_stack, 200);
        assert_eq!(step.info.villain.map(|s| s.ranking().name()), Some("OnePair"));
    }

    #[test]
    fn called_and_split() {
        let mut env = world(Box::new(Station));
        env.replay(spot("2c 3d", "4h 5h", "As Ks Qs Js Ts"));
        let step = env.step(Action::Raise.into()).unwrap();
        assert_eq!(step.reward, 0.);
        assert!(step.terminated);
        assert_eq!(step.observation.agent_stack, 100);
        assert_eq!(step.observation.villain_stack, 100);
        assert_eq!(step.info.outcome, Some(Outcome::Split));
    }

    #[test]
    fn seeds_replay_everything() {
        let mut a = PokerWorld::default();
        let mut b = PokerWorld::default();
        for seed in 0..32 {
            assert_eq!(a.reset(Some(seed)).0, b.reset(Some(seed)).0);
            assert_eq!(a.step(1).unwrap(), b.step(1).unwrap());
        }
    }

    #[test]
    fn close_ends_the_hand() {
        let mut env = PokerWorld::default();
        env.reset(Some(5));
        env.close();
        assert_eq!(env.step(1).unwrap_err(), StepError::EpisodeDone);
        env.reset(None);
        assert!(env.step(1).is_ok());
    }

    #[test]
    fn close_before_reset_is_harmless() {
        let mut env = PokerWorld::default();
        env.close();
        assert!(env.episode().is_none());
        assert_eq!(env.step(1).unwrap_err(), StepError::NotReset);
        env.reset(Some(6));
        assert!(env.step(1).is_ok());
    }

    #[test]
    fn impossible_replay_never_reaches_the_table() {
        let mut env = world(Box::new(Station));
        let overlap = Episode::try_from((
            Hole::try_from("As Kd").unwrap(),
            Hole::try_from("As Qh").unwrap(),
            Board::try_from("2c 7h 9s Jd 3c").unwrap(),
            100,
        ));
        assert!(overlap.is_err());
        let flop = Episode::try_from((
            Hole::try_from("As Kd").unwrap(),
            Hole::try_from("Qc Qh").unwrap(),
            Board::try_from("2c 7h 9s").unwrap(),
            100,
        ));
        assert!(flop.is_err());
        assert_eq!(env.step(1).unwrap_err(), StepError::NotReset);
    }

    #[test]
    fn invalid_configs_are_refused() {
        let loose = Config {
            aggression: 1.5,
            ..Config::default()
        };
        assert!(PokerWorld::try_from(loose).is_err());
        let deep = Config {
            stack: 20_000,
            ..Config::default()
        };
        assert!(PokerWorld::new(deep, Box::new(Station)).is_err());
        let short = Config {
            stack: 10,
            ..Config::default()
        };
        let mut env = PokerWorld::new(short, Box::new(Station)).unwrap();
        env.reset(Some(8));
        let step = env.step(1).unwrap();
        assert_eq!(step.observation.agent_stack + step.observation.villain_stack, 20);
    }
}
