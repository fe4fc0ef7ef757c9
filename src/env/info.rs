use super::episode::Episode;
use super::outcome::Outcome;
use crate::cards::Strength;
use crate::villain::Response;
use serde::Serialize;

/// Auxiliary information alongside each observation.
///
/// `hand` is always the agent's classification over hole + board.
/// The remaining fields only fill in once the step has settled the hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Info {
    pub hand: Strength,
    pub category: &'static str,
    pub has_something: bool,
    pub equity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Response>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// only revealed when the hand went to showdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub villain: Option<Strength>,
}

impl Info {
    pub fn with_response(mut self, response: Response) -> Self {
        self.response = Some(response);
        self
    }
}

impl From<&Episode> for Info {
    fn from(episode: &Episode) -> Self {
        let agent = episode.agent();
        let hand = agent.strength();
        let outcome = episode.outcome();
        Self {
            hand,
            category: hand.ranking().name(),
            has_something: hand.has_something(),
            equity: agent.equity(),
            response: None,
            outcome,
            villain: outcome
                .filter(Outcome::called)
                .map(|_| episode.villain().strength()),
        }
    }
}
