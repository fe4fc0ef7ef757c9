use super::episode::Episode;
use crate::Chips;
use crate::cards::Board;
use crate::cards::Hole;
use serde::Serialize;

/// What the environment reports after reset and every step.
///
/// Serializes with the keys `agent`, `villain`, `cards`, `pot`,
/// `agent_stack` and `villain_stack`. The villain's hole cards are part of
/// the observation; agents that should not see them must ignore the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub agent: Hole,
    pub villain: Hole,
    pub cards: Board,
    pub pot: Chips,
    pub agent_stack: Chips,
    pub villain_stack: Chips,
}

impl Observation {
    /// Number of discrete values in [`Observation::discrete`].
    pub const SIZE: usize = 2 + 2 + Board::SIZE + 3;

    /// Flat discrete encoding: card indices in `0..52` (agent, villain,
    /// board, each low to high) followed by pot and both stacks.
    pub fn discrete(&self) -> [usize; Self::SIZE] {
        let (a1, a2) = self.agent.cards();
        let (v1, v2) = self.villain.cards();
        let mut values = [0usize; Self::SIZE];
        let cards = [a1, a2, v1, v2]
            .into_iter()
            .chain(self.cards.cards())
            .map(|card| u8::from(card) as usize);
        for (slot, value) in values.iter_mut().zip(cards) {
            *slot = value;
        }
        values[Self::SIZE - 3] = self.pot as usize;
        values[Self::SIZE - 2] = self.agent_stack as usize;
        values[Self::SIZE - 1] = self.villain_stack as usize;
        values
    }
}

impl From<&Episode> for Observation {
    fn from(episode: &Episode) -> Self {
        Self {
            agent: episode.agent().hole(),
            villain: episode.villain().hole(),
            cards: episode.board(),
            pot: episode.pot(),
            agent_stack: episode.agent_stack(),
            villain_stack: episode.villain_stack(),
        }
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] vs [{}] on [{}] pot {} stacks {}/{}",
            self.agent, self.villain, self.cards, self.pot, self.agent_stack, self.villain_stack
        )
    }
}
