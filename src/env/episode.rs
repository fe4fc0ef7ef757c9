use super::outcome::Outcome;
use crate::Chips;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Holding;
use rand::Rng;
use std::cmp::Ordering;

/// Everything about the hand in play.
///
/// Created by a deal, mutated once by [`Episode::settle`], then thrown away
/// at the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Episode {
    agent: Hole,
    villain: Hole,
    board: Board,
    stack: Chips,
    agent_stack: Chips,
    villain_stack: Chips,
    pot: Chips,
    outcome: Option<Outcome>,
}

impl Episode {
    /// Deals villain, then agent, then the board from one fresh deck.
    pub fn deal(rng: &mut impl Rng, stack: Chips) -> Self {
        let mut deck = Deck::new();
        let villain = deck.hole(rng);
        let agent = deck.hole(rng);
        let board = deck.deal(rng, Board::SIZE);
        let board = Board::try_from(board).expect("five cards make a board");
        Self::new(agent, villain, board, stack)
    }

    fn new(agent: Hole, villain: Hole, board: Board, stack: Chips) -> Self {
        Self {
            agent,
            villain,
            board,
            stack,
            agent_stack: stack,
            villain_stack: stack,
            pot: 0,
            outcome: None,
        }
    }

    pub fn agent(&self) -> Holding {
        Holding::from((self.agent, self.board))
    }
    pub fn villain(&self) -> Holding {
        Holding::from((self.villain, self.board))
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn agent_stack(&self) -> Chips {
        self.agent_stack
    }
    pub fn villain_stack(&self) -> Chips {
        self.villain_stack
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Compares both holdings at showdown.
    pub fn showdown(&self) -> Outcome {
        match self.agent().strength().cmp(&self.villain().strength()) {
            Ordering::Greater => Outcome::Won,
            Ordering::Less => Outcome::Lost,
            Ordering::Equal => Outcome::Split,
        }
    }

    /// Pushes chips according to the outcome and ends the hand.
    pub fn settle(&mut self, outcome: Outcome) {
        debug_assert!(self.outcome.is_none());
        let (agent, villain) = outcome.stacks(self.stack);
        self.agent_stack = agent;
        self.villain_stack = villain;
        self.pot = outcome.pot(self.stack);
        self.outcome = Some(outcome);
    }

    /// all nine dealt cards
    pub fn dealt(&self) -> Hand {
        Hand::add(Hand::from(self.villain().hole()), Hand::from(self.agent()))
    }
}

/// a specific deal, for replaying known spots.
/// rejects anything a single deck could not have dealt.
impl TryFrom<(Hole, Hole, Board, Chips)> for Episode {
    type Error = String;
    fn try_from(
        (agent, villain, board, stack): (Hole, Hole, Board, Chips),
    ) -> Result<Self, Self::Error> {
        let hero = Hand::from(agent);
        let other = Hand::from(villain);
        let shared = Hand::from(board);
        if board.size() != Board::SIZE {
            return Err(format!("board {} is not a full river", board));
        }
        if !hero.disjoint(&other) || !hero.disjoint(&shared) || !other.disjoint(&shared) {
            return Err(format!("card dealt twice: {} vs {} on {}", agent, villain, board));
        }
        if stack <= 0 || stack > Chips::MAX / crate::N as Chips {
            return Err(format!("stack {} out of range", stack));
        }
        Ok(Self::new(agent, villain, board, stack))
    }
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "agent {} villain {} board {}",
            self.agent, self.villain, self.board
        )
    }
}
