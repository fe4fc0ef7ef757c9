use super::board::Board;
use super::hand::Hand;
use super::hands::HandIterator;
use super::hole::Hole;
use super::strength::Strength;
use std::cmp::Ordering;

/// One player's hole cards read against the board.
///
/// This is what gets compared at showdown: the best five of the seven
/// cards, its category, and the equity it carries against an unknown
/// opponent holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holding {
    hole: Hole,
    board: Board,
}

impl Holding {
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn strength(&self) -> Strength {
        Strength::from(Hand::from(*self))
    }
    /// better than the weakest category (high card)
    pub fn has_something(&self) -> bool {
        self.strength().has_something()
    }
    /// Probability of winning at showdown against a uniformly random
    /// opponent hole, counting ties as half.
    ///
    /// Only cards this player can see are excluded, so with a full board
    /// this enumerates all C(45, 2) = 990 holdings.
    pub fn equity(&self) -> f32 {
        let hand = Hand::from(*self);
        let hero = Strength::from(hand);
        let (won, sum) = HandIterator::from((2, hand))
            .map(|opponent| Hand::add(Hand::from(self.board), opponent))
            .map(Strength::from)
            .map(|opponent| hero.cmp(&opponent))
            .fold((0u32, 0u32), |(won, sum), ord| match ord {
                Ordering::Greater => (won + 2, sum + 2),
                Ordering::Equal => (won + 1, sum + 2),
                Ordering::Less => (won, sum + 2),
            });
        match sum {
            0 => 0.5,
            _ => won as f32 / sum as f32,
        }
    }
}

impl From<(Hole, Board)> for Holding {
    fn from((hole, board): (Hole, Board)) -> Self {
        debug_assert!(Hand::from(hole).disjoint(&Hand::from(board)));
        Self { hole, board }
    }
}

impl From<Holding> for Hand {
    fn from(holding: Holding) -> Self {
        Hand::add(Hand::from(holding.hole), Hand::from(holding.board))
    }
}

impl std::fmt::Display for Holding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} | {}", self.hole, self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(hole: &str, board: &str) -> Holding {
        Holding::from((Hole::try_from(hole).unwrap(), Board::try_from(board).unwrap()))
    }

    #[test]
    fn pair_on_board_is_something() {
        assert!(holding("2c 7d", "Ks Kh 9c 4d 3s").has_something());
    }

    #[test]
    fn dry_high_card_is_nothing() {
        assert!(!holding("2c 7d", "Ks Qh 9c 4d 3s").has_something());
    }

    #[test]
    fn nuts_have_full_equity() {
        let equity = holding("As Ks", "Qs Js Ts 2d 3c").equity();
        assert!((equity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn playing_the_board_is_a_coin_flip() {
        // royal flush on board: every holding ties
        let equity = holding("2c 3d", "As Ks Qs Js Ts").equity();
        assert!((equity - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn weak_hands_have_low_equity() {
        assert!(holding("2c 7d", "Ks Qh 9c 4s 3s").equity() < 0.2);
    }
}
