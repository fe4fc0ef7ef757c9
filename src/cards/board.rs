use super::card::Card;
use super::hand::Hand;

/// The community cards visible to both players.
///
/// A board holds 0, 3, 4 or 5 cards. This environment deals all five
/// up front since there is only one decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(Hand);

impl Board {
    pub const SIZE: usize = 5;
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn cards(&self) -> Vec<Card> {
        Vec::from(self.0)
    }
}

/// Board isomorphism
/// Board -> Hand is infallible
/// Hand -> Board should select at 0, 3, 4, 5 cards
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}
impl TryFrom<Hand> for Board {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            0 | 3 | 4 | 5 => Ok(Self(hand)),
            n => Err(format!("board cannot hold {} cards", n)),
        }
    }
}
impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cards().serialize(serializer)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_sizes() {
        assert!(Board::try_from("").is_ok());
        assert!(Board::try_from("As Kd").is_err());
        assert!(Board::try_from("As Kd Qh").is_ok());
        assert!(Board::try_from("As Kd Qh Jc Ts").is_ok());
        assert!(Board::try_from("As Kd Qh Jc Ts 9s").is_err());
    }
}
