use super::card::Card;
use super::hand::Hand;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two cards are present.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// the two cards, low then high
    pub fn cards(&self) -> (Card, Card) {
        let mut hand = self.0;
        let lo = hand.next().expect("two cards");
        let hi = hand.next().expect("two cards");
        (lo, hi)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        assert!(a != b, "hole cards must be distinct");
        Self(Hand::from(a | b))
    }
}

impl TryFrom<Hand> for Hole {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(format!("hole must contain exactly two cards, got {}", n)),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

impl serde::Serialize for Hole {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cards().serialize(serializer)
    }
}
