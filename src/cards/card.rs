use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Cards sort first by rank, then by suit within a rank.
///
/// # Representations
///
/// - `u8`: compact index `0..52`, the discrete value exposed to agents
/// - `u64`: single-bit representation for set membership in [`Hand`]
/// - `String`: two characters like `"As"` or `"Tc"`, used for serialization
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..52 => Ok(Self(n)),
            _ => Err(format!("card index out of range: {}", n)),
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.chars().count() {
            2 => {
                let mut chars = s.chars().map(String::from);
                let rank = chars.next().ok_or("missing rank")?;
                let suit = chars.next().ok_or("missing suit")?;
                let rank = Rank::try_from(rank.as_str())?;
                let suit = Suit::try_from(suit.as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card must be 2 characters: {:?}", s)),
        }
    }
}
impl TryFrom<String> for Card {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::try_from("Ts").unwrap();
        assert!(card.rank() == Rank::Ten);
        assert!(card.suit() == Suit::S);
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            let card = Card::try_from(n).unwrap();
            assert!(n == u8::from(card));
        }
        assert!(Card::try_from(52u8).is_err());
    }

    #[test]
    fn ten_of_spades_index() {
        assert_eq!(u8::from(Card::try_from("Ts").unwrap()), 35);
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("As Kd  2c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].to_string(), "As");
        assert_eq!(cards[2].to_string(), "2c");
        assert!(Card::parse("Ax").is_err());
    }

    #[test]
    fn serializes_as_notation() {
        let card = Card::try_from("Qh").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Qh\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }
}
