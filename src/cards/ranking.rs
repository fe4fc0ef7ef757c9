use super::rank::Rank;

/// A poker hand's category, with the ranks that define it.
///
/// Variant order is showdown order, so the derived `Ord` compares
/// categories first and then the defining ranks left to right.
/// Side cards are not included; see [`Kickers`].
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, from the flush suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// ranks that may still serve as kickers
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::FourOAK(hi)
            | Ranking::Flush(hi) => !u16::from(hi),
            Ranking::Straight(_) | Ranking::FullHouse(..) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// anything beats the weakest category
    pub fn has_something(&self) -> bool {
        !matches!(self, Ranking::HighCard(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ranking::HighCard(_) => "HighCard",
            Ranking::OnePair(_) => "OnePair",
            Ranking::TwoPair(..) => "TwoPair",
            Ranking::ThreeOAK(_) => "ThreeOfAKind",
            Ranking::Straight(_) => "Straight",
            Ranking::Flush(_) => "Flush",
            Ranking::FullHouse(..) => "FullHouse",
            Ranking::FourOAK(_) => "FourOfAKind",
            Ranking::StraightFlush(_) => "StraightFlush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) | Ranking::TwoPair(r1, r2) => {
                write!(f, "{} {}{}", self.name(), r1, r2)
            }
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => write!(f, "{} {}", self.name(), r),
        }
    }
}
