use super::rank::Rank;

/// A hand's kicker cards.
///
/// The side cards that break ties between equal [`Ranking`]s, stored as a
/// u16 rank mask. Comparing masks as integers compares the highest kicker
/// first, then the next, and so on, which is exactly showdown order.
///
/// [`Ranking`]: super::ranking::Ranking
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism
///
/// [T, J, 2]
/// xxx 0001100000001
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.into_iter().map(u16::from).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_kicker_dominates() {
        let a = Kickers::from(vec![Rank::King, Rank::Three, Rank::Two]);
        let b = Kickers::from(vec![Rank::Queen, Rank::Jack, Rank::Ten]);
        assert!(a > b);
    }

    #[test]
    fn ranks_come_out_descending() {
        let k = Kickers::from(vec![Rank::Two, Rank::Ace, Rank::Nine]);
        assert_eq!(Vec::<Rank>::from(k), vec![Rank::Ace, Rank::Nine, Rank::Two]);
        assert_eq!(k.to_string(), "A92");
    }
}
