use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// The undealt remainder of a 52-card deck.
///
/// Wraps a [`Hand`] of remaining cards. Every draw removes the card it
/// returns, so anything dealt from one Deck is pairwise disjoint. The
/// randomness is supplied by the caller, which keeps seeded episodes
/// reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.0.size() > 0, "draw from empty deck");
        let n = self.0.size();
        let i = rng.random_range(0..n);
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::try_from(bits.trailing_zeros() as u8).expect("bit within deck mask");
        self.0.remove(card);
        card
    }
    /// Draws `n` cards as an unordered Hand.
    pub fn deal(&mut self, rng: &mut impl Rng, n: usize) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self, rng: &mut impl Rng) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
}
