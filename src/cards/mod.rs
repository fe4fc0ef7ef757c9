//! Cards, hands and showdown evaluation.
//!
//! - [`Card`] a single card encoded in one byte
//! - [`Hand`] an unordered set of cards as a 64-bit bitmask
//! - [`Hole`] and [`Board`] the private and community cards
//! - [`Deck`] the undealt remainder, drawn without replacement
//! - [`Evaluator`] and [`Strength`] best-five-card ranking with kickers
//! - [`Holding`] hole cards read against the board
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod hole;
pub use hole::*;

pub mod holding;
pub use holding::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
