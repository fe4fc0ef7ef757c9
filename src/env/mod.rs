//! The reinforcement-learning surface: reset, step, close.
mod action;
mod environment;
mod episode;
mod error;
mod info;
mod observation;
mod outcome;
mod step;

pub use action::*;
pub use environment::*;
pub use episode::*;
pub use error::*;
pub use info::*;
pub use observation::*;
pub use outcome::*;
pub use step::*;
