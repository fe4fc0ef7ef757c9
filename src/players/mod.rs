//! Agent-side decision makers that drive the environment from the binaries.
#[cfg(feature = "server")]
mod human;
mod player;
mod policy;
mod robot;

#[cfg(feature = "server")]
pub use human::*;
pub use player::*;
pub use policy::*;
pub use robot::*;
