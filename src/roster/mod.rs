//! Players seated at the table.
pub mod player;
pub use player::*;

pub mod roster;
pub use roster::*;
