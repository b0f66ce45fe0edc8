//! Snapshot persistence.
//!
//! Sessions are stored as three independent string keys, so a corrupt
//! history never costs the roster. Reads and writes are best-effort.
pub mod directory;
pub use directory::*;

pub mod memory;
pub use memory::*;

pub mod snapshot;
pub use snapshot::*;

pub mod store;
pub use store::*;
