//! Applied settlements, newest first.
pub mod history;
pub use history::*;

pub mod record;
pub use record::*;
