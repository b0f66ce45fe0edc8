//! Terminal front-end.
//!
//! A `> ` prompt reads one [`Command`] per line; rounds are entered
//! through dialoguer prompts and every successful change is saved.
pub mod args;
pub use args::*;

pub mod command;
pub use command::*;

pub mod prompt;

pub mod render;

pub mod repl;
pub use repl::*;
