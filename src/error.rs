use crate::Chips;
use crate::Leaves;
use crate::id::ID;
use crate::roster::Player;
use thiserror::Error;

/// Rejected input. The operation that raised it has mutated nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("player name must not be blank")]
    BlankName,
    #[error("table is full (at most {max} players)")]
    RosterFull { max: usize },
    #[error("table needs at least {min} players")]
    RosterTooSmall { min: usize },
    #[error("table must seat {min} to {max} players, found {len}")]
    RosterSize { len: usize, min: usize, max: usize },
    #[error("unknown player {0}")]
    UnknownPlayer(ID<Player>),
    #[error("player {0} appears more than once in the round")]
    DuplicatePlayer(ID<Player>),
    #[error("player {0} has no result for the round")]
    MissingPlayer(ID<Player>),
    #[error("leaf count {got} outside {min}..={max}")]
    LeafCount { got: Leaves, min: Leaves, max: Leaves },
    #[error("player {0} cannot settle against themselves")]
    SelfReference(ID<Player>),
    #[error("bet unit must be at least 1, got {0}")]
    BetUnit(Chips),
    #[error("amount overflows the balance range")]
    Overflow,
}

/// Storage failure. Recovered locally: reads fall back to defaults and
/// writes are logged, never surfaced as fatal.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid stored value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}
