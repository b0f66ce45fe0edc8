use crate::error::PersistenceError;

/// Key holding the roster, as a JSON list of players.
pub const PLAYERS_KEY: &str = "samloc_players";
/// Key holding the history, as a newest-first JSON list of records.
pub const HISTORY_KEY: &str = "samloc_history";
/// Key holding the bet unit, as a decimal string.
pub const BET_KEY: &str = "samloc_bet_per_card";

/// Flat string key/value storage for session snapshots.
pub trait Store {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}
