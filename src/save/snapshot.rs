use super::*;
use crate::error::PersistenceError;
use crate::history::History;
use crate::roster::Roster;
use crate::settlement::Bet;
use serde::de::DeserializeOwned;

/// Everything a session needs to resume: roster, history and bet unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    roster: Roster,
    history: History,
    bet: Bet,
}

impl Snapshot {
    pub fn new(roster: Roster, history: History, bet: Bet) -> Self {
        Self {
            roster,
            history,
            bet,
        }
    }
    /// Best-effort restore. Each key falls back to its default on its own
    /// when missing, unreadable or malformed; nothing here fails.
    pub fn load(store: &impl Store) -> Self {
        let roster = Self::read::<Roster>(store, PLAYERS_KEY);
        let history = Self::read::<History>(store, HISTORY_KEY);
        let bet = match store.get(BET_KEY) {
            Ok(Some(raw)) => Bet::clamp(&raw),
            Ok(None) => Bet::default(),
            Err(e) => {
                log::warn!("could not read {}: {}", BET_KEY, e);
                Bet::default()
            }
        };
        log::info!(
            "loaded {} players, {} rounds, bet {}",
            roster.len(),
            history.len(),
            bet
        );
        Self::new(roster, history, bet)
    }
    /// Writes all three keys; stops at the first failure.
    pub fn save(&self, store: &mut impl Store) -> Result<(), PersistenceError> {
        store.set(PLAYERS_KEY, &serde_json::to_string(&self.roster)?)?;
        store.set(HISTORY_KEY, &serde_json::to_string(&self.history)?)?;
        store.set(BET_KEY, &self.bet.get().to_string())?;
        Ok(())
    }
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn bet(&self) -> Bet {
        self.bet
    }
    pub fn into_parts(self) -> (Roster, History, Bet) {
        (self.roster, self.history, self.bet)
    }
    fn read<T>(store: &impl Store, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        Self::fetch(store, key)
            .inspect_err(|e| log::warn!("discarding stored {}: {}", key, e))
            .ok()
            .flatten()
            .unwrap_or_default()
    }
    fn fetch<T>(store: &impl Store, key: &str) -> Result<Option<T>, PersistenceError>
    where
        T: DeserializeOwned,
    {
        match store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}
