use crate::Chips;
use crate::error::ValidationError;
use crate::history::History;
use crate::history::Record;
use crate::id::ID;
use crate::id::Unique;
use crate::roster::Player;
use crate::roster::Roster;
use crate::save::Snapshot;
use crate::save::Store;
use crate::settlement::Bet;
use crate::settlement::Outcome;
use crate::settlement::Settlement;

/// The whole state of a scoring session: who is seated, what has been
/// settled, and the current bet unit.
///
/// Every mutation validates fully before touching anything, so a rejected
/// call leaves the session exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    roster: Roster,
    history: History,
    bet: Bet,
}

impl Session {
    /// Restores from storage, falling back to an empty table on bad data.
    pub fn load(store: &impl Store) -> Self {
        Self::from(Snapshot::load(store))
    }
    /// Best-effort write. Failures are logged and swallowed.
    pub fn save(&self, store: &mut impl Store) {
        if let Err(e) = self.snapshot().save(store) {
            log::warn!("could not save session: {}", e);
        }
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.roster.clone(), self.history.clone(), self.bet)
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

    pub fn add(&mut self, name: &str) -> Result<ID<Player>, ValidationError> {
        self.roster.add(name)
    }
    pub fn remove(&mut self, id: ID<Player>) -> Result<Player, ValidationError> {
        self.roster.remove(id)
    }
    pub fn set_bet(&mut self, bet: Bet) {
        log::info!("bet unit {} -> {}", self.bet, bet);
        self.bet = bet;
    }

    /// Settles an outcome at the current bet unit and applies it.
    pub fn settle(&mut self, outcome: &Outcome) -> Result<Record, ValidationError> {
        let settlement = outcome.settle(self.bet, &self.roster)?;
        self.apply(&settlement)
    }
    /// Adds every delta to its player and logs the record. If any entry
    /// names an unknown player or would overflow a balance, nothing moves.
    pub fn apply(&mut self, settlement: &Settlement) -> Result<Record, ValidationError> {
        let mut balances = self
            .roster
            .iter()
            .map(|p| (p.id(), p.balance()))
            .collect::<Vec<(ID<Player>, Chips)>>();
        for entry in settlement.entries() {
            let (_, balance) = balances
                .iter_mut()
                .find(|(id, _)| *id == entry.player())
                .ok_or(ValidationError::UnknownPlayer(entry.player()))?;
            *balance = balance
                .checked_add(entry.delta())
                .ok_or(ValidationError::Overflow)?;
        }
        for entry in settlement.entries() {
            self.roster.credit(entry.player(), entry.delta())?;
        }
        let record = Record::from_settlement(settlement, &self.roster);
        log::info!("{} settled at {}", record.kind(), record.time());
        self.history.push(record.clone());
        Ok(record)
    }
    /// Zeroes every balance and clears the history. Players stay seated.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.history.clear();
        log::info!("session reset");
    }
}

impl From<Snapshot> for Session {
    fn from(snapshot: Snapshot) -> Self {
        let (roster, history, bet) = snapshot.into_parts();
        Self {
            roster,
            history,
            bet,
        }
    }
}
