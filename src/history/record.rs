use crate::Chips;
use crate::roster::Roster;
use crate::settlement::Kind;
use crate::settlement::Settlement;
use chrono::DateTime;
use chrono::Local;
use serde::Deserialize;
use serde::Serialize;

/// One line of a record: the player's name at the time, their signed
/// amount and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    name: String,
    amount: Chips,
    note: String,
}

impl Detail {
    pub fn new(name: &str, amount: Chips, note: &str) -> Self {
        Self {
            name: name.to_string(),
            amount,
            note: note.to_string(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// An applied settlement, frozen for display and storage.
///
/// Names are copied in so the record survives players leaving the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Creation time in epoch milliseconds.
    id: i64,
    /// Wall-clock time of day, for display.
    time: String,
    #[serde(rename = "type")]
    kind: Kind,
    details: Vec<Detail>,
}

impl Record {
    pub fn new(kind: Kind, details: Vec<Detail>) -> Self {
        Self::at(kind, details, Local::now())
    }
    pub fn at(kind: Kind, details: Vec<Detail>, when: DateTime<Local>) -> Self {
        Self {
            id: when.timestamp_millis(),
            time: when.format("%H:%M:%S").to_string(),
            kind,
            details,
        }
    }
    /// Freezes a settlement using the names currently on the roster.
    pub fn from_settlement(settlement: &Settlement, roster: &Roster) -> Self {
        let details = settlement
            .entries()
            .iter()
            .map(|e| {
                Detail::new(
                    roster.name(e.player()).unwrap_or("?"),
                    e.delta(),
                    &e.note().to_string(),
                )
            })
            .collect();
        Self::new(settlement.kind(), details)
    }
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn time(&self) -> &str {
        &self.time
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn details(&self) -> &[Detail] {
        &self.details
    }
    pub fn total(&self) -> Chips {
        self.details.iter().map(Detail::amount).sum()
    }
}
