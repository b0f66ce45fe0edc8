use super::*;
use crate::Chips;
use crate::id::ID;
use crate::roster::Player;

/// The itemized result of one round: who pays, who collects, and why.
///
/// Entries list payers first and receivers last, in a deterministic order.
/// Every settlement the engine produces sums to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    kind: Kind,
    entries: Vec<Entry>,
}

impl Settlement {
    pub fn new(kind: Kind, entries: Vec<Entry>) -> Self {
        Self { kind, entries }
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    /// Net delta for one player across all their entries.
    pub fn delta(&self, player: ID<Player>) -> Chips {
        self.entries
            .iter()
            .filter(|e| e.player() == player)
            .map(Entry::delta)
            .sum()
    }
    pub fn total(&self) -> Chips {
        self.entries.iter().map(Entry::delta).sum()
    }
    pub fn is_balanced(&self) -> bool {
        self.total() == 0
    }
}
