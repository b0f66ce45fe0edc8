use super::Note;
use crate::Chips;
use crate::id::ID;
use crate::roster::Player;

/// One player's signed share of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    player: ID<Player>,
    delta: Chips,
    note: Note,
}

impl Entry {
    pub fn new(player: ID<Player>, delta: Chips, note: Note) -> Self {
        Self {
            player,
            delta,
            note,
        }
    }
    pub fn player(&self) -> ID<Player> {
        self.player
    }
    /// Positive when the player collects, negative when they pay.
    pub fn delta(&self) -> Chips {
        self.delta
    }
    pub fn note(&self) -> Note {
        self.note
    }
}
