use crate::Chips;
use crate::id::ID;
use crate::id::Unique;
use serde::Deserialize;
use serde::Serialize;

/// A seat at the table and its running balance.
///
/// The balance only moves through settled rounds or a full reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: ID<Self>,
    name: String,
    balance: Chips,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            id: ID::default(),
            name: name.trim().to_string(),
            balance: 0,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn balance(&self) -> Chips {
        self.balance
    }
    pub(crate) fn credit(&mut self, delta: Chips) {
        self.balance += delta;
    }
    pub(crate) fn clear(&mut self) {
        self.balance = 0;
    }
}

impl Unique for Player {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({:+}k)", self.name, self.balance)
    }
}
