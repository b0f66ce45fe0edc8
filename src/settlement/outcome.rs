use super::*;
use crate::CONG_PENALTY_BASE;
use crate::Chips;
use crate::Leaves;
use crate::MAX_LEAVES;
use crate::MIN_LEAVES;
use crate::error::ValidationError;
use crate::id::ID;
use crate::roster::Player;
use crate::roster::Roster;

/// How one player lost a normal round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loser {
    id: ID<Player>,
    congealed: bool,
    leaves: Leaves,
}

impl Loser {
    pub fn new(id: ID<Player>, congealed: bool, leaves: Leaves) -> Self {
        Self {
            id,
            congealed,
            leaves,
        }
    }
    /// Left holding `leaves` cards.
    pub fn holding(id: ID<Player>, leaves: Leaves) -> Self {
        Self::new(id, false, leaves)
    }
    /// Never got to play a card.
    pub fn congealed(id: ID<Player>) -> Self {
        Self::new(id, true, 0)
    }
    pub fn id(&self) -> ID<Player> {
        self.id
    }
    pub fn is_congealed(&self) -> bool {
        self.congealed
    }
    pub fn leaves(&self) -> Leaves {
        self.leaves
    }
    /// Leaf count only matters when the loser is not congealed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.congealed || (MIN_LEAVES..=MAX_LEAVES).contains(&self.leaves) {
            true => Ok(()),
            false => Err(ValidationError::LeafCount {
                got: self.leaves,
                min: MIN_LEAVES,
                max: MAX_LEAVES,
            }),
        }
    }
    pub fn penalty(&self, bet: Bet) -> Result<Chips, ValidationError> {
        match self.congealed {
            true => bet.scale(CONG_PENALTY_BASE),
            false => bet.scale(Chips::from(self.leaves)),
        }
    }
    pub fn note(&self) -> Note {
        match self.congealed {
            true => Note::Cong,
            false => Note::Leaves(self.leaves),
        }
    }
}

/// A reported round result, one variant per way a round can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Someone went out first; everyone else pays by what they hold.
    Normal {
        winner: ID<Player>,
        losers: Vec<Loser>,
    },
    /// Báo Sâm: someone declared they would go out in one unbroken run.
    /// `blocker` is whoever caught a failed declaration, if anyone.
    Declare {
        reporter: ID<Player>,
        success: bool,
        blocker: Option<ID<Player>>,
    },
    /// Chặt Heo: a direct forfeit between two players.
    Slam {
        chopper: ID<Player>,
        victim: ID<Player>,
    },
}

impl Outcome {
    /// Routes the outcome to its calculator.
    pub fn settle(&self, bet: Bet, roster: &Roster) -> Result<Settlement, ValidationError> {
        match self {
            Self::Normal { winner, losers } => normal(*winner, losers, bet, roster),
            Self::Declare {
                reporter,
                success,
                blocker,
            } => declare(*reporter, *success, *blocker, bet, roster),
            Self::Slam { chopper, victim } => slam(*chopper, *victim, bet, roster),
        }
    }
}
