//! Settlement engine.
//!
//! Pure calculators, one per [`Outcome`] variant, that turn a reported
//! round into signed per-player deltas. Nothing here mutates a roster;
//! applying a [`Settlement`] is the [`Session`](crate::Session)'s job.
pub mod bet;
pub use bet::*;

pub mod declare;
pub use declare::*;

pub mod entry;
pub use entry::*;

pub mod kind;
pub use kind::*;

pub mod normal;
pub use normal::*;

pub mod note;
pub use note::*;

pub mod outcome;
pub use outcome::*;

pub mod settlement;
pub use settlement::*;

pub mod slam;
pub use slam::*;

use crate::error::ValidationError;
use crate::roster::Roster;

/// Settles any outcome against the current table and bet unit.
pub fn settle(outcome: &Outcome, bet: Bet, roster: &Roster) -> Result<Settlement, ValidationError> {
    outcome.settle(bet, roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ID;
    use crate::roster::Player;

    #[test]
    fn dispatch_matches_calculators() {
        let mut roster = Roster::default();
        let ids = ["A", "B", "C"]
            .iter()
            .map(|name| roster.add(name).unwrap())
            .collect::<Vec<ID<Player>>>();
        let bet = Bet::try_from(4).unwrap();
        let losers = vec![Loser::holding(ids[1], 2), Loser::congealed(ids[2])];
        assert_eq!(
            settle(&Outcome::Normal { winner: ids[0], losers: losers.clone() }, bet, &roster),
            normal(ids[0], &losers, bet, &roster)
        );
        assert_eq!(
            settle(
                &Outcome::Declare { reporter: ids[1], success: false, blocker: Some(ids[2]) },
                bet,
                &roster
            ),
            declare(ids[1], false, Some(ids[2]), bet, &roster)
        );
        assert_eq!(
            settle(&Outcome::Slam { chopper: ids[2], victim: ids[0] }, bet, &roster),
            slam(ids[2], ids[0], bet, &roster)
        );
    }
}
