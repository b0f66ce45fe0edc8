use super::*;
use crate::Chips;
use crate::DECLARE_BASE;
use crate::error::ValidationError;
use crate::id::ID;
use crate::roster::Player;
use crate::roster::Roster;

/// Báo Sâm.
///
/// On success every other seat pays the reporter `DECLARE_BASE * bet`.
/// On failure the reporter pays that amount once per other seat: all of it
/// to the blocker if someone caught the declaration, otherwise split
/// across the other seats. A blocker is ignored on success.
pub fn declare(
    reporter: ID<Player>,
    success: bool,
    blocker: Option<ID<Player>>,
    bet: Bet,
    roster: &Roster,
) -> Result<Settlement, ValidationError> {
    roster.validate()?;
    roster.player(reporter)?;
    let per = bet.scale(DECLARE_BASE)?;
    let others = roster.ids().filter(|id| *id != reporter).collect::<Vec<_>>();
    let total = per
        .checked_mul(others.len() as Chips)
        .ok_or(ValidationError::Overflow)?;
    let settlement = match (success, blocker) {
        (true, _) => Settlement::new(
            Kind::Declared,
            others
                .iter()
                .map(|id| Entry::new(*id, -per, Note::LostDeclare))
                .chain(std::iter::once(Entry::new(reporter, total, Note::Declared)))
                .collect(),
        ),
        (false, Some(blocker)) => {
            roster.player(blocker)?;
            if blocker == reporter {
                return Err(ValidationError::SelfReference(reporter));
            }
            Settlement::new(
                Kind::Forfeit,
                vec![
                    Entry::new(reporter, -total, Note::Forfeit),
                    Entry::new(blocker, total, Note::Caught),
                ],
            )
        }
        (false, None) => Settlement::new(
            Kind::Forfeit,
            std::iter::once(Entry::new(reporter, -total, Note::Forfeit))
                .chain(split(total, &others))
                .collect(),
        ),
    };
    log::debug!("báo sâm by {}: {} moves {}k", reporter, settlement.kind(), total);
    Ok(settlement)
}

/// Shares `total` across `payees` in seat order. Leftover units go one
/// each to the earliest seats, so the shares always add back to `total`.
fn split(total: Chips, payees: &[ID<Player>]) -> Vec<Entry> {
    let n = payees.len() as Chips;
    let share = total / n;
    let leftover = (total % n) as usize;
    payees
        .iter()
        .enumerate()
        .map(|(i, id)| match i < leftover {
            true => Entry::new(*id, share + 1, Note::Split),
            false => Entry::new(*id, share, Note::Split),
        })
        .collect()
}
