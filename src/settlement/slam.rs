use super::*;
use crate::SLAM_BASE;
use crate::error::ValidationError;
use crate::id::ID;
use crate::roster::Player;
use crate::roster::Roster;

/// Chặt Heo. The victim pays the chopper `SLAM_BASE * bet`.
pub fn slam(
    chopper: ID<Player>,
    victim: ID<Player>,
    bet: Bet,
    roster: &Roster,
) -> Result<Settlement, ValidationError> {
    roster.validate()?;
    roster.player(chopper)?;
    roster.player(victim)?;
    if chopper == victim {
        return Err(ValidationError::SelfReference(chopper));
    }
    let amount = bet.scale(SLAM_BASE)?;
    log::debug!("chặt heo: {} takes {}k from {}", chopper, amount, victim);
    Ok(Settlement::new(
        Kind::Slam,
        vec![
            Entry::new(victim, -amount, Note::Chopped),
            Entry::new(chopper, amount, Note::Chop),
        ],
    ))
}
