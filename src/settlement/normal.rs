use super::*;
use crate::Chips;
use crate::error::ValidationError;
use crate::id::ID;
use crate::roster::Player;
use crate::roster::Roster;

/// Normal round ("Ván Thường").
///
/// Each loser pays `leaves * bet`, or `CONG_PENALTY_BASE * bet` if
/// congealed; the winner collects the lot. Losers must cover every other
/// seat exactly once. Entries follow the loser order given, winner last.
pub fn normal(
    winner: ID<Player>,
    losers: &[Loser],
    bet: Bet,
    roster: &Roster,
) -> Result<Settlement, ValidationError> {
    roster.validate()?;
    roster.player(winner)?;
    for (i, loser) in losers.iter().enumerate() {
        roster.player(loser.id())?;
        if loser.id() == winner || losers[..i].iter().any(|l| l.id() == loser.id()) {
            return Err(ValidationError::DuplicatePlayer(loser.id()));
        }
        loser.validate()?;
    }
    if let Some(missing) = roster
        .ids()
        .filter(|id| *id != winner)
        .find(|id| losers.iter().all(|l| l.id() != *id))
    {
        return Err(ValidationError::MissingPlayer(missing));
    }
    let mut pot: Chips = 0;
    let mut entries = Vec::with_capacity(losers.len() + 1);
    for loser in losers {
        let penalty = loser.penalty(bet)?;
        pot = pot.checked_add(penalty).ok_or(ValidationError::Overflow)?;
        entries.push(Entry::new(loser.id(), -penalty, loser.note()));
    }
    entries.push(Entry::new(winner, pot, Note::Winner));
    log::debug!("normal round: winner collects {}k", pot);
    Ok(Settlement::new(Kind::Normal, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::CONG_PENALTY_BASE;
    use crate::id::Unique;
    use rand::Rng;

    fn table(n: usize) -> (Roster, Vec<ID<Player>>) {
        let mut roster = Roster::default();
        let ids = ["A", "B", "C", "D", "E"]
            .iter()
            .take(n)
            .map(|name| roster.add(name).unwrap())
            .collect();
        (roster, ids)
    }

    #[test]
    fn four_player_example() {
        let (roster, ids) = table(4);
        let [a, b, c, d] = ids[..] else { panic!() };
        let bet = Bet::try_from(2).unwrap();
        let losers = [
            Loser::holding(b, 3),
            Loser::congealed(c),
            Loser::holding(d, 5),
        ];
        let settlement = normal(a, &losers, bet, &roster).unwrap();
        assert_eq!(settlement.kind(), Kind::Normal);
        assert_eq!(settlement.delta(b), -6);
        assert_eq!(settlement.delta(c), -30);
        assert_eq!(settlement.delta(d), -10);
        assert_eq!(settlement.delta(a), 46);
        assert!(settlement.is_balanced());
    }

    #[test]
    fn losers_first_winner_last() {
        let (roster, ids) = table(3);
        let [a, b, c] = ids[..] else { panic!() };
        let losers = [Loser::holding(c, 2), Loser::holding(b, 9)];
        let settlement = normal(a, &losers, Bet::default(), &roster).unwrap();
        let order = settlement
            .entries()
            .iter()
            .map(|e| (e.player(), e.note()))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                (c, Note::Leaves(2)),
                (b, Note::Leaves(9)),
                (a, Note::Winner)
            ]
        );
    }

    #[test]
    fn congealed_penalty_is_fixed() {
        let (roster, ids) = table(2);
        for leaves in [0, 4, 10, 200] {
            let bet = Bet::try_from(7).unwrap();
            let losers = [Loser::new(ids[1], true, leaves)];
            let settlement = normal(ids[0], &losers, bet, &roster).unwrap();
            assert_eq!(settlement.delta(ids[1]), -CONG_PENALTY_BASE * 7);
        }
    }

    #[test]
    fn rejects_missing_loser() {
        let (roster, ids) = table(4);
        let losers = [Loser::holding(ids[1], 3), Loser::holding(ids[3], 3)];
        assert_eq!(
            normal(ids[0], &losers, Bet::default(), &roster),
            Err(ValidationError::MissingPlayer(ids[2]))
        );
    }

    #[test]
    fn rejects_duplicate_loser() {
        let (roster, ids) = table(3);
        let losers = [
            Loser::holding(ids[1], 3),
            Loser::holding(ids[1], 4),
            Loser::holding(ids[2], 5),
        ];
        assert_eq!(
            normal(ids[0], &losers, Bet::default(), &roster),
            Err(ValidationError::DuplicatePlayer(ids[1]))
        );
    }

    #[test]
    fn rejects_winner_as_loser() {
        let (roster, ids) = table(2);
        let losers = [Loser::holding(ids[0], 3), Loser::holding(ids[1], 4)];
        assert_eq!(
            normal(ids[0], &losers, Bet::default(), &roster),
            Err(ValidationError::DuplicatePlayer(ids[0]))
        );
    }

    #[test]
    fn rejects_unknown_players() {
        let (roster, ids) = table(2);
        let stranger = ID::default();
        assert_eq!(
            normal(stranger, &[Loser::holding(ids[1], 3)], Bet::default(), &roster),
            Err(ValidationError::UnknownPlayer(stranger))
        );
        assert_eq!(
            normal(ids[0], &[Loser::holding(stranger, 3)], Bet::default(), &roster),
            Err(ValidationError::UnknownPlayer(stranger))
        );
    }

    #[test]
    fn rejects_leaf_count_out_of_range() {
        let (roster, ids) = table(3);
        for leaves in [0, 11] {
            let losers = [Loser::holding(ids[1], leaves), Loser::holding(ids[2], 3)];
            assert!(matches!(
                normal(ids[0], &losers, Bet::default(), &roster),
                Err(ValidationError::LeafCount { got, .. }) if got == leaves
            ));
        }
    }

    #[test]
    fn rejects_undersized_table() {
        let (roster, ids) = table(1);
        assert!(matches!(
            normal(ids[0], &[], Bet::default(), &roster),
            Err(ValidationError::RosterSize { len: 1, .. })
        ));
    }

    #[test]
    fn random_rounds_are_zero_sum() {
        let ref mut rng = rand::rng();
        for _ in 0..256 {
            let roster = Roster::random();
            let bet = Bet::random();
            let ids = roster.iter().map(Player::id).collect::<Vec<_>>();
            let winner = ids[rng.random_range(0..ids.len())];
            let losers = ids
                .iter()
                .filter(|id| **id != winner)
                .map(|id| match rng.random_bool(0.2) {
                    true => Loser::congealed(*id),
                    false => Loser::holding(*id, rng.random_range(1..=10)),
                })
                .collect::<Vec<_>>();
            let settlement = normal(winner, &losers, bet, &roster).unwrap();
            assert_eq!(settlement.total(), 0);
            assert_eq!(settlement.entries().len(), ids.len());
            assert!(settlement.delta(winner) > 0);
        }
    }
}
