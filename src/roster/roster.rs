use super::Player;
use crate::Chips;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::error::ValidationError;
use crate::id::ID;
use crate::id::Unique;
use serde::Deserialize;
use serde::Serialize;

/// Ordered list of players at the table.
///
/// Insertion order is seat order: it is the order players are listed,
/// enumerated by the settlement engine, and stored in snapshots.
/// Never holds more than [`MAX_PLAYERS`]; holds fewer than
/// [`MIN_PLAYERS`] only while the table is being filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster(Vec<Player>);

impl Roster {
    /// Seats a new player with a zero balance.
    pub fn add(&mut self, name: &str) -> Result<ID<Player>, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if self.len() >= MAX_PLAYERS {
            return Err(ValidationError::RosterFull { max: MAX_PLAYERS });
        }
        let player = Player::new(name);
        let id = player.id();
        log::info!("seated {}", player);
        self.0.push(player);
        Ok(id)
    }
    /// Unseats a player, as long as the table keeps its minimum.
    pub fn remove(&mut self, id: ID<Player>) -> Result<Player, ValidationError> {
        let index = self.index(id)?;
        if self.len() <= MIN_PLAYERS {
            return Err(ValidationError::RosterTooSmall { min: MIN_PLAYERS });
        }
        let player = self.0.remove(index);
        log::info!("unseated {} at {:+}k", player.name(), player.balance());
        Ok(player)
    }
    /// Checks the table can host a round.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.len()) {
            true => Ok(()),
            false => Err(ValidationError::RosterSize {
                len: self.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            }),
        }
    }
    pub fn get(&self, id: ID<Player>) -> Option<&Player> {
        self.0.iter().find(|p| p.id() == id)
    }
    pub fn player(&self, id: ID<Player>) -> Result<&Player, ValidationError> {
        self.get(id).ok_or(ValidationError::UnknownPlayer(id))
    }
    /// Looks a player up by 1-based seat number or, failing that, by
    /// case-insensitive name.
    pub fn find(&self, query: &str) -> Option<ID<Player>> {
        let query = query.trim();
        query
            .parse::<usize>()
            .ok()
            .and_then(|seat| seat.checked_sub(1))
            .and_then(|i| self.0.get(i))
            .or_else(|| {
                self.0
                    .iter()
                    .find(|p| p.name().to_lowercase() == query.to_lowercase())
            })
            .map(Player::id)
    }
    pub fn name(&self, id: ID<Player>) -> Option<&str> {
        self.get(id).map(Player::name)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
    pub fn ids(&self) -> impl Iterator<Item = ID<Player>> + '_ {
        self.0.iter().map(Player::id)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.len() >= MAX_PLAYERS
    }
    /// Sum of all balances. Zero unless players left mid-session.
    pub fn total(&self) -> Chips {
        self.0.iter().map(Player::balance).sum()
    }
    pub(crate) fn credit(&mut self, id: ID<Player>, delta: Chips) -> Result<(), ValidationError> {
        let index = self.index(id)?;
        self.0[index].credit(delta);
        Ok(())
    }
    pub(crate) fn clear(&mut self) {
        self.0.iter_mut().for_each(Player::clear);
    }
    fn index(&self, id: ID<Player>) -> Result<usize, ValidationError> {
        self.0
            .iter()
            .position(|p| p.id() == id)
            .ok_or(ValidationError::UnknownPlayer(id))
    }
}

/// Accepts a stored player list only if it could have been built through
/// [`Roster::add`].
impl TryFrom<Vec<Player>> for Roster {
    type Error = ValidationError;
    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        if players.len() > MAX_PLAYERS {
            return Err(ValidationError::RosterFull { max: MAX_PLAYERS });
        }
        if players.iter().any(|p| p.name().trim().is_empty()) {
            return Err(ValidationError::BlankName);
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.id() == player.id()) {
                return Err(ValidationError::DuplicatePlayer(player.id()));
            }
        }
        Ok(Self(players))
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.0
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A full-size-or-smaller table of generically named players.
impl crate::Arbitrary for Roster {
    fn random() -> Self {
        use rand::Rng;
        let n = rand::rng().random_range(MIN_PLAYERS..=MAX_PLAYERS);
        let mut roster = Self::default();
        for i in 0..n {
            roster.0.push(Player::new(&format!("P{}", i + 1)));
        }
        roster
    }
}
