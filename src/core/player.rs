//! Player identification and per-player lookup tables.
//!
//! ## Player
//!
//! The two sides of the game: the human at the keyboard and the machine
//! driven by the search engine.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`. Used for per-player
//! constants such as search direction and terminal values, so callers look
//! a value up instead of branching on the player.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::NimError;

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player.
    Human,
    /// The computer player.
    Machine,
}

impl Player {
    /// Both players, in table order.
    pub const ALL: [Player; 2] = [Player::Human, Player::Machine];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// Slot of this player in a `PlayerMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Machine => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Machine => write!(f, "Machine"),
        }
    }
}

/// Parses a first-mover choice as typed by a user.
///
/// ```
/// use nim_engine::core::Player;
///
/// assert_eq!("human".parse::<Player>().unwrap(), Player::Human);
/// assert_eq!("Computer".parse::<Player>().unwrap(), Player::Machine);
/// assert!("nobody".parse::<Player>().is_err());
/// ```
impl FromStr for Player {
    type Err = NimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "h" => Ok(Player::Human),
            "machine" | "computer" | "m" | "c" => Ok(Player::Machine),
            _ => Err(NimError::UnknownPlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// Per-player data with one slot for each side.
///
/// ## Example
///
/// ```
/// use nim_engine::core::{Player, PlayerMap};
///
/// let mut takes: PlayerMap<u32> = PlayerMap::new([0, 0]);
/// takes[Player::Machine] += 3;
///
/// assert_eq!(takes[Player::Human], 0);
/// assert_eq!(takes[Player::Machine], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map from values in `Player::ALL` order (Human, Machine).
    #[must_use]
    pub const fn new(data: [T; 2]) -> Self {
        Self { data }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Human), factory(Player::Machine)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Machine);
        assert_eq!(Player::Machine.opponent(), Player::Human);
        assert_eq!(Player::Human.opponent().opponent(), Player::Human);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::Human), "Human");
        assert_eq!(format!("{}", Player::Machine), "Machine");
    }

    #[test]
    fn test_parse_player() {
        assert_eq!("H".parse::<Player>().unwrap(), Player::Human);
        assert_eq!(" machine ".parse::<Player>().unwrap(), Player::Machine);
        assert_eq!("c".parse::<Player>().unwrap(), Player::Machine);

        let err = "robot".parse::<Player>().unwrap_err();
        assert_eq!(
            err,
            NimError::UnknownPlayer {
                input: "robot".to_string()
            }
        );
    }

    #[test]
    fn test_player_map_from_fn() {
        let map = PlayerMap::from_fn(|p| p.index() * 10);

        assert_eq!(map[Player::Human], 0);
        assert_eq!(map[Player::Machine], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();

        map[Player::Human] = 4;
        *map.get_mut(Player::Machine) = 7;

        assert_eq!(map[Player::Human], 4);
        assert_eq!(map[Player::Machine], 7);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::new(['a', 'b']);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::Human, &'a'), (Player::Machine, &'b')]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::new([1u32, 2u32]);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
