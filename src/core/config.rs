//! Game configuration.
//!
//! A game is fully described by three numbers chosen at start-up: the
//! initial pile, the take limit and who moves first. Nothing else about
//! the rules is configurable.

use serde::{Deserialize, Serialize};

use super::error::NimError;
use super::player::Player;
use super::state::GameState;

/// Parameters for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Sticks in the pile at the start. Zero gives a game that is over
    /// before it begins.
    pub initial_count: u32,

    /// Largest number of sticks one move may remove. Must be at least 1.
    pub max_take: u32,

    /// Who makes the first move.
    pub first_mover: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_count: 21,
            max_take: 3,
            first_mover: Player::Machine,
        }
    }
}

impl GameConfig {
    /// Create a config from its three parameters.
    pub fn new(initial_count: u32, max_take: u32, first_mover: Player) -> Self {
        Self {
            initial_count,
            max_take,
            first_mover,
        }
    }

    /// Set the initial pile size.
    pub fn with_initial_count(mut self, count: u32) -> Self {
        self.initial_count = count;
        self
    }

    /// Set the take limit.
    pub fn with_max_take(mut self, max_take: u32) -> Self {
        self.max_take = max_take;
        self
    }

    /// Set who moves first.
    pub fn with_first_mover(mut self, player: Player) -> Self {
        self.first_mover = player;
        self
    }

    /// Check that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), NimError> {
        if self.max_take == 0 {
            return Err(NimError::InvalidConfig {
                message: "max take must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Build the starting position.
    pub fn initial_state(&self) -> Result<GameState, NimError> {
        self.validate()?;
        Ok(GameState::new(
            self.initial_count,
            self.max_take,
            self.first_mover,
        ))
    }
}

/// Parse a count typed by a user.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// whole number is a `NimError::Parse`.
///
/// ```
/// use nim_engine::core::parse_count;
///
/// assert_eq!(parse_count(" 21\n").unwrap(), 21);
/// assert!(parse_count("three").is_err());
/// assert!(parse_count("-1").is_err());
/// ```
pub fn parse_count(input: &str) -> Result<u32, NimError> {
    input.trim().parse().map_err(|source| NimError::Parse {
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_count, 21);
        assert_eq!(config.max_take, 3);
        assert_eq!(config.first_mover, Player::Machine);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_initial_count(10)
            .with_max_take(4)
            .with_first_mover(Player::Human);

        assert_eq!(config, GameConfig::new(10, 4, Player::Human));
    }

    #[test]
    fn test_zero_max_take_rejected() {
        let config = GameConfig::default().with_max_take(0);
        assert!(matches!(
            config.validate(),
            Err(NimError::InvalidConfig { .. })
        ));
        assert!(config.initial_state().is_err());
    }

    #[test]
    fn test_empty_pile_accepted() {
        let state = GameConfig::new(0, 3, Player::Human).initial_state().unwrap();
        assert!(state.is_terminal());
    }

    #[test]
    fn test_initial_state() {
        let state = GameConfig::new(7, 2, Player::Human).initial_state().unwrap();
        assert_eq!(state.remaining(), 7);
        assert_eq!(state.max_take(), 2);
        assert_eq!(state.turn(), Player::Human);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0").unwrap(), 0);
        assert_eq!(parse_count("  42 ").unwrap(), 42);

        match parse_count("4x") {
            Err(NimError::Parse { input, .. }) => assert_eq!(input, "4x"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(12, 5, Player::Human);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
