//! Game state: one position of the game.
//!
//! `GameState` is a small `Copy` value. Moves never mutate a state; `apply`
//! returns the successor, so every branch of a search owns its own
//! position and nothing needs to be cloned or restored.
//!
//! ## Example
//!
//! ```
//! use nim_engine::core::{GameState, Player};
//!
//! let state = GameState::new(5, 3, Player::Machine);
//! assert_eq!(state.legal_moves().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! let next = state.apply(2);
//! assert_eq!(next.remaining(), 3);
//! assert_eq!(next.turn(), Player::Human);
//! assert_eq!(next.to_string(), "|||");
//!
//! // The original is untouched.
//! assert_eq!(state.remaining(), 5);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::NimError;
use super::player::Player;

/// Marker drawn for each stick when the pile is displayed.
pub const STICK: char = '|';

/// A position: the pile, the fixed take limit and the side to move.
///
/// Deserialized states are checked the same way as `GameConfig`, so a
/// zero take limit is rejected instead of yielding a stuck position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    remaining: u32,
    max_take: u32,
    turn: Player,
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct RawGameState {
    remaining: u32,
    max_take: u32,
    turn: Player,
}

impl TryFrom<RawGameState> for GameState {
    type Error = NimError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.max_take == 0 {
            return Err(NimError::InvalidConfig {
                message: "max take must be at least 1".to_string(),
            });
        }
        Ok(GameState::new(raw.remaining, raw.max_take, raw.turn))
    }
}

impl GameState {
    /// Create a position.
    ///
    /// Panics if `max_take` is zero; use `GameConfig::initial_state` to get
    /// an error instead.
    #[must_use]
    pub fn new(remaining: u32, max_take: u32, turn: Player) -> Self {
        assert!(max_take > 0, "max take must be at least 1");
        Self {
            remaining,
            max_take,
            turn,
        }
    }

    /// Sticks left in the pile.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Largest take allowed in this game.
    #[must_use]
    pub const fn max_take(&self) -> u32 {
        self.max_take
    }

    /// The player to move.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// Largest legal take in this position (0 when the pile is empty).
    #[must_use]
    pub fn take_limit(&self) -> u32 {
        self.max_take.min(self.remaining)
    }

    /// All legal takes in ascending order. Empty iff the game is over.
    pub fn legal_moves(&self) -> RangeInclusive<u32> {
        1..=self.take_limit()
    }

    /// Whether `take` sticks may be removed now.
    #[must_use]
    pub fn is_legal(&self, take: u32) -> bool {
        take > 0 && take <= self.max_take && take <= self.remaining
    }

    /// The position after removing `take` sticks.
    ///
    /// Panics if the take is illegal. Callers holding unvalidated input
    /// should use `try_apply`.
    #[must_use]
    pub fn apply(&self, take: u32) -> GameState {
        assert!(
            self.is_legal(take),
            "illegal take {} with {} remaining and max take {}",
            take,
            self.remaining,
            self.max_take
        );
        GameState {
            remaining: self.remaining - take,
            max_take: self.max_take,
            turn: self.turn.opponent(),
        }
    }

    /// Validating form of `apply`.
    pub fn try_apply(&self, take: u32) -> Result<GameState, NimError> {
        if !self.is_legal(take) {
            return Err(NimError::IllegalTake {
                take,
                limit: self.take_limit(),
            });
        }
        Ok(self.apply(take))
    }

    /// Whether the pile is empty.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.remaining == 0
    }

    /// The player who took the last stick.
    ///
    /// Panics unless the game is over. The winner is always the player
    /// who is *not* on turn at the empty pile.
    #[must_use]
    pub fn winner(&self) -> Player {
        assert!(
            self.is_terminal(),
            "winner requested with {} sticks remaining",
            self.remaining
        );
        self.turn.opponent()
    }

    /// The winner if the game is over, `None` otherwise.
    #[must_use]
    pub fn outcome(&self) -> Option<Player> {
        self.is_terminal().then(|| self.turn.opponent())
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.remaining {
            write!(f, "{}", STICK)?;
        }
        Ok(())
    }
}
