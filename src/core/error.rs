//! Error types for recoverable failures.
//!
//! Contract violations (applying an illegal take, asking for the winner of
//! an unfinished game) panic instead; see `GameState`.

use std::num::ParseIntError;

use derive_more::{Display, Error};

use super::player::Player;

/// Errors reported to the caller driving a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NimError {
    /// Text where a count was expected did not parse as a whole number.
    #[display("expected a whole number, got {input:?}")]
    Parse {
        /// The rejected text.
        input: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// Text where a first mover was expected named neither player.
    #[display("unknown player {input:?} (expected human or machine)")]
    UnknownPlayer {
        /// The rejected text.
        input: String,
    },

    /// A take outside `1..=limit`.
    #[display("cannot take {take}: choose from 1 to {limit}")]
    IllegalTake {
        /// The requested take.
        take: u32,
        /// Largest legal take in the current position.
        limit: u32,
    },

    /// Game parameters that cannot describe a playable game.
    #[display("invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// A move was requested while no game is in progress.
    #[display("no game in progress")]
    NotPlaying,

    /// A new game was configured while one is still in progress.
    #[display("a game is already in progress")]
    GameInProgress,

    /// A move was requested for the side that is not on turn.
    #[display("it is the {expected}'s turn")]
    WrongTurn {
        /// The player whose turn it actually is.
        expected: Player,
    },
}
