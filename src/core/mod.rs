//! Core game types: players, configuration, state, move records, errors, RNG.
//!
//! Everything the search and session layers build on. Nothing here knows
//! how moves are chosen.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::MoveRecord;
pub use config::{parse_count, GameConfig};
pub use error::NimError;
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, STICK};
