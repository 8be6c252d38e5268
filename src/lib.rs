//! # nim-engine
//!
//! Bounded-take Nim with a machine opponent that cannot be beaten from a
//! winning position.
//!
//! Two players share one pile of sticks and take turns removing between 1
//! and `max_take` of them. Whoever takes the last stick wins.
//!
//! ## Design Principles
//!
//! 1. **Immutable Positions**: `GameState` is a `Copy` value and `apply`
//!    returns a new one. Search branches never share or restore state.
//!
//! 2. **Tables Over Branches**: Which side maximizes and what an empty pile
//!    is worth are looked up per `Player`, not hard-coded in the recursion.
//!
//! 3. **Exact by Default**: The machine's choice comes from full-depth
//!    minimax. Memoization and cutoffs are opt-in and never change a move.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, game state, move records, errors, RNG
//! - `search`: Minimax evaluation and machine move selection
//! - `strategy`: Interchangeable move-choosing policies
//! - `session`: Game lifecycle state machine for a front end to drive
//! - `play`: Automated matches between strategies

pub mod core;
pub mod play;
pub mod search;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    parse_count, GameConfig, GameRng, GameState, MoveRecord, NimError, Player, PlayerMap,
};

pub use crate::search::{
    evaluate, Direction, MoveSelector, SearchConfig, SearchEngine, SearchStats, Value, HUMAN_WIN,
    MACHINE_WIN,
};

pub use crate::strategy::{GreedyStrategy, MinimaxStrategy, RandomStrategy, Strategy};

pub use crate::session::{Phase, Session};

pub use crate::play::{MatchReport, MatchRunner};
