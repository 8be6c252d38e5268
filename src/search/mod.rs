//! Game-tree search for the machine player.
//!
//! ## Overview
//!
//! - **Minimax**: `evaluate` walks the whole game tree below a position and
//!   reports who wins with best play. The human maximizes, the machine
//!   minimizes.
//! - **Engine**: `SearchEngine` runs the same search with an optional
//!   transposition table and optional cutoffs, and records statistics.
//! - **Selection**: `MoveSelector` turns values into a move.
//!
//! Despite the occasional "alpha-beta" label for this kind of opponent, the
//! default search is plain exhaustive minimax. The speedups in
//! `SearchConfig` are opt-in and never change a result.
//!
//! ## Usage
//!
//! ```rust
//! use nim_engine::core::{GameState, Player};
//! use nim_engine::search::{MoveSelector, SearchConfig};
//!
//! let mut selector = MoveSelector::new(SearchConfig::default());
//! let state = GameState::new(5, 3, Player::Machine);
//!
//! // Taking one leaves four, a lost position for the human.
//! assert_eq!(selector.find_machine_move(&state), 1);
//! ```

pub mod config;
pub mod minimax;
pub mod selector;
pub mod stats;

// Re-export main types
pub use config::SearchConfig;
pub use minimax::{
    evaluate, terminal_value, Direction, SearchEngine, Value, HUMAN_WIN, MACHINE_WIN,
};
pub use selector::MoveSelector;
pub use stats::SearchStats;
