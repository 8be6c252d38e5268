//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration.
///
/// The default is plain exhaustive minimax. Both switches are speedups
/// only: every combination returns the same values and picks the same
/// moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cache evaluated positions in a transposition table.
    /// The table lives as long as the engine that owns it.
    pub memoize: bool,

    /// Stop scanning a position's children once the side to move has
    /// found a winning reply.
    pub prune: bool,
}

impl SearchConfig {
    /// Plain exhaustive search with no table and no cutoffs.
    pub fn exhaustive() -> Self {
        Self::default()
    }

    /// Both speedups enabled.
    pub fn fast() -> Self {
        Self {
            memoize: true,
            prune: true,
        }
    }

    /// Enable or disable the transposition table.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Enable or disable cutoffs.
    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }
}
