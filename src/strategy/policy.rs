//! Move-choosing policies.
//!
//! Policies are trait-based so a match can seat any mix of players:
//! - `MinimaxStrategy`: perfect play from the search engine
//! - `RandomStrategy`: uniform over legal takes, seeded
//! - `GreedyStrategy`: always the largest legal take

use crate::core::{GameRng, GameState};
use crate::search::{MoveSelector, SearchConfig};

/// Chooses a take for the side on turn.
pub trait Strategy {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Choose a legal take.
    ///
    /// Only called on positions that are not terminal.
    fn choose_take(&mut self, state: &GameState) -> u32;
}

// =============================================================================
// Minimax
// =============================================================================

/// Perfect play: the smallest winning take, else the smallest legal one.
#[derive(Clone, Debug, Default)]
pub struct MinimaxStrategy {
    selector: MoveSelector,
}

impl MinimaxStrategy {
    /// Create a minimax player with the given search settings.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            selector: MoveSelector::new(config),
        }
    }

    /// The selector behind this player.
    pub fn selector(&self) -> &MoveSelector {
        &self.selector
    }
}

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_take(&mut self, state: &GameState) -> u32 {
        self.selector.find_best_move(state)
    }
}

// =============================================================================
// Random
// =============================================================================

/// Uniformly random legal takes.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a random player from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_take(&mut self, state: &GameState) -> u32 {
        self.rng.gen_take(state.legal_moves())
    }
}

// =============================================================================
// Greedy
// =============================================================================

/// Always takes as many sticks as allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_take(&mut self, state: &GameState) -> u32 {
        state.take_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_minimax_strategy() {
        let mut strategy = MinimaxStrategy::default();
        assert_eq!(strategy.name(), "minimax");
        assert_eq!(strategy.choose_take(&GameState::new(5, 3, Player::Machine)), 1);
        assert_eq!(strategy.choose_take(&GameState::new(7, 3, Player::Human)), 3);
        assert!(strategy.selector().stats().nodes_visited > 0);
    }

    #[test]
    fn test_random_strategy_stays_legal() {
        let mut strategy = RandomStrategy::new(99);
        let state = GameState::new(2, 5, Player::Human);

        for _ in 0..100 {
            assert!(state.is_legal(strategy.choose_take(&state)));
        }
    }

    #[test]
    fn test_random_strategy_deterministic() {
        let mut a = RandomStrategy::new(5);
        let mut b = RandomStrategy::new(5);
        let state = GameState::new(20, 6, Player::Human);

        let seq_a: Vec<_> = (0..20).map(|_| a.choose_take(&state)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.choose_take(&state)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_greedy_strategy() {
        let mut strategy = GreedyStrategy;
        assert_eq!(strategy.choose_take(&GameState::new(10, 3, Player::Human)), 3);
        assert_eq!(strategy.choose_take(&GameState::new(2, 3, Player::Human)), 2);
    }
}
