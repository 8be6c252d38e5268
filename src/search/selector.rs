//! Move selection on top of the minimax evaluator.
//!
//! The selector tries takes in ascending order and plays the first one
//! that leaves the opponent lost. With no such take the position is lost
//! anyway, and it concedes as little as possible: the smallest legal take.

use tracing::{debug, instrument};

use crate::core::{GameState, Player};

use super::config::SearchConfig;
use super::minimax::{Direction, SearchEngine, Value};
use super::stats::SearchStats;

/// Picks moves using a `SearchEngine`.
#[derive(Clone, Debug, Default)]
pub struct MoveSelector {
    engine: SearchEngine,
    stats: SearchStats,
}

impl MoveSelector {
    /// Create a selector with a fresh engine.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_engine(SearchEngine::new(config))
    }

    /// Create a selector around an existing engine.
    pub fn with_engine(engine: SearchEngine) -> Self {
        Self {
            engine,
            stats: SearchStats::default(),
        }
    }

    /// The machine's move.
    ///
    /// Panics if it is not the machine's turn or the game is over.
    #[instrument(skip(self))]
    pub fn find_machine_move(&mut self, state: &GameState) -> u32 {
        assert_eq!(
            state.turn(),
            Player::Machine,
            "machine move requested on the human's turn"
        );
        self.find_best_move(state)
    }

    /// The move for whichever side is on turn: the smallest winning take,
    /// or the smallest legal take when there is none.
    ///
    /// Panics if the game is over.
    #[instrument(skip(self))]
    pub fn find_best_move(&mut self, state: &GameState) -> u32 {
        assert!(!state.is_terminal(), "move requested for a finished game");
        self.stats.reset();

        let target = Direction::of(state.turn()).target();
        let winning = state
            .legal_moves()
            .find(|&take| self.evaluate_after(state, take) == target);

        match winning {
            Some(take) => {
                debug!(
                    take,
                    nodes = self.stats.nodes_visited,
                    "found winning take"
                );
                take
            }
            None => {
                let take = *state.legal_moves().start();
                debug!(
                    take,
                    nodes = self.stats.nodes_visited,
                    "no winning take, conceding minimum"
                );
                take
            }
        }
    }

    /// Every take that wins for the side on turn, ascending.
    pub fn winning_moves(&mut self, state: &GameState) -> Vec<u32> {
        self.stats.reset();
        let target = Direction::of(state.turn()).target();
        state
            .legal_moves()
            .filter(|&take| self.evaluate_after(state, take) == target)
            .collect()
    }

    /// Evaluate a position with this selector's engine.
    pub fn evaluate(&mut self, state: &GameState) -> Value {
        self.engine.evaluate(state)
    }

    fn evaluate_after(&mut self, state: &GameState, take: u32) -> Value {
        let value = self.engine.evaluate(&state.apply(take));
        self.stats.accumulate(self.engine.stats());
        value
    }

    /// Statistics summed over the candidates of the last selection.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}
