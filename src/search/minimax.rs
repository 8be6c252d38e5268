//! Full-depth minimax evaluation.
//!
//! Values are seen from a fixed perspective: `HUMAN_WIN` (+1) means the
//! human wins with best play from both sides, `MACHINE_WIN` (-1) means the
//! machine does. The human maximizes, the machine minimizes.
//!
//! Which way each side pulls, and what an empty pile is worth, come from
//! per-player tables. The recursion itself never asks who is on turn.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{instrument, trace};

use crate::core::{GameState, Player, PlayerMap};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Game-theoretic value of a position.
pub type Value = i8;

/// The human wins with best play.
pub const HUMAN_WIN: Value = 1;

/// The machine wins with best play.
pub const MACHINE_WIN: Value = -1;

/// Whether a side pushes the value up or down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Prefers larger values.
    Maximize,
    /// Prefers smaller values.
    Minimize,
}

const DIRECTIONS: PlayerMap<Direction> =
    PlayerMap::new([Direction::Maximize, Direction::Minimize]);

/// Value of an empty pile, keyed by the side that would move next. That
/// side did not take the last stick, so it has lost.
const TERMINAL_VALUES: PlayerMap<Value> = PlayerMap::new([MACHINE_WIN, HUMAN_WIN]);

impl Direction {
    /// Direction of the given player.
    #[must_use]
    pub fn of(player: Player) -> Self {
        DIRECTIONS[player]
    }

    /// The value this side is playing for.
    #[must_use]
    pub const fn target(self) -> Value {
        match self {
            Direction::Maximize => HUMAN_WIN,
            Direction::Minimize => MACHINE_WIN,
        }
    }

    /// The worst value for this side; the starting point of a scan.
    #[must_use]
    pub const fn floor(self) -> Value {
        match self {
            Direction::Maximize => MACHINE_WIN,
            Direction::Minimize => HUMAN_WIN,
        }
    }

    /// The preferred of two values.
    #[must_use]
    pub fn better(self, a: Value, b: Value) -> Value {
        match self {
            Direction::Maximize => a.max(b),
            Direction::Minimize => a.min(b),
        }
    }
}

/// Value of a finished game given the side on turn at the empty pile.
#[must_use]
pub fn terminal_value(turn: Player) -> Value {
    TERMINAL_VALUES[turn]
}

/// Plain exhaustive minimax with no table, no cutoffs and no statistics.
///
/// ```
/// use nim_engine::core::{GameState, Player};
/// use nim_engine::search::{evaluate, HUMAN_WIN, MACHINE_WIN};
///
/// // Four sticks, take up to three: whoever moves loses.
/// assert_eq!(evaluate(&GameState::new(4, 3, Player::Human)), MACHINE_WIN);
/// assert_eq!(evaluate(&GameState::new(5, 3, Player::Human)), HUMAN_WIN);
/// ```
#[must_use]
pub fn evaluate(state: &GameState) -> Value {
    if state.is_terminal() {
        return terminal_value(state.turn());
    }

    let direction = Direction::of(state.turn());
    state
        .legal_moves()
        .map(|take| evaluate(&state.apply(take)))
        .fold(direction.floor(), |best, value| direction.better(best, value))
}

/// Minimax evaluator with optional transposition table and cutoffs.
///
/// Owns its table, so one engine should stay with one caller. Statistics
/// describe the most recent call to `evaluate`.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    table: FxHashMap<GameState, Value>,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            table: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Evaluate a position under best play from both sides.
    #[instrument(level = "trace", skip(self))]
    pub fn evaluate(&mut self, state: &GameState) -> Value {
        let start = Instant::now();
        self.stats.reset();

        let value = self.search(state, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            value,
            nodes = self.stats.nodes_visited,
            table_hits = self.stats.table_hits,
            "evaluated"
        );
        value
    }

    fn search(&mut self, state: &GameState, depth: u32) -> Value {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if state.is_terminal() {
            self.stats.terminal_nodes += 1;
            return terminal_value(state.turn());
        }

        if self.config.memoize {
            if let Some(&value) = self.table.get(state) {
                self.stats.table_hits += 1;
                return value;
            }
        }

        let direction = Direction::of(state.turn());
        let mut best = direction.floor();

        for take in state.legal_moves() {
            let value = self.search(&state.apply(take), depth + 1);
            best = direction.better(best, value);

            if self.config.prune && best == direction.target() {
                if take < state.take_limit() {
                    self.stats.cutoffs += 1;
                }
                break;
            }
        }

        if self.config.memoize {
            self.table.insert(*state, best);
        }
        best
    }

    /// Statistics from the most recent evaluation.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of positions in the transposition table.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Drop every cached position.
    pub fn clear_table(&mut self) {
        self.table.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover_loses(remaining: u32, max_take: u32) -> bool {
        remaining % (max_take + 1) == 0
    }

    #[test]
    fn test_terminal_values() {
        assert_eq!(evaluate(&GameState::new(0, 3, Player::Human)), MACHINE_WIN);
        assert_eq!(evaluate(&GameState::new(0, 3, Player::Machine)), HUMAN_WIN);
    }

    #[test]
    fn test_direction_table() {
        assert_eq!(Direction::of(Player::Human), Direction::Maximize);
        assert_eq!(Direction::of(Player::Machine), Direction::Minimize);
        assert_eq!(Direction::Maximize.target(), HUMAN_WIN);
        assert_eq!(Direction::Minimize.target(), MACHINE_WIN);
        assert_eq!(Direction::Maximize.better(-1, 1), 1);
        assert_eq!(Direction::Minimize.better(-1, 1), -1);
    }

    #[test]
    fn test_single_move_wins() {
        // Take everything and win.
        assert_eq!(evaluate(&GameState::new(3, 3, Player::Human)), HUMAN_WIN);
        assert_eq!(evaluate(&GameState::new(2, 5, Player::Machine)), MACHINE_WIN);
    }

    #[test]
    fn test_matches_closed_form() {
        for max_take in 1..=4 {
            for remaining in 0..=12 {
                for turn in Player::ALL {
                    let state = GameState::new(remaining, max_take, turn);
                    let expected = if mover_loses(remaining, max_take) {
                        Direction::of(turn.opponent()).target()
                    } else {
                        Direction::of(turn).target()
                    };
                    assert_eq!(evaluate(&state), expected, "{:?}", state);
                }
            }
        }
    }

    #[test]
    fn test_engine_matches_free_function() {
        let configs = [
            SearchConfig::exhaustive(),
            SearchConfig::default().with_memoize(true),
            SearchConfig::default().with_prune(true),
            SearchConfig::fast(),
        ];

        for config in configs {
            let mut engine = SearchEngine::new(config);
            for remaining in 0..=10 {
                let state = GameState::new(remaining, 3, Player::Machine);
                assert_eq!(
                    engine.evaluate(&state),
                    evaluate(&state),
                    "{:?}",
                    config
                );
            }
        }
    }

    #[test]
    fn test_exhaustive_stats() {
        let mut engine = SearchEngine::new(SearchConfig::exhaustive());
        engine.evaluate(&GameState::new(3, 2, Player::Human));

        // 3 -> {2, 1}, 2 -> {1, 0}, 1 -> {0}: seven positions in all.
        let stats = engine.stats();
        assert_eq!(stats.nodes_visited, 7);
        assert_eq!(stats.terminal_nodes, 3);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.table_hits, 0);
        assert_eq!(stats.cutoffs, 0);
        assert_eq!(engine.table_len(), 0);
    }

    #[test]
    fn test_memoize_fills_table() {
        let mut engine = SearchEngine::new(SearchConfig::default().with_memoize(true));
        engine.evaluate(&GameState::new(8, 3, Player::Human));

        assert!(engine.table_len() > 0);
        assert!(engine.stats().table_hits > 0);

        // A second call is answered from the table.
        engine.evaluate(&GameState::new(8, 3, Player::Human));
        assert_eq!(engine.stats().nodes_visited, 1);
        assert_eq!(engine.stats().table_hits, 1);

        engine.clear_table();
        assert_eq!(engine.table_len(), 0);
    }

    #[test]
    fn test_prune_visits_fewer_nodes() {
        let state = GameState::new(10, 3, Player::Human);

        let mut plain = SearchEngine::new(SearchConfig::exhaustive());
        let mut pruned = SearchEngine::new(SearchConfig::default().with_prune(true));

        assert_eq!(plain.evaluate(&state), pruned.evaluate(&state));
        assert!(pruned.stats().nodes_visited < plain.stats().nodes_visited);
        assert!(pruned.stats().cutoffs > 0);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let mut engine = SearchEngine::default();
        let state = GameState::new(9, 2, Player::Machine);

        let first = engine.evaluate(&state);
        let first_nodes = engine.stats().nodes_visited;
        let second = engine.evaluate(&state);

        assert_eq!(first, second);
        assert_eq!(first_nodes, engine.stats().nodes_visited);
    }
}
