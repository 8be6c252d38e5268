//! Automated matches between two strategies.
//!
//! Runs complete games through a `Session` so that simulated play goes
//! through exactly the same validation as a person at the keyboard.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{GameConfig, MoveRecord, NimError, Player, PlayerMap};
use crate::session::{Phase, Session};
use crate::strategy::Strategy;

/// Result of one finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// The winner, or `None` when the game started with an empty pile.
    pub winner: Option<Player>,

    /// Every move in order.
    pub moves: Vec<MoveRecord>,
}

impl MatchReport {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the game ended before any move.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Total sticks taken by each player.
    #[must_use]
    pub fn sticks_taken(&self) -> PlayerMap<u32> {
        let mut totals = PlayerMap::default();
        for record in &self.moves {
            totals[record.player] += record.take;
        }
        totals
    }
}

/// Plays matches with a fixed game configuration.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    config: GameConfig,
    seed_offset: u64,
}

impl MatchRunner {
    /// Create a runner for the given game.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            seed_offset: 0,
        }
    }

    /// Set seed offset (combined with game index for unique seeds).
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// The game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one game to the end.
    ///
    /// `human` moves on the human's turns and `machine` on the machine's.
    /// Fails only if the configuration is invalid or a strategy returns an
    /// illegal take.
    #[instrument(
        skip(self, human, machine),
        fields(human = human.name(), machine = machine.name())
    )]
    pub fn play(
        &self,
        human: &mut dyn Strategy,
        machine: &mut dyn Strategy,
    ) -> Result<MatchReport, NimError> {
        // Both seats move through `take`; the session's own selector is
        // never consulted and its table stays empty.
        let mut session = Session::default();
        session.configure(self.config)?;

        while session.phase() == Phase::Playing {
            let state = *session.state().ok_or(NimError::NotPlaying)?;
            let take = match state.turn() {
                Player::Human => human.choose_take(&state),
                Player::Machine => machine.choose_take(&state),
            };
            session.take(take)?;
        }

        let report = MatchReport {
            winner: session.winner(),
            moves: session.history().to_vec(),
        };
        debug!(
            winner = ?report.winner,
            moves = report.len(),
            "match finished"
        );
        Ok(report)
    }

    /// Play `count` games, building fresh strategies for each.
    ///
    /// The factory receives the game's seed (seed offset plus game index)
    /// and returns the (human, machine) pair.
    pub fn play_many<H, M>(
        &self,
        count: usize,
        mut factory: impl FnMut(u64) -> (H, M),
    ) -> Result<Vec<MatchReport>, NimError>
    where
        H: Strategy,
        M: Strategy,
    {
        (0..count)
            .map(|i| {
                let seed = self.seed_offset.wrapping_add(i as u64);
                let (mut human, mut machine) = factory(seed);
                self.play(&mut human, &mut machine)
            })
            .collect()
    }
}
