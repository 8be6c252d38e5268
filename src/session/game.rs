//! One game from configuration to verdict.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::core::{GameConfig, GameState, MoveRecord, NimError, Player};
use crate::search::{MoveSelector, SearchConfig, SearchStats};

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game configured yet.
    NotStarted,
    /// Moves are being accepted.
    Playing,
    /// The pile is empty; no more moves.
    Over,
}

/// Authoritative state of one game plus the machine's move selector.
///
/// ## Example
///
/// ```
/// use nim_engine::core::{GameConfig, Player};
/// use nim_engine::session::{Phase, Session};
///
/// let mut session = Session::default();
/// session.configure(GameConfig::new(4, 3, Player::Machine)).unwrap();
///
/// assert_eq!(session.machine_take().unwrap(), 1);
/// session.human_take(3).unwrap();
///
/// assert_eq!(session.phase(), Phase::Over);
/// assert_eq!(session.winner(), Some(Player::Human));
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    phase: Phase,
    state: Option<GameState>,
    history: Vec<MoveRecord>,
    selector: MoveSelector,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Session {
    /// Create an unconfigured session whose machine searches with `search`.
    pub fn new(search: SearchConfig) -> Self {
        Self {
            phase: Phase::NotStarted,
            state: None,
            history: Vec::new(),
            selector: MoveSelector::new(search),
        }
    }

    /// Start a game.
    ///
    /// Allowed before the first game and after a game is over. An empty
    /// initial pile ends the game immediately with no winner.
    #[instrument(skip(self))]
    pub fn configure(&mut self, config: GameConfig) -> Result<(), NimError> {
        if self.phase == Phase::Playing {
            return Err(NimError::GameInProgress);
        }

        let state = config.initial_state()?;
        self.history.clear();
        self.phase = if state.is_terminal() {
            Phase::Over
        } else {
            Phase::Playing
        };
        self.state = Some(state);

        info!(phase = ?self.phase, "game configured");
        Ok(())
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current position, once configured.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Legal takes right now. Empty unless a game is in progress.
    pub fn legal_moves(&self) -> RangeInclusive<u32> {
        match (self.phase, &self.state) {
            (Phase::Playing, Some(state)) => state.legal_moves(),
            _ => 1..=0,
        }
    }

    /// Whether `take` would be accepted right now.
    #[must_use]
    pub fn is_legal(&self, take: u32) -> bool {
        self.legal_moves().contains(&take)
    }

    /// Apply the human's take.
    ///
    /// An illegal take is rejected with `NimError::IllegalTake` and leaves
    /// the session untouched, so the caller can ask again.
    pub fn human_take(&mut self, take: u32) -> Result<GameState, NimError> {
        self.expect_turn(Player::Human)?;
        self.take(take)
    }

    /// Choose and apply the machine's take. Returns the take.
    pub fn machine_take(&mut self) -> Result<u32, NimError> {
        let state = self.expect_turn(Player::Machine)?;
        let take = self.selector.find_machine_move(&state);
        self.take(take)?;
        Ok(take)
    }

    /// Apply a take for whichever side is on turn.
    pub fn take(&mut self, take: u32) -> Result<GameState, NimError> {
        let state = self.current()?;
        let next = state.try_apply(take).map_err(|err| {
            warn!(take, remaining = state.remaining(), "rejected take");
            err
        })?;

        self.history.push(MoveRecord::new(state.turn(), take, next.remaining()));
        self.state = Some(next);
        debug!(
            player = %state.turn(),
            take,
            remaining = next.remaining(),
            "applied take"
        );

        if next.is_terminal() {
            self.phase = Phase::Over;
            info!(winner = %next.winner(), moves = self.history.len(), "game over");
        }
        Ok(next)
    }

    /// The winner, once the game is over and at least one move was made.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if self.phase != Phase::Over || self.history.is_empty() {
            return None;
        }
        self.state.as_ref().and_then(GameState::outcome)
    }

    /// Moves made in the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Statistics from the machine's most recent move.
    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        self.selector.stats()
    }

    fn current(&self) -> Result<GameState, NimError> {
        match (self.phase, self.state) {
            (Phase::Playing, Some(state)) => Ok(state),
            _ => Err(NimError::NotPlaying),
        }
    }

    fn expect_turn(&self, player: Player) -> Result<GameState, NimError> {
        let state = self.current()?;
        if state.turn() != player {
            return Err(NimError::WrongTurn {
                expected: state.turn(),
            });
        }
        Ok(state)
    }
}
