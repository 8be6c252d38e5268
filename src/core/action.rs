//! Move history records.
//!
//! A move in this game is just a take amount; `MoveRecord` adds who made it
//! and what was left afterwards so a finished game can be replayed or
//! displayed.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// Sticks removed.
    pub take: u32,

    /// Sticks left after the move.
    pub remaining_after: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, take: u32, remaining_after: u32) -> Self {
        Self {
            player,
            take,
            remaining_after,
        }
    }

    /// Whether this move took the last stick.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.remaining_after == 0
    }
}
