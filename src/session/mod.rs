//! Game lifecycle: `NotStarted -> Playing -> Over`.
//!
//! A `Session` is what a front end drives. It owns the current position,
//! validates every take before applying it, asks the search for the
//! machine's moves and reports the winner once the pile is empty. History
//! lives in memory for the current game only.

mod game;

pub use game::{Phase, Session};
