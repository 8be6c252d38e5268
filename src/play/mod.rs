//! Simulated play between strategies.
//!
//! Used to check the machine's strength end to end: from any position the
//! search marks as won, a `MinimaxStrategy` machine must win against every
//! opponent.

pub mod runner;

pub use runner::{MatchReport, MatchRunner};
