//! Players as interchangeable policies.
//!
//! A `Strategy` picks a take for whichever side it is seated on. The
//! session layer does not care whether a take came from a person, the
//! search engine or a random number generator.

pub mod policy;

pub use policy::{GreedyStrategy, MinimaxStrategy, RandomStrategy, Strategy};
