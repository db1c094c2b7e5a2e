//! Anvil combination solver
//!
//! Finds short sequences of signed anvil moves whose deltas sum to a target
//! work value, and labels each move for display.

pub mod error;
pub mod report;
pub mod search;
pub mod vocab;

// Re-export main types for convenience
pub use error::{ComboError, Result};
pub use report::OutputFormat;
pub use search::{Algorithm, ComboSolver, Outcome, SearchConfig, SearchStatistics};
pub use vocab::{Direction, Operation, Vocabulary};
