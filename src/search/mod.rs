//! Search algorithms for finding short operation combinations
//!
//! This module provides two ways to fill a [`SearchState`]:
//! - Sweep: a single forward pass over the bounded range (default)
//! - Exact: breadth-first relaxation, minimal within the bound
//!
//! [`ComboSolver`] derives the bound, picks the oriented vocabulary for the
//! target's sign and turns the filled table into [`Outcome`]s.

pub mod config;
pub mod exact;
pub mod result;
pub mod solver;
pub mod state;
pub mod sweep;

pub use config::{Algorithm, SearchConfig};
pub use exact::BreadthFirst;
pub use result::{Combination, Outcome, SearchStatistics};
pub use solver::ComboSolver;
pub use state::SearchState;
pub use sweep::ForwardSweep;

use crate::vocab::Vocabulary;

/// Trait for algorithms that fill a combination table
pub trait ComboSearch {
    /// Explore every value in `[0, bound)` reachable from 0
    ///
    /// # Arguments
    /// * `vocabulary` - Operations in the order they are tried
    /// * `bound` - Exclusive upper end of the explored range
    ///
    /// # Returns
    /// A fresh table holding the best count and witness per value
    fn explore(&mut self, vocabulary: &Vocabulary, bound: usize) -> SearchState;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the search state for a new search
    fn reset(&mut self);
}
