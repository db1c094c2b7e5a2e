//! Query and bulk entry points over a fixed vocabulary

use crate::error::{ComboError, Result};
use crate::search::{
    Algorithm, BreadthFirst, ComboSearch, ForwardSweep, Outcome, SearchConfig, SearchState,
    SearchStatistics,
};
use crate::vocab::{Direction, Vocabulary};
use tracing::{debug, info};

/// Solves targets against one canonical vocabulary.
///
/// Holds no state between calls: every request builds, reads and drops its
/// own table.
#[derive(Debug, Clone)]
pub struct ComboSolver {
    vocabulary: Vocabulary,
    config: SearchConfig,
}

impl ComboSolver {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shortest combination found for `target`.
    pub fn solve(&self, target: i64) -> Result<Outcome> {
        self.solve_with_statistics(target).map(|(outcome, _)| outcome)
    }

    pub fn solve_with_statistics(&self, target: i64) -> Result<(Outcome, SearchStatistics)> {
        let direction = Direction::for_target(target);
        let magnitude = target.unsigned_abs();
        let bound = self.search_bound(magnitude)?;
        debug!(target, %direction, bound, algorithm = %self.config.algorithm, "solving target");

        let vocabulary = self.vocabulary.oriented(direction);
        let (state, statistics) = self.explore(&vocabulary, bound);
        let outcome = state.outcome(target, &vocabulary);

        match outcome.count() {
            Some(count) => debug!(target, count, "combination found"),
            None => info!(target, "no combination within the search bound"),
        }
        Ok((outcome, statistics))
    }

    /// One outcome per value in `[0, max_value]`, from a single search.
    pub fn solve_all(&self, max_value: u64) -> Result<Vec<Outcome>> {
        self.solve_all_directed(Direction::Forward, max_value)
    }

    /// Bulk mode in either direction; mirrored outcomes report targets `0, -1, ..., -max_value`.
    pub fn solve_all_directed(&self, direction: Direction, max_value: u64) -> Result<Vec<Outcome>> {
        self.solve_all_with_statistics(direction, max_value)
            .map(|(outcomes, _)| outcomes)
    }

    pub fn solve_all_with_statistics(
        &self,
        direction: Direction,
        max_value: u64,
    ) -> Result<(Vec<Outcome>, SearchStatistics)> {
        let last = i64::try_from(max_value)
            .map_err(|_| ComboError::TargetOutOfRange { value: max_value })?;
        let bound = self.search_bound(max_value)?;
        debug!(max_value, %direction, bound, algorithm = %self.config.algorithm, "solving range");

        let vocabulary = self.vocabulary.oriented(direction);
        let (state, statistics) = self.explore(&vocabulary, bound);
        let outcomes = (0..=last)
            .map(|magnitude| state.outcome(direction.signed(magnitude), &vocabulary))
            .collect();

        Ok((outcomes, statistics))
    }

    /// `magnitude + max(|delta|) + 1`, capped by the configured limit.
    pub fn search_bound(&self, magnitude: u64) -> Result<usize> {
        let bound = u128::from(magnitude) + u128::from(self.vocabulary.max_magnitude()) + 1;
        let limit = self.config.max_bound;
        match usize::try_from(bound) {
            Ok(bound) if bound <= limit => Ok(bound),
            _ => Err(ComboError::BoundTooLarge { bound, limit }),
        }
    }

    fn explore(&self, vocabulary: &Vocabulary, bound: usize) -> (SearchState, SearchStatistics) {
        let mut engine: Box<dyn ComboSearch> = match self.config.algorithm {
            Algorithm::Sweep => Box::new(ForwardSweep::new()),
            Algorithm::Exact => Box::new(BreadthFirst::new()),
        };
        let state = engine.explore(vocabulary, bound);
        (state, engine.statistics())
    }
}

impl Default for ComboSolver {
    fn default() -> Self {
        Self::new(Vocabulary::anvil())
    }
}
