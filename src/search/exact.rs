//! Breadth-first relaxation over the bounded range
//!
//! Every operation costs one step, so a FIFO frontier settles each value at
//! its minimal count within `[0, bound)` the first time it is reached.
//! Unlike the forward sweep, values below an already-visited index can still
//! be reached later through a backward step.

use crate::search::config::Algorithm;
use crate::search::result::SearchStatistics;
use crate::search::state::SearchState;
use crate::search::ComboSearch;
use crate::vocab::Vocabulary;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::debug;

pub struct BreadthFirst {
    statistics: SearchStatistics,
}

impl BreadthFirst {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Algorithm::Exact),
        }
    }
}

impl Default for BreadthFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl ComboSearch for BreadthFirst {
    fn explore(&mut self, vocabulary: &Vocabulary, bound: usize) -> SearchState {
        self.reset();
        let start_time = Instant::now();

        let mut state = SearchState::seeded(bound);
        self.statistics.bound = state.bound();

        let mut frontier = VecDeque::from([0usize]);
        self.statistics.frontier_high_water = 1;

        while let Some(value) = frontier.pop_front() {
            for op in vocabulary.operations() {
                let Some(next) = state.step(value, op.delta) else {
                    continue;
                };
                self.statistics.relaxations += 1;
                // First arrival is minimal; later ones can only tie or lose.
                if state.count_at(next).is_none() && state.relax(value, next, op.delta) {
                    self.statistics.improvements += 1;
                    frontier.push_back(next);
                }
            }
            self.statistics.frontier_high_water = self
                .statistics
                .frontier_high_water
                .max(frontier.len() as u64);
        }

        self.statistics.values_reached = state.reached() as u64;
        self.statistics.elapsed_time = start_time.elapsed();
        debug!(
            bound = self.statistics.bound,
            reached = self.statistics.values_reached,
            high_water = self.statistics.frontier_high_water,
            "breadth-first search finished"
        );

        state
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Exact);
    }
}
