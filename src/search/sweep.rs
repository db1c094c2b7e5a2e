//! Forward-sweep dynamic program
//!
//! One increasing pass over `[0, bound)`: every reached value tries every
//! operation in vocabulary order and keeps strict improvements only. Values
//! below the cursor are never revisited, so a path that has to dip through an
//! already-swept index after it improves is missed. The result is a short
//! combination, not always the shortest one; see [`BreadthFirst`] for the
//! exact alternative.
//!
//! [`BreadthFirst`]: crate::search::exact::BreadthFirst

use crate::search::config::Algorithm;
use crate::search::result::SearchStatistics;
use crate::search::state::SearchState;
use crate::search::ComboSearch;
use crate::vocab::Vocabulary;
use std::time::Instant;
use tracing::debug;

pub struct ForwardSweep {
    statistics: SearchStatistics,
}

impl ForwardSweep {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Algorithm::Sweep),
        }
    }
}

impl Default for ForwardSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl ComboSearch for ForwardSweep {
    fn explore(&mut self, vocabulary: &Vocabulary, bound: usize) -> SearchState {
        self.reset();
        let start_time = Instant::now();

        let mut state = SearchState::seeded(bound);
        self.statistics.bound = state.bound();

        for value in 0..state.bound() {
            if state.count_at(value).is_none() {
                continue;
            }
            for op in vocabulary.operations() {
                let Some(next) = state.step(value, op.delta) else {
                    continue;
                };
                self.statistics.relaxations += 1;
                if state.relax(value, next, op.delta) {
                    self.statistics.improvements += 1;
                }
            }
        }

        self.statistics.values_reached = state.reached() as u64;
        self.statistics.elapsed_time = start_time.elapsed();
        debug!(
            bound = self.statistics.bound,
            reached = self.statistics.values_reached,
            relaxations = self.statistics.relaxations,
            "forward sweep finished"
        );

        state
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Sweep);
    }
}
