//! Search result types and statistics

use crate::search::config::Algorithm;
use crate::vocab::Vocabulary;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A witness combination for one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    /// Target as requested (negative for mirrored searches)
    pub target: i64,
    /// Number of operations, always `operations.len()`
    pub count: usize,
    /// Deltas of the oriented vocabulary, sorted ascending
    pub operations: Vec<i64>,
    /// Display label for each entry of `operations`
    pub labels: Vec<String>,
}

impl Combination {
    /// Net change of the witness; equals the target's magnitude
    pub fn total(&self) -> i128 {
        self.operations.iter().map(|&delta| i128::from(delta)).sum()
    }
}

/// Result of solving for one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Found(Combination),
    NoSolution { target: i64 },
}

impl Outcome {
    /// Build a found outcome, labelling each delta from `vocabulary`.
    pub fn found(target: i64, operations: Vec<i64>, vocabulary: &Vocabulary) -> Self {
        let labels = vocabulary.translate(&operations);
        Outcome::Found(Combination {
            target,
            count: operations.len(),
            operations,
            labels,
        })
    }

    pub fn target(&self) -> i64 {
        match self {
            Outcome::Found(combination) => combination.target,
            Outcome::NoSolution { target } => *target,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn combination(&self) -> Option<&Combination> {
        match self {
            Outcome::Found(combination) => Some(combination),
            Outcome::NoSolution { .. } => None,
        }
    }

    pub fn count(&self) -> Option<usize> {
        self.combination().map(|combination| combination.count)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Found(combination) => {
                writeln!(f, "Target {}:", combination.target)?;
                writeln!(
                    f,
                    "Actions ({} hits): {:?}",
                    combination.count, combination.operations
                )?;
                write!(f, "Names: {:?}", combination.labels)
            }
            Outcome::NoSolution { target } => write!(f, "Target {}: no solution exists", target),
        }
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Algorithm used for the search
    pub algorithm: Algorithm,
    /// Number of values explored, `[0, bound)`
    pub bound: usize,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Values with a finite count once the search finished
    pub values_reached: u64,
    /// In-bound steps examined
    pub relaxations: u64,
    /// Steps that lowered a count
    pub improvements: u64,
    /// Largest frontier size (exact search only)
    pub frontier_high_water: u64,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Fraction of the bound that was reached (0.0 to 1.0)
    pub fn reach_rate(&self) -> f64 {
        if self.bound == 0 {
            0.0
        } else {
            self.values_reached as f64 / self.bound as f64
        }
    }

    /// Get relaxations examined per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.relaxations as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Search bound: {}\n", self.bound));
        s.push_str(&format!(
            "Values reached: {} ({:.2}%)\n",
            self.values_reached,
            self.reach_rate() * 100.0
        ));
        s.push_str(&format!("Relaxations: {}\n", self.relaxations));
        s.push_str(&format!("Improvements: {}\n", self.improvements));

        if self.algorithm == Algorithm::Exact {
            s.push_str(&format!(
                "Frontier high water: {}\n",
                self.frontier_high_water
            ));
        }

        s
    }
}
