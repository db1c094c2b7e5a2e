//! Configuration types for combination searches

use serde::{Deserialize, Serialize};

/// Default cap on the number of values a single search may explore
pub const DEFAULT_MAX_BOUND: usize = 1 << 24;

/// Search algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Single increasing pass over the bounded range (reference behavior)
    #[default]
    Sweep,
    /// Breadth-first relaxation; minimal counts within the bound
    Exact,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Sweep => write!(f, "sweep"),
            Algorithm::Exact => write!(f, "exact"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sweep" | "forward" | "dp" => Ok(Algorithm::Sweep),
            "exact" | "bfs" => Ok(Algorithm::Exact),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: sweep, exact",
                s
            )),
        }
    }
}

/// Main search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search algorithm to use
    pub algorithm: Algorithm,
    /// Largest search bound (number of explored values) a request may derive
    pub max_bound: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_bound: DEFAULT_MAX_BOUND,
        }
    }
}

impl SearchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_bound(mut self, max_bound: usize) -> Self {
        self.max_bound = max_bound;
        self
    }

    pub fn with_max_bound_option(mut self, max_bound: Option<usize>) -> Self {
        if let Some(max_bound) = max_bound {
            self.max_bound = max_bound;
        }
        self
    }
}
