//! Core types shared by vocabularies and searches

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a vocabulary, selected by the sign of the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Canonical vocabulary, used for targets >= 0
    #[default]
    Forward,
    /// Sign-negated vocabulary, used for targets < 0
    Mirrored,
}

impl Direction {
    /// Pick the direction a target is solved in
    pub fn for_target(target: i64) -> Self {
        if target < 0 {
            Direction::Mirrored
        } else {
            Direction::Forward
        }
    }

    /// Signed target reported for a non-negative magnitude solved in this direction
    pub fn signed(&self, magnitude: i64) -> i64 {
        match self {
            Direction::Forward => magnitude,
            Direction::Mirrored => -magnitude,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Mirrored => write!(f, "mirrored"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" | "right" | "+" => Ok(Direction::Forward),
            "mirrored" | "left" | "-" => Ok(Direction::Mirrored),
            _ => Err(format!(
                "Unknown direction: '{}'. Valid options: forward, mirrored",
                s
            )),
        }
    }
}
