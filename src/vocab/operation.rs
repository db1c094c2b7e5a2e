//! A single signed step on the work value

use serde::{Deserialize, Serialize};
use std::fmt;

/// One atomic move: a nonzero delta and the label shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    pub delta: i64,
    pub label: String,
}

impl Operation {
    pub fn new(delta: i64, label: impl Into<String>) -> Self {
        Self {
            delta,
            label: label.into(),
        }
    }

    /// The same action seen from the opposite direction: negated delta, same label.
    ///
    /// Returns `None` when the delta has no representable negation (`i64::MIN`).
    pub fn mirrored(&self) -> Option<Self> {
        Some(Self {
            delta: self.delta.checked_neg()?,
            label: self.label.clone(),
        })
    }

    pub fn magnitude(&self) -> u64 {
        self.delta.unsigned_abs()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.label, self.delta)
    }
}
