//! Validated operation sets
//!
//! A [`Vocabulary`] is the ordered list of moves available in one search
//! direction. Order matters: the sweep tries operations in vocabulary order,
//! so it decides which witness wins a tie.

use crate::error::{ComboError, Result};
use crate::vocab::{Direction, Operation};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Label reported for a delta the vocabulary has no name for
pub const PLACEHOLDER_LABEL: &str = "null";

/// On-disk shape of a vocabulary file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VocabularyFile {
    operations: Vec<Operation>,
}

/// Non-empty operation set with nonzero, unique deltas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VocabularyFile", into = "VocabularyFile")]
pub struct Vocabulary {
    operations: Vec<Operation>,
}

impl Vocabulary {
    /// Build a vocabulary, rejecting empty sets, zero deltas and duplicate deltas.
    pub fn new(operations: Vec<Operation>) -> Result<Self> {
        if operations.is_empty() {
            return Err(ComboError::invalid_vocabulary(
                "operation set must not be empty",
            ));
        }

        let mut seen = HashSet::with_capacity(operations.len());
        for op in &operations {
            if op.delta == 0 {
                return Err(ComboError::invalid_vocabulary(format!(
                    "operation '{}' has a zero delta",
                    op.label
                )));
            }
            if op.delta == i64::MIN {
                return Err(ComboError::invalid_vocabulary(format!(
                    "operation '{}' has a delta with no mirror ({})",
                    op.label, op.delta
                )));
            }
            if !seen.insert(op.delta) {
                return Err(ComboError::invalid_vocabulary(format!(
                    "delta {} is used by more than one operation",
                    op.delta
                )));
            }
        }

        Ok(Self { operations })
    }

    /// The anvil's moves as seen when raising the work value.
    pub fn anvil() -> Self {
        Self {
            operations: vec![
                Operation::new(2, "punch"),
                Operation::new(7, "bend"),
                Operation::new(13, "upset"),
                Operation::new(16, "shrink"),
                Operation::new(-3, "light hit"),
                Operation::new(-6, "medium hit"),
                Operation::new(-9, "heavy hit"),
                Operation::new(-15, "draw"),
            ],
        }
    }

    /// Parse a vocabulary from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: VocabularyFile = serde_json::from_str(text)?;
        Self::try_from(file)
    }

    /// Load a vocabulary from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Always false for a constructed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Largest step size, used to pad the search bound.
    pub fn max_magnitude(&self) -> u64 {
        self.operations
            .iter()
            .map(Operation::magnitude)
            .max()
            .unwrap_or(0)
    }

    /// Every delta negated, labels kept.
    pub fn mirrored(&self) -> Self {
        // i64::MIN is rejected on construction, so every operation mirrors.
        let operations = self
            .operations
            .iter()
            .filter_map(Operation::mirrored)
            .collect();
        Self { operations }
    }

    /// The vocabulary as used for a search in `direction`.
    pub fn oriented(&self, direction: Direction) -> Cow<'_, Self> {
        match direction {
            Direction::Forward => Cow::Borrowed(self),
            Direction::Mirrored => Cow::Owned(self.mirrored()),
        }
    }

    /// Label for `delta`, or [`PLACEHOLDER_LABEL`] if no operation has it.
    pub fn label_for(&self, delta: i64) -> &str {
        self.operations
            .iter()
            .find(|op| op.delta == delta)
            .map(|op| op.label.as_str())
            .unwrap_or(PLACEHOLDER_LABEL)
    }

    /// Map each delta to its display label.
    pub fn translate(&self, deltas: &[i64]) -> Vec<String> {
        deltas
            .iter()
            .map(|&delta| self.label_for(delta).to_string())
            .collect()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::anvil()
    }
}

impl TryFrom<VocabularyFile> for Vocabulary {
    type Error = ComboError;

    fn try_from(file: VocabularyFile) -> Result<Self> {
        Self::new(file.operations)
    }
}

impl From<Vocabulary> for VocabularyFile {
    fn from(vocabulary: Vocabulary) -> Self {
        Self {
            operations: vocabulary.operations,
        }
    }
}
