//! Error types for the anvil solver
//!
//! An unreachable target is not an error: it is reported as
//! [`Outcome::NoSolution`](crate::search::Outcome::NoSolution).

use thiserror::Error;

/// Main error type for the solver and its command-line front end
#[derive(Error, Debug)]
pub enum ComboError {
    /// Empty or malformed operation set, rejected before any search runs
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// The derived search bound would exceed the configured memory cap
    #[error("Search bound {bound} exceeds the configured limit of {limit} values")]
    BoundTooLarge { bound: u128, limit: usize },

    /// A bulk range whose far end has no signed 64-bit target
    #[error("Target magnitude {value} is outside the signed 64-bit range")]
    TargetOutOfRange { value: u64 },

    /// IO errors (reading vocabulary files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, ComboError>;

impl ComboError {
    /// Create an invalid vocabulary error
    pub fn invalid_vocabulary(msg: impl Into<String>) -> Self {
        Self::InvalidVocabulary(msg.into())
    }
}
