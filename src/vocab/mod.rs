//! Operation vocabularies for the anvil work-value mechanic

pub mod operation;
pub mod types;
pub mod vocabulary;

// Re-export commonly used types
pub use operation::Operation;
pub use types::Direction;
pub use vocabulary::{PLACEHOLDER_LABEL, Vocabulary};
