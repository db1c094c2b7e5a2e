//! Text and JSON rendering of solver outcomes

use crate::error::Result;
use crate::search::Outcome;
use std::fmt::Write as _;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Render a single query result.
pub fn render_outcome(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}

/// Render a bulk result, one row per target.
pub fn render_table(outcomes: &[Outcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for outcome in outcomes {
                // Writing to a String cannot fail
                let _ = writeln!(out, "{}", table_row(outcome));
            }
            Ok(out.trim_end().to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcomes)?),
    }
}

/// `{target}:{count} [deltas]` followed by the labels on an indented line.
pub fn table_row(outcome: &Outcome) -> String {
    match outcome.combination() {
        Some(combination) => format!(
            "{}:{} {:?}\n\t{:?}",
            combination.target, combination.count, combination.operations, combination.labels
        ),
        None => format!("{}:- []", outcome.target()),
    }
}
