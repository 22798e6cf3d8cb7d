//! Operator-facing report lines for a sweep.

use crate::targets::{ColumnEncoding, TargetColumn};

pub const COMPLETION_MESSAGE: &str = "URL update procedure complete.";

const DIVIDER_WIDTH: usize = 76;

const CACHE_REMINDER: &str =
    "Be sure to clear the application cache to remove any old URLs still held there.";

/// Rows affected in one column by one sweep statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementResult {
    pub target: TargetColumn,
    pub rows_affected: u64,
}

impl ReplacementResult {
    /// `Updated N rows in table->column`, with JSON columns called out.
    pub fn summary_line(&self) -> String {
        let kind = match self.target.encoding {
            ColumnEncoding::Plain => "rows",
            ColumnEncoding::Json => "JSON encoded rows",
        };
        format!(
            "Updated {} {kind} in {}",
            self.rows_affected,
            self.target.label()
        )
    }
}

/// Lines printed once every column has been swept.
pub fn closing_lines() -> Vec<String> {
    let divider = "=".repeat(DIVIDER_WIDTH);
    vec![
        COMPLETION_MESSAGE.to_string(),
        divider.clone(),
        CACHE_REMINDER.to_string(),
        divider,
    ]
}

/// Sum of rows affected across all results.
pub fn total_rows(results: &[ReplacementResult]) -> u64 {
    results.iter().map(|r| r.rows_affected).sum()
}
