//! Registry of the table columns swept by a URL rewrite.
//!
//! The registry is an ordered list; the sweep visits entries in exactly
//! this order and reports one line per entry.

use crate::error::CoreError;

/// How a column stores the text being searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnEncoding {
    /// Raw text; the URL is matched as-is.
    Plain,
    /// A JSON document; the URL is matched in its escaped string form.
    Json,
}

impl ColumnEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}

/// One column to sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetColumn {
    /// Table name without any connection prefix.
    pub table: &'static str,
    pub column: &'static str,
    pub encoding: ColumnEncoding,
}

impl TargetColumn {
    pub const fn plain(table: &'static str, column: &'static str) -> Self {
        Self {
            table,
            column,
            encoding: ColumnEncoding::Plain,
        }
    }

    pub const fn json(table: &'static str, column: &'static str) -> Self {
        Self {
            table,
            column,
            encoding: ColumnEncoding::Json,
        }
    }

    /// `table->column`, as printed in reports.
    pub fn label(&self) -> String {
        format!("{}->{}", self.table, self.column)
    }
}

/// Return the columns that hold URLs, plain columns first.
pub fn default_targets() -> Vec<TargetColumn> {
    vec![
        TargetColumn::plain("attachments", "path"),
        TargetColumn::plain("pages", "html"),
        TargetColumn::plain("pages", "text"),
        TargetColumn::plain("pages", "markdown"),
        TargetColumn::plain("images", "url"),
        TargetColumn::plain("settings", "value"),
        TargetColumn::plain("comments", "html"),
        TargetColumn::plain("comments", "text"),
        TargetColumn::json("settings", "value"),
    ]
}

/// Filter a registry down to one encoding, preserving order.
pub fn targets_with_encoding(
    targets: &[TargetColumn],
    encoding: ColumnEncoding,
) -> Vec<TargetColumn> {
    targets
        .iter()
        .filter(|t| t.encoding == encoding)
        .cloned()
        .collect()
}

/// Validate a table prefix taken from configuration.
///
/// Prefixes are spliced into identifiers, so only ASCII letters, digits
/// and underscores are allowed. The empty prefix is valid.
pub fn validate_table_prefix(prefix: &str) -> Result<(), CoreError> {
    if prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Table prefix '{prefix}' may only contain ASCII letters, digits and underscores"
        )))
    }
}
