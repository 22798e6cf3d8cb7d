//! Sweep a replacement across every registry column.
//!
//! Columns are processed strictly in registry order, one statement each.
//! There is no surrounding transaction: when a statement fails the error
//! is returned immediately and earlier columns keep their changes.

use relink_core::json_fragment;
use relink_core::report::ReplacementResult;
use relink_core::targets::{ColumnEncoding, TargetColumn};
use relink_core::url::ReplacementSpec;
use sqlx::PgPool;

use crate::repositories::ColumnReplaceRepo;

/// Search and replacement text for one column encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPair {
    pub search: String,
    pub replacement: String,
}

impl SearchPair {
    pub fn for_encoding(spec: &ReplacementSpec, encoding: ColumnEncoding) -> Self {
        match encoding {
            ColumnEncoding::Plain => Self {
                search: spec.old_url().to_string(),
                replacement: spec.new_url().to_string(),
            },
            ColumnEncoding::Json => Self {
                search: json_fragment::encode(spec.old_url()),
                replacement: json_fragment::encode(spec.new_url()),
            },
        }
    }
}

/// Apply `spec` to each of `targets`, calling `on_result` after each column.
///
/// `table_prefix` is prepended to every table name and must already have
/// been validated.
pub async fn run_sweep<F>(
    pool: &PgPool,
    spec: &ReplacementSpec,
    targets: &[TargetColumn],
    table_prefix: &str,
    mut on_result: F,
) -> Result<Vec<ReplacementResult>, sqlx::Error>
where
    F: FnMut(&ReplacementResult),
{
    let plain = SearchPair::for_encoding(spec, ColumnEncoding::Plain);
    let json = SearchPair::for_encoding(spec, ColumnEncoding::Json);

    let mut results = Vec::with_capacity(targets.len());
    for target in targets {
        let pair = match target.encoding {
            ColumnEncoding::Plain => &plain,
            ColumnEncoding::Json => &json,
        };
        let table = format!("{table_prefix}{}", target.table);

        let rows_affected = ColumnReplaceRepo::replace_in_column(
            pool,
            &table,
            target.column,
            &pair.search,
            &pair.replacement,
        )
        .await
        .inspect_err(|e| {
            tracing::error!(
                table = %table,
                column = target.column,
                error = %e,
                "URL replacement failed, remaining columns skipped",
            );
        })?;

        tracing::debug!(
            table = %table,
            column = target.column,
            encoding = target.encoding.as_str(),
            rows_affected,
            "Column swept",
        );

        let result = ReplacementResult {
            target: target.clone(),
            rows_affected,
        };
        on_result(&result);
        results.push(result);
    }

    Ok(results)
}
