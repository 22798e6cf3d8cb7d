//! In-place substring replacement on a single table column.

use sqlx::PgPool;

/// Runs `REPLACE` updates against arbitrary registry columns.
pub struct ColumnReplaceRepo;

impl ColumnReplaceRepo {
    /// Replace every occurrence of `search` with `replacement` in `column`.
    ///
    /// Only rows whose value contains `search` are updated, so the returned
    /// count is the number of rows that actually changed. Both strings are
    /// bound as parameters; `table` and `column` are quoted identifiers.
    pub async fn replace_in_column(
        pool: &PgPool,
        table: &str,
        column: &str,
        search: &str,
        replacement: &str,
    ) -> Result<u64, sqlx::Error> {
        let query = replace_statement(table, column);
        let result = sqlx::query(&query)
            .bind(search)
            .bind(replacement)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Count rows in `column` containing `search`.
    pub async fn count_matches(
        pool: &PgPool,
        table: &str,
        column: &str,
        search: &str,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM {table} WHERE strpos({column}, $1) > 0",
            table = quote_ident(table),
            column = quote_ident(column),
        );
        let (count,): (i64,) = sqlx::query_as(&query).bind(search).fetch_one(pool).await?;
        Ok(count)
    }
}

/// Build the update for one column. `$1` is the search text, `$2` its replacement.
pub fn replace_statement(table: &str, column: &str) -> String {
    let table = quote_ident(table);
    let column = quote_ident(column);
    format!(
        "UPDATE {table} SET {column} = REPLACE({column}, $1, $2) \
         WHERE strpos({column}, $1) > 0"
    )
}

/// Quote an identifier for PostgreSQL, doubling embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
