//! The `update-url` command: validate, confirm, connect, sweep, report.
//!
//! No connection is opened until both confirmations have been given, so a
//! rejected or declined run can never write to the database.

use std::io::{self, Write};

use relink_core::confirm;
use relink_core::report::{self, ReplacementResult};
use relink_core::targets::default_targets;
use relink_core::url::ReplacementSpec;
use relink_db::sweep::run_sweep;
use relink_db::DbPool;

use crate::args::Cli;
use crate::config::CliConfig;
use crate::error::AppResult;

/// Validate the arguments and obtain operator confirmation.
pub fn prepare<A>(cli: &Cli, ask: A) -> AppResult<ReplacementSpec>
where
    A: FnMut(&str) -> io::Result<bool>,
{
    let spec = ReplacementSpec::parse(&cli.old_url, &cli.new_url)?;
    confirm::require_confirmation(&spec, ask)??;
    Ok(spec)
}

/// Sweep every registry column and write the report to `out`.
pub async fn execute<W: Write>(
    pool: &DbPool,
    spec: &ReplacementSpec,
    table_prefix: &str,
    out: &mut W,
) -> AppResult<Vec<ReplacementResult>> {
    let targets = default_targets();
    let mut write_error: Option<io::Error> = None;

    let results = run_sweep(pool, spec, &targets, table_prefix, |result| {
        if write_error.is_none() {
            write_error = writeln!(out, "{}", result.summary_line()).err();
        }
    })
    .await?;

    if let Some(e) = write_error {
        return Err(e.into());
    }

    for line in report::closing_lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(results)
}

/// Run the whole command against the database named in `config`.
pub async fn run<A, W>(
    cli: &Cli,
    config: &CliConfig,
    ask: A,
    out: &mut W,
) -> AppResult<Vec<ReplacementResult>>
where
    A: FnMut(&str) -> io::Result<bool>,
    W: Write,
{
    let spec = prepare(cli, ask)?;

    let pool = relink_db::create_pool(&config.database_url, config.connect_timeout).await?;
    relink_db::health_check(&pool).await?;
    tracing::info!("Database connection established");

    let results = execute(&pool, &spec, &config.table_prefix, out).await;
    pool.close().await;
    let results = results?;

    tracing::info!(
        columns = results.len(),
        rows_affected = report::total_rows(&results),
        "URL update finished",
    );
    Ok(results)
}
