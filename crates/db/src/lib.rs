//! Database access for URL rewrites.
//!
//! Holds pool creation, the per-column replace statement and the sweep
//! that drives it across a target registry.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod repositories;
pub mod sweep;

pub type DbPool = sqlx::PgPool;

/// Create a single-connection pool from a database URL.
///
/// The sweep issues one statement at a time, so one connection is held
/// for the whole run.
pub async fn create_pool(
    database_url: &str,
    connect_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(connect_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the connection is usable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
