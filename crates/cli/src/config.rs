use std::time::Duration;

use relink_core::targets::validate_table_prefix;

use crate::error::{AppError, AppResult};

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings loaded from environment variables.
///
/// | Env Var                   | Default  |
/// |---------------------------|----------|
/// | `DATABASE_URL`            | required |
/// | `DB_TABLE_PREFIX`         | empty    |
/// | `DB_CONNECT_TIMEOUT_SECS` | `10`     |
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub database_url: String,
    /// Prepended to every table name in the target registry.
    pub table_prefix: String,
    pub connect_timeout: Duration,
}

impl CliConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;

        let table_prefix = lookup("DB_TABLE_PREFIX").unwrap_or_default();
        validate_table_prefix(&table_prefix)
            .map_err(|e| AppError::Config(e.to_string()))?;

        let connect_timeout_secs = match lookup("DB_CONNECT_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!(
                    "DB_CONNECT_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?,
            None => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            table_prefix,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}
