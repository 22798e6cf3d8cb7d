use relink_core::error::CoreError;

/// Everything that can end an `update-url` run early.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid arguments or a declined confirmation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Columns swept before it stay updated.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Reading an answer or writing report output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
