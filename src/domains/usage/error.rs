//! Usage log error types.

use thiserror::Error;

/// Errors that can occur while writing the usage log.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite rejected the statement or could not open the database.
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The database directory could not be created.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Another writer panicked while holding the connection.
    #[error("usage log connection lock poisoned")]
    LockPoisoned,

    /// The blocking write task panicked or was cancelled.
    #[error("usage log write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
