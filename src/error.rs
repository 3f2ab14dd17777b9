//! Error types for KARTEI.

use thiserror::Error;

/// Common error type for KARTEI.
#[derive(Error, Debug)]
pub enum KarteiError {
    /// Caller supplied missing or malformed input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing, invalid, or expired credentials/session.
    ///
    /// The message is intentionally generic for credential failures so the
    /// caller cannot distinguish an unknown code from a wrong secret.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Authenticated but not allowed to act on this resource.
    #[error("permission denied: {0}")]
    Authorization(String),

    /// Target record does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Unique constraint violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Underlying store failed.
    ///
    /// Wraps errors from any database backend; sqlx errors are converted
    /// automatically. Never retried here.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for KarteiError {
    fn from(e: sqlx::Error) -> Self {
        KarteiError::Storage(e.to_string())
    }
}

/// Result type alias for KARTEI operations.
pub type Result<T> = std::result::Result<T, KarteiError>;
