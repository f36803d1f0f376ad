//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Connect-phase failure: refused, unreachable, reset, or name
    /// resolution
    #[error("Connection failed: {0}")]
    Connection(String),

    /// IO error after the connection was established
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connect or write exceeded the configured bound
    #[error("Timeout: {0}")]
    Timeout(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
