//! Common error types for MEKD

use thiserror::Error;

/// Common result type for MEKD operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the MEKD services
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more indicator values failed the positivity gate
    #[error(transparent)]
    Validation(#[from] crate::validate::ValidationError),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
