//! Error types for cw-core

use thiserror::Error;

/// Main error type for cw-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for cw-core
pub type Result<T> = std::result::Result<T, Error>;
