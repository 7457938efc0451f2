//! Error types for the air-quality algorithms.
//!
//! Missing measurements are never errors; they flow through every
//! computation as `None`. Only structural misuse of the API is reported here.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the air-quality algorithms.
#[derive(Error, Debug)]
pub enum Error {
    /// Instant and value sequences disagree in length, or the instants are not
    /// spaced exactly one hour apart.
    #[error("Invalid input shape: {0}")]
    InvalidInputShape(String),

    /// Timezone name not found in the IANA database.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid input shape error.
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Error::InvalidInputShape(msg.into())
    }

    /// Create an unknown timezone error.
    pub fn unknown_timezone(name: impl Into<String>) -> Self {
        Error::UnknownTimezone(name.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
