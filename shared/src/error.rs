//! Error types for the readings Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving a readings request.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad or missing request input
    #[error("{0}")]
    Validation(String),

    /// No mass matched the requested date
    #[error("{0}")]
    NotFound(String),

    /// Transport failure talking to the readings source
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The readings source answered with something we could not use
    #[error("upstream returned unexpected content: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            _ => 500,
        }
    }
}
