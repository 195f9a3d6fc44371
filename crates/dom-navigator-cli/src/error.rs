//! Error types for the CLI

use dom_navigator::{IdentifierError, LocatorContext, NavigatorError};
use std::fmt;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// The document could not be read
    #[error("Cannot read document {path}: {source}")]
    Document {
        /// Path as given on the command line
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Identifier rejected before resolution
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// Resolution failed
    #[error("{message}")]
    Navigator {
        /// Rendered navigator error
        message: String,
        /// Locator that caused the failure, if any
        context: Option<LocatorContext>,
    },

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Navigator errors borrow the parsed document, so only the rendering survives.
impl<N: fmt::Debug> From<NavigatorError<N>> for CliError {
    fn from(err: NavigatorError<N>) -> Self {
        match err {
            NavigatorError::Identifier(inner) => Self::Identifier(inner),
            other => Self::Navigator {
                message: other.to_string(),
                context: other.context(),
            },
        }
    }
}
