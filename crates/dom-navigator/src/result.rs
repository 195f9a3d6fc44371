//! Result and error types for element resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::collection::ElementCollection;
use crate::identifier::{ElementIdentifier, LocatorKind};

/// Result type for navigator operations over node handles of type `N`
pub type NavigatorResult<T, N> = Result<T, NavigatorError<N>>;

/// Ordinal arithmetic faults raised while mapping a position onto a collection.
///
/// These never reach callers on their own: the navigator wraps them in
/// [`NavigatorError::InvalidElementPosition`] together with the identifier
/// whose position could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// Position zero is neither 1-based nor from-the-end
    #[error("Ordinal position cannot be zero (collection count {collection_count})")]
    CannotBeZero {
        /// Size of the collection the position was resolved against
        collection_count: usize,
    },

    /// Position points before the start or past the end of the collection
    #[error(
        "Ordinal position {ordinal_position} is out of bounds (collection count {collection_count})"
    )]
    OutOfBounds {
        /// Requested ordinal position
        ordinal_position: i64,
        /// Size of the collection the position was resolved against
        collection_count: usize,
    },
}

impl PositionError {
    /// The ordinal position that failed to resolve
    #[must_use]
    pub const fn ordinal_position(&self) -> i64 {
        match self {
            Self::CannotBeZero { .. } => 0,
            Self::OutOfBounds {
                ordinal_position, ..
            } => *ordinal_position,
        }
    }

    /// The collection size the position was resolved against
    #[must_use]
    pub const fn collection_count(&self) -> usize {
        match self {
            Self::CannotBeZero { collection_count }
            | Self::OutOfBounds {
                collection_count, ..
            } => *collection_count,
        }
    }
}

/// Faults reported by a [`DocumentQuery`](crate::DocumentQuery) provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The provider rejected the locator as syntactically invalid
    #[error("Invalid selector syntax: {message}")]
    InvalidSyntax {
        /// Provider message
        message: String,
    },

    /// The locator is well formed but the provider cannot evaluate it
    #[error("Unsupported locator: {message}")]
    Unsupported {
        /// Provider message
        message: String,
    },

    /// Any other provider failure
    #[error("Document query failed: {message}")]
    Provider {
        /// Provider message
        message: String,
    },
}

impl QueryError {
    /// Create an invalid syntax error
    #[must_use]
    pub fn invalid_syntax(message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            message: message.into(),
        }
    }

    /// Create an unsupported locator error
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Create a generic provider error
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}

/// Errors decoding an [`ElementIdentifier`] from its transport encoding
#[derive(Debug, Error)]
pub enum IdentifierError {
    /// Malformed JSON or wrong field types
    #[error("Invalid element identifier JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Locator is empty or whitespace
    #[error("Element identifier locator cannot be empty")]
    EmptyLocator,

    /// Locator exceeds the configured length limit
    #[error("Locator is {length} bytes long, limit is {max}")]
    LocatorTooLong {
        /// Actual locator length in bytes
        length: usize,
        /// Configured limit
        max: usize,
    },

    /// Ancestor chain exceeds the configured depth limit
    #[error("Identifier has {depth} ancestors, limit is {max}")]
    ScopeTooDeep {
        /// Number of ancestors
        depth: usize,
        /// Configured limit
        max: usize,
    },
}

/// Errors raised while resolving an identifier.
///
/// Every resolution error carries the identifier of the link that caused it:
/// a failure inside the ancestor chain reports the ancestor, not the leaf.
#[derive(Debug, Error)]
pub enum NavigatorError<N: fmt::Debug> {
    /// The query provider rejected the locator syntax
    #[error(
        "Invalid {} locator {}",
        .identifier.selector().kind().description(),
        .identifier.locator()
    )]
    InvalidLocator {
        /// Identifier whose locator was rejected
        identifier: ElementIdentifier,
        /// Provider fault
        #[source]
        source: QueryError,
    },

    /// The locator is valid but matched nothing
    #[error("Unknown element \"{}\"", .identifier.locator())]
    UnknownElement {
        /// Identifier that matched nothing
        identifier: ElementIdentifier,
    },

    /// The ordinal position could not be resolved against the matches
    #[error(
        "Invalid position \"{}\" for locator \"{}\"",
        .source.ordinal_position(),
        .identifier.locator()
    )]
    InvalidElementPosition {
        /// Identifier whose position failed
        identifier: ElementIdentifier,
        /// Ordinal arithmetic fault
        #[source]
        source: PositionError,
    },

    /// A single element was required but zero or several matched
    #[error(
        "Overly broad locator \"{}\" matched {} elements",
        .identifier.locator(),
        .collection.len()
    )]
    OverlyBroadLocator {
        /// Identifier that was expected to match once
        identifier: ElementIdentifier,
        /// Everything that matched
        collection: ElementCollection<N>,
    },

    /// Provider failure other than a syntax rejection
    #[error("Query for locator \"{}\" failed", .identifier.locator())]
    Query {
        /// Identifier being queried
        identifier: ElementIdentifier,
        /// Provider fault
        #[source]
        source: QueryError,
    },

    /// Transport decoding failed before resolution started
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}

impl<N: fmt::Debug> NavigatorError<N> {
    /// Identifier of the chain link that caused the error
    #[must_use]
    pub const fn identifier(&self) -> Option<&ElementIdentifier> {
        match self {
            Self::InvalidLocator { identifier, .. }
            | Self::UnknownElement { identifier }
            | Self::InvalidElementPosition { identifier, .. }
            | Self::OverlyBroadLocator { identifier, .. }
            | Self::Query { identifier, .. } => Some(identifier),
            Self::Identifier(_) => None,
        }
    }

    /// Locator and locator type of the failing link, for diagnostics
    #[must_use]
    pub fn context(&self) -> Option<LocatorContext> {
        self.identifier().map(LocatorContext::from)
    }
}

/// Serializable summary of the locator involved in a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorContext {
    /// Raw locator string
    pub locator: String,
    /// Locator type
    #[serde(rename = "type")]
    pub kind: LocatorKind,
}

impl From<&ElementIdentifier> for LocatorContext {
    fn from(identifier: &ElementIdentifier) -> Self {
        Self {
            locator: identifier.locator().to_string(),
            kind: identifier.selector().kind(),
        }
    }
}
