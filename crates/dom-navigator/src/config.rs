//! Navigator configuration.

use serde::{Deserialize, Serialize};

use crate::identifier::ElementIdentifier;
use crate::result::IdentifierError;

/// Default limit on a decoded locator (10KB)
pub const DEFAULT_MAX_LOCATOR_LENGTH: usize = 10 * 1024;

/// Default limit on the number of ancestors of a decoded identifier
pub const DEFAULT_MAX_SCOPE_DEPTH: usize = 32;

/// Limits applied when decoding identifiers from JSON.
///
/// Identifiers built in code are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Longest accepted locator, in bytes
    pub max_locator_length: usize,
    /// Most ancestors an identifier may have
    pub max_scope_depth: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            max_locator_length: DEFAULT_MAX_LOCATOR_LENGTH,
            max_scope_depth: DEFAULT_MAX_SCOPE_DEPTH,
        }
    }
}

impl NavigatorConfig {
    /// Create a config with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locator length limit
    #[must_use]
    pub const fn with_max_locator_length(mut self, max: usize) -> Self {
        self.max_locator_length = max;
        self
    }

    /// Set the ancestor depth limit
    #[must_use]
    pub const fn with_max_scope_depth(mut self, max: usize) -> Self {
        self.max_scope_depth = max;
        self
    }

    /// Check every link of `identifier` against the limits
    pub fn check(&self, identifier: &ElementIdentifier) -> Result<(), IdentifierError> {
        let depth = identifier.depth();
        if depth > self.max_scope_depth {
            return Err(IdentifierError::ScopeTooDeep {
                depth,
                max: self.max_scope_depth,
            });
        }
        let links = std::iter::successors(Some(identifier), |link| link.parent());
        for link in links {
            let length = link.locator().len();
            if length > self.max_locator_length {
                return Err(IdentifierError::LocatorTooLong {
                    length,
                    max: self.max_locator_length,
                });
            }
        }
        Ok(())
    }

    /// Decode an identifier from JSON and check it against the limits
    pub fn decode(&self, json: &str) -> Result<ElementIdentifier, IdentifierError> {
        let identifier = ElementIdentifier::from_json(json)?;
        self.check(&identifier)?;
        Ok(identifier)
    }
}
