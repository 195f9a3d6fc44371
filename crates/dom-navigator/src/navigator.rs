//! The navigator: find, find-one and existence probes over a document.
//!
//! # Resolution
//!
//! ```text
//! identifier ──► scope chain ──► leaf filter ──► position ──► classify ──► cardinality
//!                (one node per    (InvalidLocator,  (Invalid-                (find_one:
//!                 ancestor)        UnknownElement)   ElementPosition)        OverlyBroadLocator)
//! ```
//!
//! Every call re-queries the provider; nothing is cached between calls.

use tracing::debug;

use crate::collection::ElementCollection;
use crate::config::NavigatorConfig;
use crate::filter::filter_scope;
use crate::identifier::ElementIdentifier;
use crate::query::DocumentQuery;
use crate::result::{NavigatorError, NavigatorResult};
use crate::scope::{resolve_scope, select_one};

/// Resolves element identifiers against a root scope.
///
/// The root scope is the only mutable state and can be replaced between calls
/// with [`Navigator::set_scope`]. A navigator is meant for one session; share
/// it across threads only with external synchronisation.
#[derive(Debug, Clone)]
pub struct Navigator<Q: DocumentQuery> {
    query: Q,
    scope: Vec<Q::Node>,
    config: NavigatorConfig,
}

impl<Q: DocumentQuery> Navigator<Q> {
    /// Create a navigator over `scope` (typically the document root)
    #[must_use]
    pub fn new(query: Q, scope: Vec<Q::Node>) -> Self {
        Self {
            query,
            scope,
            config: NavigatorConfig::default(),
        }
    }

    /// Use custom decoding limits
    #[must_use]
    pub fn with_config(mut self, config: NavigatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the root scope
    pub fn set_scope(&mut self, scope: Vec<Q::Node>) {
        self.scope = scope;
    }

    /// The current root scope
    #[must_use]
    pub fn scope(&self) -> &[Q::Node] {
        &self.scope
    }

    /// The query provider
    #[must_use]
    pub const fn query(&self) -> &Q {
        &self.query
    }

    /// The configuration
    #[must_use]
    pub const fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Resolve `identifier` to a classified collection.
    ///
    /// Without a position every match is returned; with one, a single-element
    /// collection holding the selected match.
    pub fn find(
        &self,
        identifier: &ElementIdentifier,
    ) -> NavigatorResult<ElementCollection<Q::Node>, Q::Node> {
        let scope = resolve_scope(&self.query, identifier, &self.scope)?;
        let elements = match identifier.position() {
            None => filter_scope(&self.query, &scope, identifier)?,
            Some(_) => vec![select_one(&self.query, &scope, identifier)?],
        };
        let collection = ElementCollection::classify(elements);

        debug!(
            locator = identifier.locator(),
            position = identifier.position(),
            depth = identifier.depth(),
            matches = collection.len(),
            kind = ?collection.kind(),
            "resolved identifier"
        );
        Ok(collection)
    }

    /// Resolve `identifier` to exactly one element.
    ///
    /// Fails with [`NavigatorError::OverlyBroadLocator`] carrying every match
    /// when the result is not a single element.
    pub fn find_one(&self, identifier: &ElementIdentifier) -> NavigatorResult<Q::Node, Q::Node> {
        let collection = self.find(identifier)?;
        if collection.len() != 1 {
            debug!(
                locator = identifier.locator(),
                matches = collection.len(),
                "overly broad locator"
            );
            return Err(NavigatorError::OverlyBroadLocator {
                identifier: identifier.clone(),
                collection,
            });
        }
        Ok(collection.into_elements().swap_remove(0))
    }

    /// Whether `identifier` resolves to at least one element.
    ///
    /// Unknown elements and unresolvable positions yield `false`; invalid
    /// locators and provider faults are still errors.
    pub fn has(&self, identifier: &ElementIdentifier) -> NavigatorResult<bool, Q::Node> {
        self.examine(identifier, |collection| !collection.is_empty())
    }

    /// Whether `identifier` resolves to exactly one element.
    ///
    /// Same error policy as [`Navigator::has`].
    pub fn has_one(&self, identifier: &ElementIdentifier) -> NavigatorResult<bool, Q::Node> {
        self.examine(identifier, |collection| collection.len() == 1)
    }

    fn examine(
        &self,
        identifier: &ElementIdentifier,
        examiner: impl FnOnce(&ElementCollection<Q::Node>) -> bool,
    ) -> NavigatorResult<bool, Q::Node> {
        match self.find(identifier) {
            Ok(collection) => Ok(examiner(&collection)),
            Err(
                NavigatorError::UnknownElement { .. }
                | NavigatorError::InvalidElementPosition { .. },
            ) => Ok(false),
            Err(
                err @ (NavigatorError::InvalidLocator { .. }
                | NavigatorError::OverlyBroadLocator { .. }
                | NavigatorError::Query { .. }
                | NavigatorError::Identifier(_)),
            ) => Err(err),
        }
    }

    /// [`Navigator::find`] for a JSON-encoded identifier
    pub fn find_from_json(
        &self,
        json: &str,
    ) -> NavigatorResult<ElementCollection<Q::Node>, Q::Node> {
        self.find(&self.config.decode(json)?)
    }

    /// [`Navigator::find_one`] for a JSON-encoded identifier
    pub fn find_one_from_json(&self, json: &str) -> NavigatorResult<Q::Node, Q::Node> {
        self.find_one(&self.config.decode(json)?)
    }

    /// [`Navigator::has`] for a JSON-encoded identifier
    pub fn has_from_json(&self, json: &str) -> NavigatorResult<bool, Q::Node> {
        self.has(&self.config.decode(json)?)
    }

    /// [`Navigator::has_one`] for a JSON-encoded identifier
    pub fn has_one_from_json(&self, json: &str) -> NavigatorResult<bool, Q::Node> {
        self.has_one(&self.config.decode(json)?)
    }
}
