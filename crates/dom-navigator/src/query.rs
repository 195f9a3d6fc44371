//! Document query provider abstraction.
//!
//! This is the only I/O boundary of the navigator. Everything that knows how
//! to match CSS or XPath against a document lives behind [`DocumentQuery`];
//! resolution logic only ever sees ordered node handles.

use std::fmt;

use crate::identifier::Selector;
use crate::result::QueryError;

/// Read access to a matched element, used to classify collections
pub trait ElementNode {
    /// Lowercase tag name (e.g., `input`)
    fn tag_name(&self) -> &str;

    /// Attribute value, if present
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Every attribute as `(name, value)`; order is up to the provider
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Concatenated text content
    fn text_content(&self) -> String;
}

/// Evaluates locators against a scope of nodes.
///
/// Implementations:
/// - [`HtmlQuery`](crate::HtmlQuery): parsed HTML via `scraper` (feature `html`)
/// - Tests: in-memory fakes
pub trait DocumentQuery {
    /// Opaque node handle
    type Node: ElementNode + Clone + fmt::Debug;

    /// Return every node within `scope` that matches `selector`, in document
    /// order.
    ///
    /// An empty result is not an error. Rejected locator syntax must be
    /// reported as [`QueryError::InvalidSyntax`] so it can be told apart from
    /// an empty match.
    fn filter(
        &self,
        scope: &[Self::Node],
        selector: &Selector,
    ) -> Result<Vec<Self::Node>, QueryError>;
}

impl<Q: DocumentQuery + ?Sized> DocumentQuery for &Q {
    type Node = Q::Node;

    fn filter(
        &self,
        scope: &[Self::Node],
        selector: &Selector,
    ) -> Result<Vec<Self::Node>, QueryError> {
        (**self).filter(scope, selector)
    }
}
