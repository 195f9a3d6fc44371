//! dom-navigator: scope-aware element resolution for browser-style testing
//!
//! Resolves element identifiers (a CSS selector or XPath expression, an
//! optional ordinal position and an optional chain of ancestors) into nodes of
//! a document, and classifies the result as a radio group, an option list or
//! a generic collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Resolution pipeline                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Identifier │    │ Scope      │    │ Locator    │            │
//! │   │ (JSON or   │───►│ chain      │───►│ filter     │            │
//! │   │  builder)  │    │ resolver   │    │            │            │
//! │   └────────────┘    └────────────┘    └─────┬──────┘            │
//! │                                             │                   │
//! │   ┌────────────┐    ┌────────────┐    ┌─────▼──────┐            │
//! │   │ Navigator  │◄───│ Collection │◄───│ Ordinal    │            │
//! │   │ find / has │    │ classifier │    │ position   │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use dom_navigator::{ElementIdentifier, HtmlDocument};
//!
//! let document = HtmlDocument::parse(
//!     r#"<form action="/a"><input name="q"></form><form action="/b"><input name="r"></form>"#,
//! );
//! let navigator = document.navigator();
//!
//! let identifier = ElementIdentifier::css("input")
//!     .with_parent(ElementIdentifier::css("form").at_position(-1));
//! let input = navigator.find_one(&identifier).unwrap();
//! assert_eq!(input.value().attr("name"), Some("r"));
//! ```

#![warn(missing_docs)]

mod collection;
mod config;
mod filter;
#[cfg(feature = "html")]
mod html;
mod identifier;
mod navigator;
mod position;
mod query;
mod result;
mod scope;

#[cfg(test)]
mod fake;

pub use collection::{CollectionKind, ElementCollection};
pub use config::{NavigatorConfig, DEFAULT_MAX_LOCATOR_LENGTH, DEFAULT_MAX_SCOPE_DEPTH};
pub use filter::filter_scope;
#[cfg(feature = "html")]
pub use html::{xpath_to_css, HtmlDocument, HtmlQuery};
pub use identifier::{ElementIdentifier, LocatorKind, Selector};
pub use navigator::Navigator;
pub use position::{resolve_position, DEFAULT_ORDINAL_POSITION};
pub use query::{DocumentQuery, ElementNode};
pub use result::{
    IdentifierError, LocatorContext, NavigatorError, NavigatorResult, PositionError, QueryError,
};
pub use scope::resolve_scope;
