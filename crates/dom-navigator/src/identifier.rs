//! Element identifiers: a locator, an optional ordinal position and an
//! optional ancestor scope.
//!
//! Identifiers are immutable. [`ElementIdentifier::with_parent`] consumes the
//! identifier and returns a new one, and parents are shared behind an [`Arc`],
//! so an ancestor chain can never loop back on itself.
//!
//! # Transport encoding
//!
//! ```text
//! { "locator": "input", "position": 1,
//!   "parent": { "locator": "form[action=\"/x\"]", "position": 1 } }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::result::IdentifierError;

/// Locator type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatorKind {
    /// CSS selector
    Css,
    /// XPath expression
    Xpath,
}

impl LocatorKind {
    /// Human readable name, used in error messages
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Css => "CSS selector",
            Self::Xpath => "XPath expression",
        }
    }
}

/// A locator string tagged with how it should be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// CSS selector (e.g., `form[action="/x"] input`)
    Css(String),
    /// XPath expression (e.g., `//form`)
    XPath(String),
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an XPath selector
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// Pick the selector type from the locator syntax.
    ///
    /// Location paths (`/`, `//`, `./`, `..`) and parenthesised expressions
    /// are XPath; everything else is CSS.
    #[must_use]
    pub fn detect(locator: impl Into<String>) -> Self {
        let locator = locator.into();
        if is_xpath(&locator) {
            Self::XPath(locator)
        } else {
            Self::Css(locator)
        }
    }

    /// The raw locator string
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Css(s) | Self::XPath(s) => s,
        }
    }

    /// The locator type
    #[must_use]
    pub const fn kind(&self) -> LocatorKind {
        match self {
            Self::Css(_) => LocatorKind::Css,
            Self::XPath(_) => LocatorKind::Xpath,
        }
    }

    /// Whether this is a CSS selector
    #[must_use]
    pub const fn is_css(&self) -> bool {
        matches!(self, Self::Css(_))
    }
}

fn is_xpath(locator: &str) -> bool {
    let trimmed = locator.trim_start();
    trimmed.starts_with('/')
        || trimmed.starts_with("./")
        || trimmed.starts_with("..")
        || trimmed.starts_with('(')
}

/// Describes how to find zero or more elements.
///
/// Without a position an identifier refers to every match; with one it refers
/// to a single match (1-based, or negative counting from the end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIdentifier {
    selector: Selector,
    position: Option<i64>,
    parent: Option<Arc<ElementIdentifier>>,
}

impl ElementIdentifier {
    /// Create an identifier, detecting the locator type from its syntax
    #[must_use]
    pub fn new(locator: impl Into<String>) -> Self {
        Self::from_selector(Selector::detect(locator))
    }

    /// Create an identifier from a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::from_selector(Selector::css(selector))
    }

    /// Create an identifier from an XPath expression
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::from_selector(Selector::xpath(expression))
    }

    /// Create an identifier from a selector
    #[must_use]
    pub const fn from_selector(selector: Selector) -> Self {
        Self {
            selector,
            position: None,
            parent: None,
        }
    }

    /// Select a single match by ordinal position
    #[must_use]
    pub const fn at_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// Scope this identifier to descendants of `parent`.
    ///
    /// Replaces any existing immediate parent.
    #[must_use]
    pub fn with_parent(mut self, parent: Self) -> Self {
        self.parent = Some(Arc::new(parent));
        self
    }

    /// The selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The raw locator string
    #[must_use]
    pub fn locator(&self) -> &str {
        self.selector.as_str()
    }

    /// The ordinal position, if one was requested
    #[must_use]
    pub const fn position(&self) -> Option<i64> {
        self.position
    }

    /// The immediate parent
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    /// Ancestors ordered from the outermost to the immediate parent
    #[must_use]
    pub fn scope(&self) -> Vec<&Self> {
        let mut chain = Vec::new();
        let mut current = self.parent();
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = ancestor.parent();
        }
        chain.reverse();
        chain
    }

    /// Number of ancestors
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent(), |ancestor| ancestor.parent()).count()
    }

    /// Decode from the JSON transport encoding
    pub fn from_json(json: &str) -> Result<Self, IdentifierError> {
        let record: IdentifierRecord = serde_json::from_str(json)?;
        Self::try_from(record)
    }

    /// Encode to the JSON transport encoding
    pub fn to_json(&self) -> Result<String, IdentifierError> {
        Ok(serde_json::to_string(&IdentifierRecord::from(self))?)
    }
}

impl fmt::Display for ElementIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&IdentifierRecord::from(self)).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl FromStr for ElementIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

/// Flat wire shape of an identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IdentifierRecord {
    locator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Box<IdentifierRecord>>,
}

impl From<&ElementIdentifier> for IdentifierRecord {
    fn from(identifier: &ElementIdentifier) -> Self {
        Self {
            locator: identifier.locator().to_string(),
            position: identifier.position,
            parent: identifier.parent().map(|parent| Box::new(Self::from(parent))),
        }
    }
}

impl TryFrom<IdentifierRecord> for ElementIdentifier {
    type Error = IdentifierError;

    fn try_from(record: IdentifierRecord) -> Result<Self, Self::Error> {
        if record.locator.trim().is_empty() {
            return Err(IdentifierError::EmptyLocator);
        }
        let parent = match record.parent {
            Some(parent) => Some(Arc::new(Self::try_from(*parent)?)),
            None => None,
        };
        Ok(Self {
            selector: Selector::detect(record.locator),
            position: record.position,
            parent,
        })
    }
}

impl Serialize for ElementIdentifier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        IdentifierRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ElementIdentifier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = IdentifierRecord::deserialize(deserializer)?;
        Self::try_from(record).map_err(serde::de::Error::custom)
    }
}
