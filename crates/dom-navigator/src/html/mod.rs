//! HTML document provider backed by `scraper`.
//!
//! CSS locators go straight to `scraper::Selector`; XPath locators are first
//! rewritten into CSS by [`xpath_to_css`].

mod xpath;

pub use xpath::xpath_to_css;

use std::borrow::Cow;
use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector as CssSelector};
use tracing::trace;

use crate::identifier::Selector;
use crate::navigator::Navigator;
use crate::query::{DocumentQuery, ElementNode};
use crate::result::QueryError;

/// A parsed HTML document
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. Parsing never fails; malformed markup is
    /// repaired the way browsers do.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// The underlying `scraper` tree
    #[must_use]
    pub const fn html(&self) -> &Html {
        &self.html
    }

    /// Scope holding just the root element
    #[must_use]
    pub fn root_scope(&self) -> Vec<ElementRef<'_>> {
        vec![self.html.root_element()]
    }

    /// Query provider over this document
    #[must_use]
    pub const fn query(&self) -> HtmlQuery<'_> {
        HtmlQuery {
            document: &self.html,
        }
    }

    /// Navigator scoped to the root element
    #[must_use]
    pub fn navigator(&self) -> Navigator<HtmlQuery<'_>> {
        Navigator::new(self.query(), self.root_scope())
    }
}

/// [`DocumentQuery`] over elements of an [`HtmlDocument`]
#[derive(Debug, Clone, Copy)]
pub struct HtmlQuery<'a> {
    document: &'a Html,
}

impl<'a> DocumentQuery for HtmlQuery<'a> {
    type Node = ElementRef<'a>;

    fn filter(
        &self,
        scope: &[ElementRef<'a>],
        selector: &Selector,
    ) -> Result<Vec<ElementRef<'a>>, QueryError> {
        let css = match selector {
            Selector::Css(css) => Cow::Borrowed(css.as_str()),
            Selector::XPath(expression) => Cow::Owned(xpath_to_css(expression)?),
        };
        let compiled = CssSelector::parse(&css)
            .map_err(|err| QueryError::invalid_syntax(err.to_string()))?;

        let mut seen = HashSet::new();
        let mut matches = Vec::new();
        for node in scope {
            // the root element has no enclosing element to be found from
            let is_root = node.parent().is_some_and(|p| p.value().is_document());
            let own = is_root.then_some(*node).filter(|n| compiled.matches(n));
            for element in own.into_iter().chain(node.select(&compiled)) {
                if seen.insert(element.id()) {
                    matches.push(element);
                }
            }
        }
        // scope nodes may come in any order, so re-read matches off the tree
        if scope.len() > 1 {
            matches = self
                .document
                .tree
                .root()
                .descendants()
                .filter(|node| seen.contains(&node.id()))
                .filter_map(ElementRef::wrap)
                .collect();
        }

        trace!(css = %css, matches = matches.len(), "html query");
        Ok(matches)
    }
}

impl ElementNode for ElementRef<'_> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.value().attrs().collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}
