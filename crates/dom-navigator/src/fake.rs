//! In-memory document used by unit tests.
//!
//! Locators are bare tag names (`form`, `*`), optionally prefixed with `//`
//! for XPath. A locator starting with `!` is rejected as invalid syntax and
//! one starting with `?` as unsupported.

use crate::identifier::Selector;
use crate::query::{DocumentQuery, ElementNode};
use crate::result::QueryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FakeNode {
    pub id: usize,
    pub parent: Option<usize>,
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
}

impl ElementNode for FakeNode {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.attrs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }

    fn text_content(&self) -> String {
        self.text.clone()
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeDocument {
    nodes: Vec<FakeNode>,
}

impl FakeDocument {
    /// Document with a single `html` root
    pub fn new() -> Self {
        let mut document = Self::default();
        document.add(None, "html", &[], "");
        document
    }

    pub fn add(
        &mut self,
        parent: Option<usize>,
        tag: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(FakeNode {
            id,
            parent,
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            text: text.to_string(),
        });
        id
    }

    pub fn root(&self) -> Vec<FakeNode> {
        vec![self.nodes[0].clone()]
    }

    pub fn node(&self, id: usize) -> FakeNode {
        self.nodes[id].clone()
    }

    fn is_descendant(&self, node: &FakeNode, ancestor: usize) -> bool {
        let mut current = node.parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id].parent;
        }
        false
    }
}

impl DocumentQuery for FakeDocument {
    type Node = FakeNode;

    fn filter(
        &self,
        scope: &[FakeNode],
        selector: &Selector,
    ) -> Result<Vec<FakeNode>, QueryError> {
        let tag = selector.as_str().trim_start_matches("//");
        if tag.starts_with('!') {
            return Err(QueryError::invalid_syntax(format!("unexpected '!' in {tag}")));
        }
        if tag.starts_with('?') {
            return Err(QueryError::unsupported(tag.to_string()));
        }
        Ok(self
            .nodes
            .iter()
            .filter(|node| tag == "*" || node.tag == tag)
            .filter(|node| scope.iter().any(|s| self.is_descendant(node, s.id)))
            .cloned()
            .collect())
    }
}
