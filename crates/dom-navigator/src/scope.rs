//! Scope chain resolution.
//!
//! Walks an identifier's ancestors from the outermost inwards, narrowing the
//! working scope to exactly one node per step. An ancestor without a position
//! collapses to its first match.

use tracing::trace;

use crate::filter::filter_scope;
use crate::identifier::ElementIdentifier;
use crate::position::{resolve_position, DEFAULT_ORDINAL_POSITION};
use crate::query::DocumentQuery;
use crate::result::{NavigatorError, NavigatorResult};

/// Resolve the scope in which `identifier`'s own locator is evaluated.
///
/// Returns `root` unchanged when the identifier has no parent, otherwise a
/// single-node scope. Failures report the ancestor that broke, not the leaf.
pub fn resolve_scope<Q: DocumentQuery>(
    query: &Q,
    identifier: &ElementIdentifier,
    root: &[Q::Node],
) -> NavigatorResult<Vec<Q::Node>, Q::Node> {
    let mut scope = root.to_vec();
    for ancestor in identifier.scope() {
        let node = select_one(query, &scope, ancestor)?;
        trace!(locator = ancestor.locator(), "narrowed scope");
        scope = vec![node];
    }
    Ok(scope)
}

/// Filter `scope` by `identifier` and pick the node at its position,
/// defaulting to the first match.
pub(crate) fn select_one<Q: DocumentQuery>(
    query: &Q,
    scope: &[Q::Node],
    identifier: &ElementIdentifier,
) -> NavigatorResult<Q::Node, Q::Node> {
    let mut nodes = filter_scope(query, scope, identifier)?;
    let position = identifier.position().unwrap_or(DEFAULT_ORDINAL_POSITION);
    let index = resolve_position(position, nodes.len()).map_err(|source| {
        NavigatorError::InvalidElementPosition {
            identifier: identifier.clone(),
            source,
        }
    })?;
    Ok(nodes.swap_remove(index))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::fake::FakeDocument;
    use crate::result::PositionError;

    /// html > body > (form#a > input, form#b > (input, section > input))
    fn document() -> FakeDocument {
        let mut doc = FakeDocument::new();
        let body = doc.add(Some(0), "body", &[], "");
        let form_a = doc.add(Some(body), "form", &[("id", "a")], "");
        doc.add(Some(form_a), "input", &[("name", "input-1")], "");
        let form_b = doc.add(Some(body), "form", &[("id", "b")], "");
        doc.add(Some(form_b), "input", &[("name", "input-2")], "");
        let section = doc.add(Some(form_b), "section", &[], "");
        doc.add(Some(section), "input", &[("name", "input-3")], "");
        doc
    }

    fn id_of(node: &crate::fake::FakeNode) -> Option<&str> {
        use crate::query::ElementNode;
        node.attribute("id")
    }

    #[test]
    fn test_no_parent_returns_root() {
        let doc = document();
        let scope = resolve_scope(&doc, &ElementIdentifier::css("input"), &doc.root()).unwrap();
        assert_eq!(scope, doc.root());
    }

    #[test]
    fn test_parent_without_position_uses_first_match() {
        let doc = document();
        let identifier =
            ElementIdentifier::css("input").with_parent(ElementIdentifier::css("form"));
        let scope = resolve_scope(&doc, &identifier, &doc.root()).unwrap();
        assert_eq!(scope.len(), 1);
        assert_eq!(id_of(&scope[0]), Some("a"));
    }

    #[test]
    fn test_parent_with_negative_position() {
        let doc = document();
        let identifier = ElementIdentifier::css("input")
            .with_parent(ElementIdentifier::css("form").at_position(-1));
        let scope = resolve_scope(&doc, &identifier, &doc.root()).unwrap();
        assert_eq!(id_of(&scope[0]), Some("b"));
    }

    #[test]
    fn test_nested_chain_narrows_each_step() {
        let doc = document();
        let identifier = ElementIdentifier::css("input").with_parent(
            ElementIdentifier::css("section")
                .with_parent(ElementIdentifier::css("form").at_position(2)),
        );
        let scope = resolve_scope(&doc, &identifier, &doc.root()).unwrap();
        assert_eq!(scope[0].tag, "section");
    }

    #[test]
    fn test_sequential_and_linked_resolution_agree() {
        let doc = document();
        let form = ElementIdentifier::css("form").at_position(2);
        let section = ElementIdentifier::css("section");

        let linked = ElementIdentifier::css("input")
            .with_parent(section.clone().with_parent(form.clone()));
        let linked_scope = resolve_scope(&doc, &linked, &doc.root()).unwrap();

        let leaf = ElementIdentifier::css("input");
        let first = resolve_scope(&doc, &leaf.clone().with_parent(form), &doc.root()).unwrap();
        let second = resolve_scope(&doc, &leaf.with_parent(section), &first).unwrap();
        assert_eq!(linked_scope.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(linked_scope[0].id, second[0].id);
    }

    #[test]
    fn test_unknown_ancestor_reports_ancestor() {
        let doc = document();
        let missing = ElementIdentifier::css("table").at_position(1);
        let identifier = ElementIdentifier::css("input")
            .at_position(1)
            .with_parent(missing.clone());
        let err = resolve_scope(&doc, &identifier, &doc.root()).unwrap_err();
        assert!(matches!(err, NavigatorError::UnknownElement { .. }));
        assert_eq!(err.identifier(), Some(&missing));
    }

    #[test]
    fn test_ancestor_position_error_is_wrapped() {
        let doc = document();
        let form = ElementIdentifier::css("form").at_position(5);
        let identifier = ElementIdentifier::css("input").with_parent(form.clone());
        let err = resolve_scope(&doc, &identifier, &doc.root()).unwrap_err();
        match err {
            NavigatorError::InvalidElementPosition { identifier, source } => {
                assert_eq!(identifier, form);
                assert_eq!(
                    source,
                    PositionError::OutOfBounds {
                        ordinal_position: 5,
                        collection_count: 2
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_ancestor_locator_reports_ancestor() {
        let doc = document();
        let bad = ElementIdentifier::css("!form");
        let identifier = ElementIdentifier::css("input").with_parent(bad.clone());
        let err = resolve_scope(&doc, &identifier, &doc.root()).unwrap_err();
        assert!(matches!(err, NavigatorError::InvalidLocator { .. }));
        assert_eq!(err.identifier(), Some(&bad));
    }
}
