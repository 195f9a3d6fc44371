//! Locator filtering: apply one identifier's locator to a scope.

use tracing::trace;

use crate::identifier::ElementIdentifier;
use crate::query::DocumentQuery;
use crate::result::{NavigatorError, NavigatorResult, QueryError};

/// Apply `identifier`'s locator to `scope`.
///
/// Fails with [`NavigatorError::InvalidLocator`] when the provider rejects the
/// locator syntax and with [`NavigatorError::UnknownElement`] when it matches
/// nothing. The identifier's position and parent are ignored here.
pub fn filter_scope<Q: DocumentQuery>(
    query: &Q,
    scope: &[Q::Node],
    identifier: &ElementIdentifier,
) -> NavigatorResult<Vec<Q::Node>, Q::Node> {
    let nodes = query
        .filter(scope, identifier.selector())
        .map_err(|source| match source {
            QueryError::InvalidSyntax { .. } => NavigatorError::InvalidLocator {
                identifier: identifier.clone(),
                source,
            },
            QueryError::Unsupported { .. } | QueryError::Provider { .. } => NavigatorError::Query {
                identifier: identifier.clone(),
                source,
            },
        })?;

    trace!(
        locator = identifier.locator(),
        scope = scope.len(),
        matches = nodes.len(),
        "filtered scope"
    );

    if nodes.is_empty() {
        return Err(NavigatorError::UnknownElement {
            identifier: identifier.clone(),
        });
    }
    Ok(nodes)
}
