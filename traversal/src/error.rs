use thiserror::Error;

/// Failures reported by a [`Traversal`](crate::Traversal).
///
/// Unreachable goals are not errors while searching; they only surface when a
/// path, depth or distance is requested for a node the search never found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// The traversal was used out of order, e.g. `go_to` before `start_from`.
    #[error("invalid traversal state: {0}")]
    InvalidState(&'static str),

    /// The requested node was never discovered by the search.
    #[error("node was not visited by the traversal")]
    NodeNotVisited,

    /// The node was visited but does not lie on the path to the cursor.
    #[error("node is not an ancestor of the path target")]
    NotOnPath,
}

pub type Result<T, E = TraversalError> = std::result::Result<T, E>;
