//! Typed search errors.
//!
//! "No path found" is not an error: [`Astar::search`](crate::Astar::search)
//! reports it as `Ok(None)`. `SearchError` covers malformed input and
//! configuration only.

use std::fmt;

use cartograph_graph::NodeId;

/// Failure to start or configure a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchError {
    /// Start or target node is not a member of the searched graph.
    UnknownNode(NodeId),
    /// Balance coefficient outside `[0, 1]`.
    InvalidBalance(f64),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => {
                write!(f, "node {id} is not a member of the searched graph")
            }
            Self::InvalidBalance(b) => write!(
                f,
                "balance coefficient {b} must belong to [0, 1]: \
                 0 explores greedily on the heuristic, \
                 0.5 minimizes cost without expanding more nodes than necessary, \
                 1 considers real cost only"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
