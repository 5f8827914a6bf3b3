//! Typed graph mutation errors.

use std::fmt;

use crate::arc::ArcId;
use crate::node::NodeId;

/// Failure of a graph mutation or query.
///
/// Whenever one of these is returned the graph is exactly as it was before
/// the call; no partial mutation is ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this id is already a member.
    DuplicateNode(NodeId),
    /// An arc with this endpoint pair is already a member.
    DuplicateArc(ArcId),
    /// The node is not a graph member.
    UnknownNode(NodeId),
    /// The arc is not a graph member.
    UnknownArc(ArcId),
    /// The arc would start and end at the same node.
    SelfLoop(NodeId),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(id) => write!(f, "node {id} is already in the graph"),
            Self::DuplicateArc(id) => write!(f, "arc {id} is already in the graph"),
            Self::UnknownNode(id) => write!(f, "node {id} is not a graph member"),
            Self::UnknownArc(id) => write!(f, "arc {id} is not a graph member"),
            Self::SelfLoop(id) => {
                write!(f, "arc endpoints must differ, both are node {id}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
