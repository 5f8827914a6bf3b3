//! Graph vertices: [`NodeId`], [`NodeKind`] and [`Node`].

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::arc::ArcId;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Stable, externally assigned node identity.
///
/// The graph never generates ids; callers supply them (asset ids, map
/// numbers, ...). Two nodes are equal iff their ids are equal, independent
/// of kind or adjacency.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub i32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for NodeId {
    #[inline]
    fn from(id: i32) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// Role tag of a node.
///
/// Only callers and heuristics branch on this; the search engine itself never
/// inspects it. `Custom` leaves the enumeration open for domain-specific
/// roles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    #[default]
    Generic,
    Gate,
    MapRegion,
    /// Caller-defined role.
    Custom(u32),
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A graph vertex with adjacency lists of incident arcs.
///
/// Adjacency is maintained exclusively by [`Graph`](crate::Graph) arc
/// mutation; it is never edited directly. The enabled flag is set through
/// [`Graph::set_node_enabled`](crate::Graph::set_node_enabled) because
/// disabling a node cascades to its incident arcs.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    pub(crate) enabled: bool,
    pub(crate) outgoing: Vec<ArcId>,
    pub(crate) incoming: Vec<ArcId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            enabled: true,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// The node's identity. Immutable after construction.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's role tag.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Change the role tag. Does not affect identity or adjacency.
    pub fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    /// Whether the node participates in searches. A disabled node is treated
    /// as if it did not exist.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Arcs that start from this node, in insertion order.
    #[inline]
    pub fn outgoing(&self) -> &[ArcId] {
        &self.outgoing
    }

    /// Arcs that lead to this node, in insertion order.
    #[inline]
    pub fn incoming(&self) -> &[ArcId] {
        &self.incoming
    }
}

// Equality and hashing by identity only.

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_by_id_only() {
        let mut a = Node::new(NodeId(7), NodeKind::Generic);
        let b = Node::new(NodeId(7), NodeKind::Gate);
        let c = Node::new(NodeId(8), NodeKind::Generic);
        a.enabled = false;
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn new_node_is_enabled_and_isolated() {
        let n = Node::new(NodeId(1), NodeKind::MapRegion);
        assert!(n.enabled());
        assert!(n.outgoing().is_empty());
        assert!(n.incoming().is_empty());
        assert_eq!(n.kind(), NodeKind::MapRegion);
    }

    #[test]
    fn display_is_the_raw_id() {
        assert_eq!(NodeId(42).to_string(), "42");
        assert_eq!(Node::new(NodeId(-3), NodeKind::Generic).to_string(), "-3");
    }
}
