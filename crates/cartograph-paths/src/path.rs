//! Search results.

use std::fmt;

use cartograph_graph::{ArcId, NodeId};

/// An ordered path produced by a successful search.
///
/// `nodes` always holds exactly one more element than `arcs`: the visited
/// nodes from start to target, with the traversed arcs between them. A
/// search whose start equals its target yields one node, no arcs and cost 0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub(crate) arcs: Vec<ArcId>,
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) cost: f64,
}

impl Path {
    /// The traversed arcs, in order.
    #[inline]
    pub fn arcs(&self) -> &[ArcId] {
        &self.arcs
    }

    /// The visited nodes, in order, start and target included.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Total real cost: the sum of each traversed arc's cost.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of arcs traversed.
    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Whether the path traverses no arc (start equals target).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, " (cost {})", self.cost)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path {
            arcs: vec![ArcId::new(NodeId(1), NodeId(2))],
            nodes: vec![NodeId(1), NodeId(2)],
            cost: 1.5,
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
