//! Remaining-cost estimators.

use cartograph_graph::{Graph, NodeId};

/// Estimates the remaining cost from a node to the search target.
///
/// Estimates must be non-negative. The minimum-cost guarantee at balance 0.5
/// additionally requires the estimate to never overestimate the true
/// remaining cost (admissible).
pub trait Heuristic {
    fn estimate(&self, graph: &Graph, node: NodeId, target: NodeId) -> f64;
}

/// Default heuristic: the distance of the direct arc from the target to the
/// node, or 0 when no such arc exists.
///
/// It estimates only from already-known direct connections and never computes
/// geometric distance, so it degrades gracefully on graphs with no arcs out
/// of the target (everything estimates as 0).
#[derive(Clone, Copy, Debug, Default)]
pub struct AssignedDistance;

impl Heuristic for AssignedDistance {
    fn estimate(&self, graph: &Graph, node: NodeId, target: NodeId) -> f64 {
        graph.arc_between(target, node).map_or(0.0, |a| a.distance())
    }
}

/// Constant-zero estimate. With balance 1.0 the engine is classic Dijkstra.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _graph: &Graph, _node: NodeId, _target: NodeId) -> f64 {
        0.0
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Graph, NodeId, NodeId) -> f64,
{
    fn estimate(&self, graph: &Graph, node: NodeId, target: NodeId) -> f64 {
        self(graph, node, target)
    }
}

#[cfg(test)]
mod tests {
    use cartograph_graph::NodeKind;

    use super::*;

    #[test]
    fn assigned_distance_reads_the_target_to_node_arc() {
        let mut g = Graph::new();
        g.add_node(NodeId(1), NodeKind::Generic).unwrap();
        g.add_node(NodeId(2), NodeKind::Generic).unwrap();
        g.add_arc(NodeId(2), NodeId(1), 4.5).unwrap();
        // Arc runs target(2) -> node(1).
        assert_eq!(AssignedDistance.estimate(&g, NodeId(1), NodeId(2)), 4.5);
        // No arc target(1) -> node(2): estimate falls back to 0.
        assert_eq!(AssignedDistance.estimate(&g, NodeId(2), NodeId(1)), 0.0);
    }

    #[test]
    fn closures_are_heuristics() {
        let g = Graph::new();
        let h = |_: &Graph, node: NodeId, target: NodeId| (target.0 - node.0).abs() as f64;
        assert_eq!(h.estimate(&g, NodeId(3), NodeId(10)), 7.0);
    }
}
