//! The [`Graph`] aggregate: owns nodes and arcs, maintains referential
//! integrity.

use std::collections::HashMap;

use crate::arc::{Arc, ArcId};
use crate::error::GraphError;
use crate::node::{Node, NodeId, NodeKind};

/// A directed weighted graph.
///
/// Nodes are stored by [`NodeId`] and arcs by [`ArcId`] (their endpoint
/// pair), so `arc_between` is a single map lookup. Adjacency lists on the
/// nodes hold arc ids in insertion order; they are kept consistent with arc
/// membership by every mutation here, and a failed mutation leaves the graph
/// untouched.
///
/// The graph provides no internal locking. Any number of read-only searches
/// may run over one graph concurrently; callers interleaving mutation with
/// search add their own synchronization.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    arcs: HashMap<ArcId, Arc>,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------------

    /// Add a node with the given identity and role tag.
    pub fn add_node(&mut self, id: NodeId, kind: NodeKind) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.nodes.insert(id, Node::new(id, kind));
        Ok(())
    }

    /// Add an arc from `start` to `end` with the given base distance.
    ///
    /// Both endpoints must already be members, must differ, and the pair must
    /// not already carry an arc. Returns the new arc's id.
    pub fn add_arc(
        &mut self,
        start: NodeId,
        end: NodeId,
        distance: f64,
    ) -> Result<ArcId, GraphError> {
        if start == end {
            return Err(GraphError::SelfLoop(start));
        }
        if !self.nodes.contains_key(&start) {
            return Err(GraphError::UnknownNode(start));
        }
        if !self.nodes.contains_key(&end) {
            return Err(GraphError::UnknownNode(end));
        }
        let id = ArcId::new(start, end);
        if self.arcs.contains_key(&id) {
            return Err(GraphError::DuplicateArc(id));
        }
        self.arcs.insert(id, Arc::new(id, distance));
        self.adjacency_mut(start).outgoing.push(id);
        self.adjacency_mut(end).incoming.push(id);
        Ok(id)
    }

    /// Remove a node and cascade-remove every arc incident to it.
    ///
    /// Returns the removed node. No dangling reference survives: each
    /// incident arc is dropped from the arc set and from the far endpoint's
    /// adjacency list.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let node = self.nodes.remove(&id).ok_or(GraphError::UnknownNode(id))?;
        for aid in &node.incoming {
            self.arcs.remove(aid);
            if let Some(far) = self.nodes.get_mut(&aid.start) {
                far.outgoing.retain(|a| a != aid);
            }
        }
        for aid in &node.outgoing {
            self.arcs.remove(aid);
            if let Some(far) = self.nodes.get_mut(&aid.end) {
                far.incoming.retain(|a| a != aid);
            }
        }
        Ok(node)
    }

    /// Remove an arc, unlinking it from both endpoints' adjacency lists.
    pub fn remove_arc(&mut self, id: ArcId) -> Result<Arc, GraphError> {
        let arc = self.arcs.remove(&id).ok_or(GraphError::UnknownArc(id))?;
        if let Some(n) = self.nodes.get_mut(&id.start) {
            n.outgoing.retain(|a| *a != id);
        }
        if let Some(n) = self.nodes.get_mut(&id.end) {
            n.incoming.retain(|a| *a != id);
        }
        Ok(arc)
    }

    /// Empty the graph.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.arcs.clear();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Look up a node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutable access to a node's kind. Adjacency and the enabled flag are
    /// not reachable this way.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Look up an arc by its endpoint pair.
    #[inline]
    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(&id)
    }

    /// Mutable access to an arc's distance, weight, enabled flag and length
    /// cache. Endpoints are not mutable here; re-point through
    /// [`Graph::set_arc_start`] / [`Graph::set_arc_end`].
    #[inline]
    pub fn arc_mut(&mut self, id: ArcId) -> Option<&mut Arc> {
        self.arcs.get_mut(&id)
    }

    /// Whether a node with this id is a member.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether an arc with this endpoint pair is a member.
    #[inline]
    pub fn contains_arc(&self, id: ArcId) -> bool {
        self.arcs.contains_key(&id)
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of arcs.
    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// All nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All arcs, in no particular order.
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.arcs.values()
    }

    /// All node ids, in no particular order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Arcs starting from `id`, in insertion order. Empty for a non-member.
    pub fn outgoing_arcs(&self, id: NodeId) -> impl Iterator<Item = &Arc> {
        self.adjacency(id, true)
    }

    /// Arcs leading to `id`, in insertion order. Empty for a non-member.
    pub fn incoming_arcs(&self, id: NodeId) -> impl Iterator<Item = &Arc> {
        self.adjacency(id, false)
    }

    /// Nodes directly reachable from `id` (one outgoing arc away).
    pub fn accessible_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.outgoing_arcs(id).map(Arc::end).collect()
    }

    /// Nodes that can directly reach `id` (one incoming arc away).
    pub fn accessing_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.incoming_arcs(id).map(Arc::start).collect()
    }

    /// `id` plus every directly linked node, `id` first. Empty for a
    /// non-member.
    pub fn neighborhood(&self, id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.nodes.get(&id) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(1 + node.outgoing.len() + node.incoming.len());
        out.push(id);
        out.extend(node.outgoing.iter().map(|a| a.end));
        out.extend(node.incoming.iter().map(|a| a.start));
        out
    }

    /// The arc from `start` to `end`, if present. O(1).
    #[inline]
    pub fn arc_between(&self, start: NodeId, end: NodeId) -> Option<&Arc> {
        self.arcs.get(&ArcId::new(start, end))
    }

    /// Sever every arc incident to `id`. The node itself stays a member.
    pub fn isolate(&mut self, id: NodeId) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        let incoming = std::mem::take(&mut node.incoming);
        let outgoing = std::mem::take(&mut node.outgoing);
        for aid in incoming {
            self.arcs.remove(&aid);
            if let Some(far) = self.nodes.get_mut(&aid.start) {
                far.outgoing.retain(|a| *a != aid);
            }
        }
        for aid in outgoing {
            self.arcs.remove(&aid);
            if let Some(far) = self.nodes.get_mut(&aid.end) {
                far.incoming.retain(|a| *a != aid);
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Enable / disable
    // -----------------------------------------------------------------------

    /// Set a node's enabled flag.
    ///
    /// Disabling a node also disables every incident arc, in both directions.
    /// Re-enabling it does NOT re-enable them: the cascade is one-directional,
    /// and arcs disabled by it (or directly) must be re-enabled individually.
    /// Downstream logic relies on this asymmetry; do not "fix" it.
    pub fn set_node_enabled(&mut self, id: NodeId, enabled: bool) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.enabled = enabled;
        if !enabled {
            let incident: Vec<ArcId> = node
                .incoming
                .iter()
                .chain(node.outgoing.iter())
                .copied()
                .collect();
            for aid in incident {
                if let Some(arc) = self.arcs.get_mut(&aid) {
                    arc.set_enabled(false);
                }
            }
        }
        Ok(())
    }

    /// Set an arc's enabled flag. Independent of its endpoint nodes.
    pub fn set_arc_enabled(&mut self, id: ArcId, enabled: bool) -> Result<(), GraphError> {
        let arc = self.arcs.get_mut(&id).ok_or(GraphError::UnknownArc(id))?;
        arc.set_enabled(enabled);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Re-pointing
    // -----------------------------------------------------------------------

    /// Move an arc's start to another member node.
    ///
    /// Relinks adjacency on both sides and re-keys the arc; the memoized
    /// length is dropped. Returns the arc's new id.
    pub fn set_arc_start(&mut self, id: ArcId, start: NodeId) -> Result<ArcId, GraphError> {
        self.repoint(id, ArcId::new(start, id.end))
    }

    /// Move an arc's end to another member node.
    ///
    /// Relinks adjacency on both sides and re-keys the arc; the memoized
    /// length is dropped. Returns the arc's new id.
    pub fn set_arc_end(&mut self, id: ArcId, end: NodeId) -> Result<ArcId, GraphError> {
        self.repoint(id, ArcId::new(id.start, end))
    }

    fn repoint(&mut self, old: ArcId, new: ArcId) -> Result<ArcId, GraphError> {
        if !self.arcs.contains_key(&old) {
            return Err(GraphError::UnknownArc(old));
        }
        if new == old {
            return Ok(old);
        }
        if new.start == new.end {
            return Err(GraphError::SelfLoop(new.start));
        }
        if !self.nodes.contains_key(&new.start) {
            return Err(GraphError::UnknownNode(new.start));
        }
        if !self.nodes.contains_key(&new.end) {
            return Err(GraphError::UnknownNode(new.end));
        }
        if self.arcs.contains_key(&new) {
            return Err(GraphError::DuplicateArc(new));
        }
        // All checks passed; from here the relink cannot fail.
        let mut arc = self
            .arcs
            .remove(&old)
            .expect("arc membership checked above");
        if let Some(n) = self.nodes.get_mut(&old.start) {
            n.outgoing.retain(|a| *a != old);
        }
        if let Some(n) = self.nodes.get_mut(&old.end) {
            n.incoming.retain(|a| *a != old);
        }
        arc.repoint(new);
        self.arcs.insert(new, arc);
        self.adjacency_mut(new.start).outgoing.push(new);
        self.adjacency_mut(new.end).incoming.push(new);
        Ok(new)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn adjacency(&self, id: NodeId, outgoing: bool) -> impl Iterator<Item = &Arc> {
        let list: &[ArcId] = match self.nodes.get(&id) {
            Some(n) if outgoing => &n.outgoing,
            Some(n) => &n.incoming,
            None => &[],
        };
        list.iter().filter_map(|aid| self.arcs.get(aid))
    }

    /// Adjacency access for an endpoint whose membership was already checked.
    fn adjacency_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(&id)
            .expect("arc endpoint is a graph member")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: i32) -> NodeId {
        NodeId(id)
    }

    fn triangle() -> Graph {
        let mut g = Graph::new();
        for id in 1..=3 {
            g.add_node(n(id), NodeKind::Generic).unwrap();
        }
        g.add_arc(n(1), n(2), 1.0).unwrap();
        g.add_arc(n(2), n(3), 1.0).unwrap();
        g.add_arc(n(1), n(3), 5.0).unwrap();
        g
    }

    /// Every arc's endpoints are members, and every adjacency list holds
    /// exactly the arcs for which the node is the declared endpoint.
    fn assert_integrity(g: &Graph) {
        for arc in g.arcs() {
            assert!(g.contains_node(arc.start()), "dangling start of {arc}");
            assert!(g.contains_node(arc.end()), "dangling end of {arc}");
        }
        for node in g.nodes() {
            for aid in node.outgoing() {
                assert_eq!(aid.start, node.id());
                assert!(g.contains_arc(*aid));
            }
            for aid in node.incoming() {
                assert_eq!(aid.end, node.id());
                assert!(g.contains_arc(*aid));
            }
        }
        let listed: usize = g.nodes().map(|nd| nd.outgoing().len()).sum();
        assert_eq!(listed, g.arc_count());
    }

    #[test]
    fn add_node_rejects_duplicates() {
        let mut g = Graph::new();
        g.add_node(n(1), NodeKind::Generic).unwrap();
        assert_eq!(
            g.add_node(n(1), NodeKind::Gate),
            Err(GraphError::DuplicateNode(n(1)))
        );
        assert_eq!(g.node_count(), 1);
        // The original node is untouched.
        assert_eq!(g.node(n(1)).unwrap().kind(), NodeKind::Generic);
    }

    #[test]
    fn add_arc_requires_member_endpoints() {
        let mut g = Graph::new();
        g.add_node(n(1), NodeKind::Generic).unwrap();
        assert_eq!(
            g.add_arc(n(1), n(2), 1.0),
            Err(GraphError::UnknownNode(n(2)))
        );
        assert_eq!(
            g.add_arc(n(9), n(1), 1.0),
            Err(GraphError::UnknownNode(n(9)))
        );
        assert_eq!(g.arc_count(), 0);
        assert_integrity(&g);
    }

    #[test]
    fn add_arc_rejects_self_loops_and_duplicates() {
        let mut g = Graph::new();
        g.add_node(n(1), NodeKind::Generic).unwrap();
        g.add_node(n(2), NodeKind::Generic).unwrap();
        assert_eq!(g.add_arc(n(1), n(1), 1.0), Err(GraphError::SelfLoop(n(1))));
        let id = g.add_arc(n(1), n(2), 1.0).unwrap();
        assert_eq!(g.add_arc(n(1), n(2), 9.0), Err(GraphError::DuplicateArc(id)));
        // The reverse direction is a different arc.
        g.add_arc(n(2), n(1), 1.0).unwrap();
        assert_eq!(g.arc_count(), 2);
        assert_integrity(&g);
    }

    #[test]
    fn remove_node_cascades_incident_arcs() {
        let mut g = triangle();
        let removed = g.remove_node(n(2)).unwrap();
        assert_eq!(removed.id(), n(2));
        assert_eq!(g.node_count(), 2);
        // 1->2 and 2->3 went with the node, 1->3 survives.
        assert_eq!(g.arc_count(), 1);
        assert!(g.arc_between(n(1), n(3)).is_some());
        assert!(g.arc_between(n(1), n(2)).is_none());
        assert_integrity(&g);
    }

    #[test]
    fn remove_unknown_node_leaves_graph_unchanged() {
        let mut g = triangle();
        assert_eq!(g.remove_node(n(9)), Err(GraphError::UnknownNode(n(9))));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.arc_count(), 3);
        assert_integrity(&g);
    }

    #[test]
    fn remove_arc_unlinks_both_endpoints() {
        let mut g = triangle();
        let id = ArcId::new(n(1), n(2));
        g.remove_arc(id).unwrap();
        assert!(!g.contains_arc(id));
        assert!(!g.node(n(1)).unwrap().outgoing().contains(&id));
        assert!(!g.node(n(2)).unwrap().incoming().contains(&id));
        assert_integrity(&g);
    }

    #[test]
    fn clear_empties_both_collections() {
        let mut g = triangle();
        g.clear();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn adjacency_queries() {
        let g = triangle();
        assert_eq!(g.accessible_nodes(n(1)), vec![n(2), n(3)]);
        assert_eq!(g.accessing_nodes(n(3)), vec![n(2), n(1)]);
        assert_eq!(g.neighborhood(n(2)), vec![n(2), n(3), n(1)]);
        assert_eq!(g.outgoing_arcs(n(3)).count(), 0);
        assert_eq!(g.incoming_arcs(n(1)).count(), 0);
        // Non-members answer empty, not panic.
        assert!(g.accessible_nodes(n(9)).is_empty());
        assert!(g.neighborhood(n(9)).is_empty());
    }

    #[test]
    fn arc_between_is_directional() {
        let g = triangle();
        assert_eq!(g.arc_between(n(1), n(3)).unwrap().distance(), 5.0);
        assert!(g.arc_between(n(3), n(1)).is_none());
    }

    #[test]
    fn isolate_severs_all_incident_arcs() {
        let mut g = triangle();
        g.isolate(n(3)).unwrap();
        assert!(g.contains_node(n(3)));
        assert_eq!(g.arc_count(), 1); // only 1->2 left
        assert!(g.node(n(3)).unwrap().incoming().is_empty());
        assert_integrity(&g);
    }

    #[test]
    fn disabling_a_node_disables_incident_arcs() {
        let mut g = triangle();
        g.set_node_enabled(n(3), false).unwrap();
        assert!(!g.node(n(3)).unwrap().enabled());
        assert!(!g.arc_between(n(2), n(3)).unwrap().enabled());
        assert!(!g.arc_between(n(1), n(3)).unwrap().enabled());
        // 1->2 is not incident to 3 and stays enabled.
        assert!(g.arc_between(n(1), n(2)).unwrap().enabled());
    }

    #[test]
    fn reenabling_a_node_does_not_reenable_arcs() {
        let mut g = triangle();
        g.set_node_enabled(n(3), false).unwrap();
        g.set_node_enabled(n(3), true).unwrap();
        assert!(g.node(n(3)).unwrap().enabled());
        // One-directional cascade: the arcs stay disabled.
        assert!(!g.arc_between(n(2), n(3)).unwrap().enabled());
        assert!(!g.arc_between(n(1), n(3)).unwrap().enabled());
    }

    #[test]
    fn arc_enable_is_independent_of_nodes() {
        let mut g = triangle();
        let id = ArcId::new(n(1), n(2));
        g.set_arc_enabled(id, false).unwrap();
        assert!(!g.arc(id).unwrap().enabled());
        assert!(g.node(n(1)).unwrap().enabled());
        assert!(g.node(n(2)).unwrap().enabled());
        g.set_arc_enabled(id, true).unwrap();
        assert!(g.arc(id).unwrap().enabled());
    }

    #[test]
    fn repoint_relinks_and_rekeys() {
        let mut g = triangle();
        g.add_node(n(4), NodeKind::Generic).unwrap();
        let old = ArcId::new(n(2), n(3));
        let new = g.set_arc_end(old, n(4)).unwrap();
        assert_eq!(new, ArcId::new(n(2), n(4)));
        assert!(!g.contains_arc(old));
        assert!(g.contains_arc(new));
        assert!(g.node(n(3)).unwrap().incoming().is_empty());
        assert_eq!(g.node(n(4)).unwrap().incoming(), &[new]);
        // Distance travels with the arc.
        assert_eq!(g.arc(new).unwrap().distance(), 1.0);
        assert_integrity(&g);
    }

    #[test]
    fn repoint_rejects_self_loop_and_duplicate() {
        let mut g = triangle();
        let id = ArcId::new(n(1), n(2));
        assert_eq!(g.set_arc_end(id, n(1)), Err(GraphError::SelfLoop(n(1))));
        // 1->3 already exists.
        assert_eq!(
            g.set_arc_end(id, n(3)),
            Err(GraphError::DuplicateArc(ArcId::new(n(1), n(3))))
        );
        // Failed re-points leave everything in place.
        assert!(g.contains_arc(id));
        assert_integrity(&g);
    }

    #[test]
    fn repoint_drops_memoized_length() {
        let mut g = triangle();
        g.add_node(n(4), NodeKind::Generic).unwrap();
        let old = ArcId::new(n(1), n(2));
        g.arc_mut(old).unwrap().set_length(99.0);
        let new = g.set_arc_start(old, n(4)).unwrap();
        assert_eq!(g.arc(new).unwrap().length(), 1.0);
    }

    #[test]
    fn integrity_after_mixed_mutation_sequence() {
        let mut g = Graph::new();
        for id in 1..=6 {
            g.add_node(n(id), NodeKind::Generic).unwrap();
        }
        for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1), (2, 5)] {
            g.add_arc(n(a), n(b), (a + b) as f64).unwrap();
        }
        assert_integrity(&g);
        g.remove_node(n(4)).unwrap();
        assert_integrity(&g);
        g.remove_arc(ArcId::new(n(2), n(5))).unwrap();
        assert_integrity(&g);
        g.isolate(n(6)).unwrap();
        assert_integrity(&g);
        g.set_arc_end(ArcId::new(n(1), n(2)), n(5)).unwrap();
        assert_integrity(&g);
    }
}
