//! Directed weighted edges: [`ArcId`] and [`Arc`].

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::node::NodeId;

// ---------------------------------------------------------------------------
// ArcId
// ---------------------------------------------------------------------------

/// Identity of an arc: its ordered endpoint pair.
///
/// Arcs are uniquely identified by their endpoints, so a graph can never hold
/// two parallel arcs between the same ordered pair. `start == end` ids are
/// unrepresentable through the public [`Graph`](crate::Graph) API.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcId {
    pub start: NodeId,
    pub end: NodeId,
}

impl ArcId {
    /// Identity of the arc from `start` to `end`.
    #[inline]
    pub const fn new(start: NodeId, end: NodeId) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Arc
// ---------------------------------------------------------------------------

/// A directed, weighted edge between two distinct nodes.
///
/// An arc carries a caller-supplied base `distance`, a crossing `weight`
/// (default 1) and an independent enabled flag. Its `length` defaults to the
/// base distance but can be memoized to a computed value for non-linear cost
/// models; the cost of traversal is always `weight * length`, derived on
/// every read.
///
/// Endpoints are immutable on the value; re-pointing an arc goes through
/// [`Graph::set_arc_start`](crate::Graph::set_arc_start) /
/// [`Graph::set_arc_end`](crate::Graph::set_arc_end) so adjacency
/// bookkeeping stays consistent.
#[derive(Clone, Debug)]
pub struct Arc {
    id: ArcId,
    distance: f64,
    weight: f64,
    enabled: bool,
    /// Memoized length; `None` falls back to the base distance on read.
    length: Option<f64>,
}

impl Arc {
    pub(crate) fn new(id: ArcId, distance: f64) -> Self {
        Self {
            id,
            distance,
            weight: 1.0,
            enabled: true,
            length: None,
        }
    }

    /// The arc's identity: its ordered endpoint pair.
    #[inline]
    pub fn id(&self) -> ArcId {
        self.id
    }

    /// The node this arc starts from.
    #[inline]
    pub fn start(&self) -> NodeId {
        self.id.start
    }

    /// The node this arc leads to.
    #[inline]
    pub fn end(&self) -> NodeId {
        self.id.end
    }

    /// Caller-supplied base distance.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Replace the base distance. Clears any memoized length.
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
        self.length = None;
    }

    /// Crossing factor applied on top of length. Defaults to 1.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Change the crossing factor. Cost is derived on read, so no cache to
    /// clear.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Whether the arc participates in searches. A disabled arc is treated
    /// as if it did not exist (or as if its cost were infinite).
    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable this arc only. Never touches its endpoint nodes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The arc's length: the memoized value if one is installed, else the
    /// base distance.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length.unwrap_or(self.distance)
    }

    /// Memoize a computed length, for arcs whose effective length is not the
    /// base distance. Stays until [`Arc::invalidate_length`] or a structural
    /// change clears it.
    pub fn set_length(&mut self, length: f64) {
        self.length = Some(length);
    }

    /// Drop the memoized length; the next read falls back to the base
    /// distance.
    pub fn invalidate_length(&mut self) {
        self.length = None;
    }

    /// Cost of traversing the arc: `weight * length`. Derived, never cached.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.weight * self.length()
    }

    /// Re-key the arc after a `Graph` re-point. Structural change, so the
    /// memoized length is dropped.
    pub(crate) fn repoint(&mut self, id: ArcId) {
        self.id = id;
        self.length = None;
    }
}

// Equality and hashing by endpoint pair only: two arcs with identical
// endpoints but different weights are the same arc for membership purposes.

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Arc {}

impl Hash for Arc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(start: i32, end: i32, distance: f64) -> Arc {
        Arc::new(ArcId::new(NodeId(start), NodeId(end)), distance)
    }

    #[test]
    fn length_defaults_to_distance() {
        let a = arc(1, 2, 3.5);
        assert_eq!(a.length(), 3.5);
        assert_eq!(a.cost(), 3.5);
    }

    #[test]
    fn cost_is_weight_times_length() {
        let mut a = arc(1, 2, 2.0);
        a.set_weight(3.0);
        assert_eq!(a.cost(), 6.0);
        a.set_length(5.0);
        assert_eq!(a.cost(), 15.0);
    }

    #[test]
    fn set_distance_clears_memoized_length() {
        let mut a = arc(1, 2, 2.0);
        a.set_length(9.0);
        assert_eq!(a.length(), 9.0);
        a.set_distance(4.0);
        assert_eq!(a.length(), 4.0);
    }

    #[test]
    fn invalidate_length_falls_back_to_distance() {
        let mut a = arc(1, 2, 2.0);
        a.set_length(9.0);
        a.invalidate_length();
        assert_eq!(a.length(), 2.0);
    }

    #[test]
    fn equality_by_endpoints_only() {
        let mut a = arc(1, 2, 2.0);
        let b = arc(1, 2, 7.0);
        a.set_weight(10.0);
        assert_eq!(a, b);
        assert_ne!(a, arc(2, 1, 2.0));
    }

    #[test]
    fn display_shows_endpoints() {
        assert_eq!(arc(1, 3, 5.0).to_string(), "1 -> 3");
    }
}
