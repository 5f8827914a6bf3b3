//! Directed weighted graph model for pathfinding.
//!
//! A [`Graph`] owns a set of [`Node`]s and directed, weighted [`Arc`]s
//! between them. Arcs reference their endpoints by [`NodeId`] and adjacency
//! lists hold [`ArcId`]s, so the model has no cyclic ownership while still
//! giving O(1) neighbor lookup in both directions.
//!
//! All structural mutation goes through [`Graph`] methods, which maintain the
//! referential-integrity invariants:
//!
//! - an arc is a member only if both its endpoints are members
//! - removing a node cascade-removes every incident arc
//! - a node's adjacency lists contain exactly the arcs for which it is the
//!   declared endpoint
//!
//! Failed mutations leave the graph untouched.
//!
//! Nodes and arcs carry independent enabled flags so callers can restrict
//! searches without rebuilding the graph; the search crates treat disabled
//! elements as absent.

mod arc;
mod error;
mod graph;
mod node;

pub use arc::{Arc, ArcId};
pub use error::GraphError;
pub use graph::Graph;
pub use node::{Node, NodeId, NodeKind};
