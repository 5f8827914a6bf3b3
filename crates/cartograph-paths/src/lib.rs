//! A*/Dijkstra hybrid pathfinding over [`cartograph_graph`] graphs.
//!
//! The engine ([`Astar`]) borrows a graph read-only and searches a best path
//! between two member nodes, ordering its frontier by a blend of real
//! accumulated cost and a pluggable [`Heuristic`] estimate:
//!
//! ```text
//! evaluation = balance * cost + (1 - balance) * heuristic
//! ```
//!
//! | balance | behaviour |
//! |---|---|
//! | 0.0 | greedy on the heuristic, ignores real cost |
//! | 0.5 | minimum-cost path with an admissible heuristic, fewest expansions |
//! | 1.0 | classic Dijkstra, ignores the heuristic |
//!
//! "No path" is a normal outcome ([`Astar::search`] returns `Ok(None)`),
//! distinct from malformed input ([`SearchError`]). Searches never mutate
//! the graph; disabled nodes and arcs are treated as absent, checked live on
//! every expansion. For caller-bounded searches, [`Astar::explore`] exposes
//! the exploration loop one [`Exploration::step`] at a time.

mod astar;
mod error;
mod heuristic;
mod path;
mod track;

pub use astar::{Astar, ArcCost, CostModel, Exploration, Step};
pub use error::SearchError;
pub use heuristic::{AssignedDistance, Heuristic, ZeroHeuristic};
pub use path::Path;
