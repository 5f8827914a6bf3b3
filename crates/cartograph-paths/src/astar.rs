//! The A*/Dijkstra hybrid search engine.

use std::collections::HashSet;

use cartograph_graph::{Arc, Graph, NodeId};

use crate::error::SearchError;
use crate::heuristic::{AssignedDistance, Heuristic};
use crate::path::Path;
use crate::track::{OpenFrontier, Track};

// ---------------------------------------------------------------------------
// Cost model
// ---------------------------------------------------------------------------

/// Maps an arc to its traversal cost.
///
/// The default [`ArcCost`] reads `weight * length` straight off the arc;
/// substitute a model to price arcs non-linearly without touching the graph.
pub trait CostModel {
    /// Cost of traversing `arc`. Must be non-negative.
    fn cost(&self, arc: &Arc) -> f64;
}

/// Default cost model: [`Arc::cost`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ArcCost;

impl CostModel for ArcCost {
    #[inline]
    fn cost(&self, arc: &Arc) -> f64 {
        arc.cost()
    }
}

impl<F> CostModel for F
where
    F: Fn(&Arc) -> f64,
{
    fn cost(&self, arc: &Arc) -> f64 {
        self(arc)
    }
}

// ---------------------------------------------------------------------------
// Astar
// ---------------------------------------------------------------------------

/// A*/Dijkstra hybrid search over a [`Graph`].
///
/// The engine borrows the graph immutably: a search never mutates it, and any
/// number of independent engines may search the same graph in parallel, each
/// with its own target and balance. Nothing here is global.
///
/// The balance coefficient blends real accumulated cost against the heuristic
/// estimate when ordering the frontier; see the crate docs for the scale.
/// Frontier ties pop in insertion order, so a search over a fixed graph is
/// fully deterministic.
pub struct Astar<'g, H = AssignedDistance, C = ArcCost> {
    graph: &'g Graph,
    heuristic: H,
    cost_model: C,
    balance: f64,
}

impl<'g> Astar<'g> {
    /// Engine with the default [`AssignedDistance`] heuristic, the default
    /// cost model and balance 0.5.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            heuristic: AssignedDistance,
            cost_model: ArcCost,
            balance: 0.5,
        }
    }
}

impl<'g, H: Heuristic> Astar<'g, H> {
    /// Engine with a caller-supplied heuristic.
    pub fn with_heuristic(graph: &'g Graph, heuristic: H) -> Self {
        Self {
            graph,
            heuristic,
            cost_model: ArcCost,
            balance: 0.5,
        }
    }
}

impl<'g, H: Heuristic, C: CostModel> Astar<'g, H, C> {
    /// Swap in a custom arc cost model.
    pub fn with_cost_model<C2: CostModel>(self, cost_model: C2) -> Astar<'g, H, C2> {
        Astar {
            graph: self.graph,
            heuristic: self.heuristic,
            cost_model,
            balance: self.balance,
        }
    }

    /// Current balance coefficient.
    #[inline]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Set the balance coefficient. Values outside `[0, 1]` are rejected and
    /// the previous value is kept.
    pub fn set_balance(&mut self, balance: f64) -> Result<(), SearchError> {
        if !(0.0..=1.0).contains(&balance) {
            return Err(SearchError::InvalidBalance(balance));
        }
        self.balance = balance;
        Ok(())
    }

    /// Search a best path from `from` to `to`.
    ///
    /// `Ok(None)` is the normal "no path" outcome; `Err` is reserved for
    /// endpoints that are not graph members. Running the same search twice
    /// over an unmodified graph yields an identical path and cost.
    pub fn search(&self, from: NodeId, to: NodeId) -> Result<Option<Path>, SearchError> {
        let mut exploration = self.explore(from, to)?;
        loop {
            match exploration.step() {
                Step::Continue => (),
                Step::Found(path) => {
                    log::debug!(
                        "path {from} -> {to}: {} arcs, cost {}",
                        path.len(),
                        path.cost()
                    );
                    return Ok(Some(path));
                }
                Step::Exhausted => {
                    log::debug!("no path from {from} to {to}");
                    return Ok(None);
                }
            }
        }
    }

    /// Begin a stepwise search, seeding the frontier with a single track at
    /// `from`.
    ///
    /// Fails fast if either endpoint is not a graph member. A disabled
    /// endpoint is not malformed input: disabled elements are simply absent,
    /// so the frontier starts empty and the first step reports exhaustion.
    ///
    /// Callers wanting a bounded search drive [`Exploration::step`]
    /// themselves and stop when their iteration or time budget runs out.
    pub fn explore(&self, from: NodeId, to: NodeId) -> Result<Exploration<'_, 'g, H, C>, SearchError> {
        let Some(start) = self.graph.node(from) else {
            return Err(SearchError::UnknownNode(from));
        };
        let Some(target) = self.graph.node(to) else {
            return Err(SearchError::UnknownNode(to));
        };
        let mut exploration = Exploration {
            engine: self,
            target: to,
            tracks: Vec::new(),
            open: OpenFrontier::new(),
            closed: HashSet::new(),
        };
        if start.enabled() && target.enabled() {
            exploration.push_track(Track {
                end: from,
                parent: None,
                via: None,
                cost: 0.0,
                arcs: 0,
            });
        }
        Ok(exploration)
    }
}

// ---------------------------------------------------------------------------
// Exploration
// ---------------------------------------------------------------------------

/// Outcome of one exploration step.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The frontier still has candidates; step again.
    Continue,
    /// Target reached: the best path found.
    Found(Path),
    /// Frontier exhausted before the target was reached: no path.
    Exhausted,
}

/// An in-flight search, advanced one frontier pop at a time.
///
/// Produced by [`Astar::explore`]. Each [`step`](Exploration::step) pops the
/// open track with the lowest evaluation score and either finishes the search
/// or expands the track's end node. The borrow of the graph is held for the
/// exploration's lifetime, so the graph cannot change mid-search.
pub struct Exploration<'a, 'g, H, C> {
    engine: &'a Astar<'g, H, C>,
    target: NodeId,
    /// Arena of all tracks created by this search; parent links index here.
    tracks: Vec<Track>,
    open: OpenFrontier,
    closed: HashSet<NodeId>,
}

impl<H: Heuristic, C: CostModel> Exploration<'_, '_, H, C> {
    /// The node this search is heading for.
    #[inline]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Number of nodes finalized so far.
    #[inline]
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Number of tracks waiting in the open frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.open.len()
    }

    /// Pop and process the best open track.
    pub fn step(&mut self) -> Step {
        let Some(idx) = self.open.pop() else {
            return Step::Exhausted;
        };
        let track = self.tracks[idx];
        if track.end == self.target {
            return Step::Found(self.reconstruct(idx));
        }
        // A node's first pop finalized it; later tracks ending there are
        // stale and skipped without expansion.
        if !self.closed.insert(track.end) {
            return Step::Continue;
        }
        let graph = self.engine.graph;
        for arc in graph.outgoing_arcs(track.end) {
            if !arc.enabled() {
                continue;
            }
            let next = arc.end();
            if self.closed.contains(&next) {
                continue;
            }
            // Disabled nodes are absent. Checked live on every expansion,
            // never cached across searches.
            if !graph.node(next).is_some_and(|n| n.enabled()) {
                continue;
            }
            self.push_track(Track {
                end: next,
                parent: Some(idx),
                via: Some(arc.id()),
                cost: track.cost + self.engine.cost_model.cost(arc),
                arcs: track.arcs + 1,
            });
        }
        Step::Continue
    }

    fn evaluate(&self, track: &Track) -> f64 {
        let b = self.engine.balance;
        b * track.cost
            + (1.0 - b)
                * self
                    .engine
                    .heuristic
                    .estimate(self.engine.graph, track.end, self.target)
    }

    fn push_track(&mut self, track: Track) {
        let eval = self.evaluate(&track);
        self.tracks.push(track);
        self.open.push(self.tracks.len() - 1, eval);
    }

    /// Walk the parent chain from the terminal track back to the origin and
    /// reverse it into an ordered path.
    fn reconstruct(&self, terminal: usize) -> Path {
        let end = &self.tracks[terminal];
        let mut arcs = Vec::with_capacity(end.arcs as usize);
        let mut nodes = Vec::with_capacity(end.arcs as usize + 1);
        let mut cur = Some(terminal);
        while let Some(i) = cur {
            let t = &self.tracks[i];
            nodes.push(t.end);
            if let Some(via) = t.via {
                arcs.push(via);
            }
            cur = t.parent;
        }
        arcs.reverse();
        nodes.reverse();
        Path {
            arcs,
            nodes,
            cost: end.cost,
        }
    }
}
