//! Search-frontier bookkeeping: [`Track`] chains and the open frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use cartograph_graph::{ArcId, NodeId};

/// One candidate partial path: the node it ends at plus a back-link to the
/// track it was reached from.
///
/// Tracks live in a per-search arena ([`Vec`]); the chain from any track back
/// to the origin is append-only and never mutated after creation, which makes
/// path reconstruction a simple parent walk.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Track {
    /// Node this partial path currently ends at.
    pub(crate) end: NodeId,
    /// Arena index of the predecessor track; `None` for the origin.
    pub(crate) parent: Option<usize>,
    /// Arc taken from the predecessor; `None` only for the origin.
    pub(crate) via: Option<ArcId>,
    /// Real accumulated cost from the origin.
    pub(crate) cost: f64,
    /// Number of arcs traversed from the origin.
    pub(crate) arcs: u32,
}

/// Frontier entry: a track index keyed by its evaluation score.
struct Entry {
    eval: f64,
    /// Insertion sequence. Equal evaluations pop in insertion order, which
    /// keeps results deterministic for a fixed input.
    seq: u64,
    track: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.eval == other.eval && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the lowest evaluation first,
        // FIFO on ties.
        other
            .eval
            .total_cmp(&self.eval)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-frontier of track indices keyed by evaluation score.
#[derive(Default)]
pub(crate) struct OpenFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl OpenFrontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, track: usize, eval: f64) {
        self.heap.push(Entry {
            eval,
            seq: self.seq,
            track,
        });
        self.seq += 1;
    }

    /// Pop the track with the lowest evaluation score.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.track)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_evaluation_first() {
        let mut open = OpenFrontier::new();
        open.push(0, 3.0);
        open.push(1, 1.0);
        open.push(2, 2.0);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut open = OpenFrontier::new();
        open.push(10, 1.0);
        open.push(11, 1.0);
        open.push(12, 0.5);
        open.push(13, 1.0);
        assert_eq!(open.pop(), Some(12));
        assert_eq!(open.pop(), Some(10));
        assert_eq!(open.pop(), Some(11));
        assert_eq!(open.pop(), Some(13));
    }

    #[test]
    fn len_tracks_pending_entries() {
        let mut open = OpenFrontier::new();
        assert_eq!(open.len(), 0);
        open.push(0, 1.0);
        open.push(1, 2.0);
        assert_eq!(open.len(), 2);
        open.pop();
        assert_eq!(open.len(), 1);
    }
}
