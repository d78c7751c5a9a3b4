//! Min-heap entry shared by Dijkstra and A*.
//!
//! `std::collections::BinaryHeap` is a max-heap, so ordering is reversed
//! here. Relaxation pushes a fresh entry instead of updating in place;
//! stale entries are skipped when popped (lazy deletion). Ties carry no
//! secondary ordering: whichever relaxation happened first wins.

use std::cmp::Ordering;

use crate::graph::VertexId;

/// A `(priority, vertex)` candidate on the search frontier.
///
/// For Dijkstra the priority is the tentative distance g; for A* it is
/// g + h.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub priority: f32,
    pub vertex: VertexId,
}

impl Candidate {
    pub(crate) fn new(priority: f32, vertex: VertexId) -> Self {
        Self { priority, vertex }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority).is_eq()
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the lowest priority pops first.
        other.priority.total_cmp(&self.priority)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
