//! Weighted shortest paths (Dijkstra).
//!
//! Priority-first relaxation with lazy deletion: relaxing a vertex pushes a
//! fresh heap entry instead of updating in place, and entries for already
//! settled vertices are discarded on pop. This is the intended design, not
//! a workaround; it is simpler than a decrease-key structure and equally
//! correct. Requires non-negative weights, which [`crate::Graph`]
//! guarantees.

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::GraphResult;
use crate::graph::{Graph, VertexId};
use crate::traversal::frontier::Candidate;
use crate::traversal::path::reconstruct_path;

/// Shortest-path tree rooted at a source chamber.
///
/// A vertex absent from `distances` was not reached; there is no stored
/// infinity. `predecessors` covers every non-source vertex that was
/// improved at least once, which is sufficient to reconstruct any shortest
/// path that exists.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub distances: HashMap<VertexId, f32>,
    pub predecessors: HashMap<VertexId, VertexId>,
}

impl ShortestPaths {
    /// Minimum cost from the source to `target`, if it was reached.
    pub fn distance(&self, target: VertexId) -> Option<f32> {
        self.distances.get(&target).copied()
    }

    /// Shortest path to `target`, source-first. Empty when unreached.
    pub fn path_to(&self, target: VertexId) -> Vec<VertexId> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

/// Compute minimum cumulative tunnel cost from `source`.
///
/// With `target = Some(t)` the search stops as soon as `t` is settled,
/// which is safe because a settled vertex can never be improved under
/// non-negative weights; distances to vertices settled earlier are still
/// exact. With `target = None` the whole reachable component is settled.
///
/// When two candidates tie, whichever relaxation happened first wins;
/// among equal-cost paths the one returned is unspecified, only its cost
/// is guaranteed.
///
/// Fails with [`crate::GraphError::UnknownVertex`] if `source` or the
/// target is not in the graph.
pub fn shortest_path(
    graph: &Graph,
    source: VertexId,
    target: Option<VertexId>,
) -> GraphResult<ShortestPaths> {
    graph.vertex(source)?;
    if let Some(t) = target {
        graph.vertex(t)?;
    }

    let mut distances = HashMap::from([(source, 0.0f32)]);
    let mut predecessors = HashMap::new();
    let mut settled: HashSet<VertexId> = HashSet::new();
    let mut frontier = BinaryHeap::from([Candidate::new(0.0, source)]);

    while let Some(Candidate { priority, vertex }) = frontier.pop() {
        // Stale entry from an earlier, worse relaxation.
        if !settled.insert(vertex) {
            continue;
        }
        if target == Some(vertex) {
            break;
        }

        for (neighbor, edge) in graph.neighbors(vertex)? {
            let candidate = priority + edge.weight();
            let improved = distances
                .get(&neighbor)
                .map_or(true, |&current| candidate < current);
            if improved {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, vertex);
                frontier.push(Candidate::new(candidate, neighbor));
            }
        }
    }

    tracing::debug!(source, settled = settled.len(), "dijkstra complete");
    Ok(ShortestPaths { source, distances, predecessors })
}
