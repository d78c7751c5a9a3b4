//! Path reconstruction and costing, shared by Dijkstra and A*.

use std::collections::HashMap;

use crate::graph::{Graph, VertexId};

/// Walk a predecessor map back from `target` to `source` and reverse.
///
/// Returns the vertex sequence source-first, or an empty vector when the
/// predecessor map does not connect `target` to `source`. A target equal
/// to the source yields `[source]`.
pub fn reconstruct_path(
    predecessors: &HashMap<VertexId, VertexId>,
    source: VertexId,
    target: VertexId,
) -> Vec<VertexId> {
    if target == source {
        return vec![source];
    }
    if !predecessors.contains_key(&target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Total weight of a path, following open tunnels only.
///
/// `None` when some consecutive pair has no open connecting tunnel. Paths
/// shorter than two vertices cost 0.
pub fn path_cost(graph: &Graph, path: &[VertexId]) -> Option<f32> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        let edge = graph.edge_between(pair[0], pair[1])?;
        if edge.is_blocked() {
            return None;
        }
        total += edge.weight();
    }
    Some(total)
}
