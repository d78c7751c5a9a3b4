//! High-level exploration queries.
//!
//! The façade that card effects, monster AI, and the navigation-hint UI
//! call into. Every function takes the [`Graph`] explicitly; there is no
//! ambient game-state coordinator.

use std::collections::HashSet;

use crate::error::GraphResult;
use crate::graph::{Graph, VertexId};
use crate::traversal::{reachable_within, shortest_path};

/// True when no open path connects `a` to `b`.
pub fn is_path_blocked(graph: &Graph, a: VertexId, b: VertexId) -> GraphResult<bool> {
    let tree = shortest_path(graph, a, Some(b))?;
    Ok(tree.distance(b).is_none())
}

/// All chambers reachable from `source` through open tunnels.
pub fn reachable_vertices(graph: &Graph, source: VertexId) -> GraphResult<HashSet<VertexId>> {
    Ok(reachable_within(graph, source, None)?.into_keys().collect())
}

/// All chambers NOT reachable from `source`.
pub fn unreachable_vertices(graph: &Graph, source: VertexId) -> GraphResult<HashSet<VertexId>> {
    let reachable = reachable_vertices(graph, source)?;
    Ok(graph.vertex_ids().filter(|id| !reachable.contains(id)).collect())
}

/// The closest of several target chambers, as `(target, cost)`.
///
/// One Dijkstra pass from `source`; `None` when no target is reachable.
/// Targets absent from the graph fail with
/// [`crate::GraphError::UnknownVertex`].
pub fn nearest_of(
    graph: &Graph,
    source: VertexId,
    targets: &[VertexId],
) -> GraphResult<Option<(VertexId, f32)>> {
    for &t in targets {
        graph.vertex(t)?;
    }
    let tree = shortest_path(graph, source, None)?;
    let mut best: Option<(VertexId, f32)> = None;
    for &t in targets {
        if let Some(cost) = tree.distance(t) {
            if best.map_or(true, |(_, c)| cost < c) {
                best = Some((t, cost));
            }
        }
    }
    Ok(best)
}

/// Edges whose loss alone would disconnect `a` from `b`.
///
/// Probes by temporarily blocking each open edge and re-running the
/// connectivity check; the graph is restored before returning. Returns
/// endpoint pairs. Empty when `a` and `b` are already disconnected.
pub fn critical_edges(
    graph: &mut Graph,
    a: VertexId,
    b: VertexId,
) -> GraphResult<Vec<(VertexId, VertexId)>> {
    if is_path_blocked(graph, a, b)? {
        return Ok(Vec::new());
    }

    let open_edges: Vec<(VertexId, VertexId)> = graph
        .edges()
        .filter(|e| !e.is_blocked())
        .map(|e| e.endpoints())
        .collect();

    let mut critical = Vec::new();
    for (u, v) in open_edges {
        graph.set_blocked(u, v, true)?;
        if is_path_blocked(graph, a, b)? {
            critical.push((u, v));
        }
        graph.set_blocked(u, v, false)?;
    }
    Ok(critical)
}

/// Every simple path from `a` to `b` with at most `max_len` vertices.
///
/// Exhaustive enumeration, only viable on maps of this game's scale.
pub fn all_simple_paths(
    graph: &Graph,
    a: VertexId,
    b: VertexId,
    max_len: usize,
) -> GraphResult<Vec<Vec<VertexId>>> {
    graph.vertex(a)?;
    graph.vertex(b)?;

    let mut paths = Vec::new();
    let mut current = vec![a];
    let mut visited = HashSet::from([a]);
    extend_paths(graph, b, max_len, &mut current, &mut visited, &mut paths)?;
    Ok(paths)
}

fn extend_paths(
    graph: &Graph,
    goal: VertexId,
    max_len: usize,
    current: &mut Vec<VertexId>,
    visited: &mut HashSet<VertexId>,
    paths: &mut Vec<Vec<VertexId>>,
) -> GraphResult<()> {
    let last = *current.last().unwrap_or(&goal);
    if last == goal {
        paths.push(current.clone());
        return Ok(());
    }
    if current.len() >= max_len {
        return Ok(());
    }

    let neighbors: Vec<VertexId> = graph.neighbors(last)?.map(|(n, _)| n).collect();
    for neighbor in neighbors {
        if visited.insert(neighbor) {
            current.push(neighbor);
            extend_paths(graph, goal, max_len, current, visited, paths)?;
            current.pop();
            visited.remove(&neighbor);
        }
    }
    Ok(())
}
