//! Heuristic-guided shortest path (A*).
//!
//! Same relaxation loop as Dijkstra, but the frontier is ordered by
//! g + h where h is the straight-line distance between chamber positions.
//! On the reference map every tunnel weight dominates its Euclidean span,
//! making the heuristic both admissible and consistent; optimality holds
//! under that map-authoring invariant, which is documented in
//! [`crate::map`] rather than checked at runtime.

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::GraphResult;
use crate::graph::{Graph, VertexId};
use crate::traversal::frontier::Candidate;
use crate::traversal::path::reconstruct_path;

/// Outcome of an A* search toward a single goal.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Vertex sequence, source first and goal last. Empty when no path.
    pub path: Vec<VertexId>,
    /// Total real cost g(goal); infinite when no path.
    pub cost: f32,
    /// Number of vertices settled during the search.
    pub expanded: usize,
}

impl PathResult {
    fn found(path: Vec<VertexId>, cost: f32, expanded: usize) -> Self {
        Self { path, cost, expanded }
    }

    fn no_path(expanded: usize) -> Self {
        Self { path: Vec::new(), cost: f32::INFINITY, expanded }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Find the cheapest path from `source` to `goal`.
///
/// Terminates the moment the goal is popped from the frontier, which is
/// when no better path can remain (given an admissible heuristic). An
/// exhausted frontier means no open path exists, reported as an empty
/// path with infinite cost.
///
/// Fails with [`crate::GraphError::UnknownVertex`] if either endpoint is
/// not in the graph.
pub fn best_path_to(graph: &Graph, source: VertexId, goal: VertexId) -> GraphResult<PathResult> {
    let goal_pos = graph.vertex(goal)?.position();
    let h_source = graph.vertex(source)?.position().distance_to(goal_pos);

    if source == goal {
        return Ok(PathResult::found(vec![source], 0.0, 0));
    }

    let mut g_scores = HashMap::from([(source, 0.0f32)]);
    let mut came_from = HashMap::new();
    let mut settled: HashSet<VertexId> = HashSet::new();
    let mut frontier = BinaryHeap::from([Candidate::new(h_source, source)]);

    while let Some(Candidate { vertex, .. }) = frontier.pop() {
        if !settled.insert(vertex) {
            continue;
        }
        if vertex == goal {
            let cost = *g_scores.get(&goal).unwrap_or(&f32::INFINITY);
            let path = reconstruct_path(&came_from, source, goal);
            tracing::debug!(source, goal, cost, expanded = settled.len(), "a* found path");
            return Ok(PathResult::found(path, cost, settled.len()));
        }

        let current_g = *g_scores.get(&vertex).unwrap_or(&f32::INFINITY);
        for (neighbor, edge) in graph.neighbors(vertex)? {
            let tentative_g = current_g + edge.weight();
            let improved = g_scores
                .get(&neighbor)
                .map_or(true, |&current| tentative_g < current);
            if improved {
                g_scores.insert(neighbor, tentative_g);
                came_from.insert(neighbor, vertex);
                let h = graph.vertex(neighbor)?.position().distance_to(goal_pos);
                frontier.push(Candidate::new(tentative_g + h, neighbor));
            }
        }
    }

    tracing::debug!(source, goal, expanded = settled.len(), "a* found no path");
    Ok(PathResult::no_path(settled.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Biome, Position, TunnelKind};
    use crate::traversal::dijkstra::shortest_path;
    use crate::GraphError;

    /// Diamond with admissible geometry: weights dominate Euclidean spans.
    fn diamond() -> Graph {
        let mut g = Graph::new();
        g.add_vertex(0, "Start", Position::new(0.0, 0.0), Biome::Cave).unwrap();
        g.add_vertex(1, "A", Position::new(1.0, 0.0), Biome::Cave).unwrap();
        g.add_vertex(2, "B", Position::new(0.0, 1.0), Biome::Cave).unwrap();
        g.add_vertex(3, "End", Position::new(1.0, 1.0), Biome::Cave).unwrap();
        g.add_edge(0, 1, 1.0, TunnelKind::Normal).unwrap();
        g.add_edge(0, 2, 5.0, TunnelKind::Normal).unwrap();
        g.add_edge(1, 3, 2.0, TunnelKind::Normal).unwrap();
        g.add_edge(2, 3, 1.0, TunnelKind::Normal).unwrap();
        g
    }

    #[test]
    fn finds_the_optimal_path() {
        let g = diamond();
        let result = best_path_to(&g, 0, 3).unwrap();
        assert!(result.is_found());
        assert_eq!(result.path, vec![0, 1, 3]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn cost_matches_dijkstra_for_every_goal() {
        let g = diamond();
        for goal in g.vertex_ids() {
            let astar = best_path_to(&g, 0, goal).unwrap();
            let dijkstra = shortest_path(&g, 0, Some(goal)).unwrap();
            assert_eq!(Some(astar.cost), dijkstra.distance(goal), "goal {goal}");
        }
    }

    #[test]
    fn source_equals_goal() {
        let g = diamond();
        let result = best_path_to(&g, 2, 2).unwrap();
        assert_eq!(result.path, vec![2]);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.expanded, 0);
    }

    #[test]
    fn no_path_reports_empty_and_infinite() {
        let mut g = diamond();
        g.add_vertex(9, "island", Position::new(9.0, 9.0), Biome::Cave).unwrap();
        let result = best_path_to(&g, 0, 9).unwrap();
        assert!(!result.is_found());
        assert!(result.path.is_empty());
        assert!(result.cost.is_infinite());
    }

    #[test]
    fn blocked_edges_reroute_the_search() {
        let mut g = diamond();
        g.block_edge(0, 1).unwrap();
        let result = best_path_to(&g, 0, 3).unwrap();
        assert_eq!(result.path, vec![0, 2, 3]);
        assert_eq!(result.cost, 6.0);
    }

    #[test]
    fn unknown_endpoint_errors() {
        let g = diamond();
        assert_eq!(best_path_to(&g, 42, 3).unwrap_err(), GraphError::UnknownVertex(42));
        assert_eq!(best_path_to(&g, 0, 42).unwrap_err(), GraphError::UnknownVertex(42));
    }
}
