//! Breadth-first reachability.
//!
//! Level-order exploration from a source chamber, counting edge hops and
//! ignoring tunnel weights. Drives the area-reveal and area-of-effect
//! queries, where only topological distance matters.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::GraphResult;
use crate::graph::{Graph, VertexId};

/// Hop distance from a source to every reachable chamber.
///
/// The source is always present at hop 0. A vertex absent from the result
/// is unreachable through open tunnels; absence is the disconnection
/// signal, not an error. With `max_hops = Some(k)` the result contains
/// exactly the vertices whose minimum hop count is <= k: a vertex at the
/// cap is recorded but its neighbors are not enqueued.
///
/// A vertex is enqueued at most once, the first time it is reached; since
/// the queue explores hops in non-decreasing order, each recorded hop
/// count is minimal.
///
/// Fails with [`crate::GraphError::UnknownVertex`] if `source` is not in
/// the graph (the same policy all traversals in this crate follow).
pub fn reachable_within(
    graph: &Graph,
    source: VertexId,
    max_hops: Option<u32>,
) -> GraphResult<HashMap<VertexId, u32>> {
    graph.vertex(source)?;

    let mut hops = HashMap::from([(source, 0)]);
    let mut visited: HashSet<VertexId> = HashSet::from([source]);
    let mut queue = VecDeque::from([(source, 0u32)]);

    while let Some((current, dist)) = queue.pop_front() {
        if max_hops.is_some_and(|cap| dist >= cap) {
            continue;
        }
        for (neighbor, _edge) in graph.neighbors(current)? {
            if visited.insert(neighbor) {
                hops.insert(neighbor, dist + 1);
                queue.push_back((neighbor, dist + 1));
            }
        }
    }

    tracing::debug!(source, reached = hops.len(), "bfs complete");
    Ok(hops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Biome, Position, TunnelKind};
    use crate::GraphError;

    /// 0 - 1 - 2 - 3 chain plus a 0 - 3 shortcut.
    fn chain_with_shortcut() -> Graph {
        let mut g = Graph::new();
        for id in 0..4 {
            g.add_vertex(id, format!("c{id}"), Position::new(id as f32, 0.0), Biome::Cave)
                .unwrap();
        }
        g.add_edge(0, 1, 1.0, TunnelKind::Normal).unwrap();
        g.add_edge(1, 2, 1.0, TunnelKind::Normal).unwrap();
        g.add_edge(2, 3, 1.0, TunnelKind::Normal).unwrap();
        g.add_edge(0, 3, 1.0, TunnelKind::Normal).unwrap();
        g
    }

    #[test]
    fn hop_counts_are_minimal() {
        let g = chain_with_shortcut();
        let hops = reachable_within(&g, 0, None).unwrap();
        assert_eq!(hops[&0], 0);
        assert_eq!(hops[&1], 1);
        assert_eq!(hops[&2], 2);
        // The shortcut beats the 3-hop chain.
        assert_eq!(hops[&3], 1);
    }

    #[test]
    fn depth_cap_bounds_the_radius() {
        let g = chain_with_shortcut();
        let hops = reachable_within(&g, 0, Some(1)).unwrap();
        assert_eq!(hops.len(), 3);
        assert_eq!(hops[&0], 0);
        assert_eq!(hops[&1], 1);
        assert_eq!(hops[&3], 1);
        assert!(!hops.contains_key(&2));
    }

    #[test]
    fn zero_cap_returns_only_the_source() {
        let g = chain_with_shortcut();
        let hops = reachable_within(&g, 2, Some(0)).unwrap();
        assert_eq!(hops, HashMap::from([(2, 0)]));
    }

    #[test]
    fn blocked_edges_are_invisible() {
        let mut g = chain_with_shortcut();
        g.block_edge(0, 3).unwrap();
        let hops = reachable_within(&g, 0, None).unwrap();
        assert_eq!(hops[&3], 3);

        g.block_edge(2, 3).unwrap();
        let hops = reachable_within(&g, 0, None).unwrap();
        assert!(!hops.contains_key(&3), "3 is cut off, so it must be absent");
    }

    #[test]
    fn cycles_terminate() {
        let mut g = Graph::new();
        for id in 0..3 {
            g.add_vertex(id, format!("c{id}"), Position::new(id as f32, 0.0), Biome::Cave)
                .unwrap();
        }
        g.add_edge(0, 1, 1.0, TunnelKind::Normal).unwrap();
        g.add_edge(1, 2, 1.0, TunnelKind::Normal).unwrap();
        g.add_edge(2, 0, 1.0, TunnelKind::Normal).unwrap();

        let hops = reachable_within(&g, 0, None).unwrap();
        assert_eq!(hops.len(), 3);
        assert_eq!(hops[&1], 1);
        assert_eq!(hops[&2], 1);
    }

    #[test]
    fn unknown_source_errors() {
        let g = chain_with_shortcut();
        assert_eq!(
            reachable_within(&g, 77, None).unwrap_err(),
            GraphError::UnknownVertex(77)
        );
    }
}
