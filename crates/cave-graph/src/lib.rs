//! Weighted cave-system graph and pathfinding for the treasure-hunt game.
//!
//! This crate is the algorithmic core behind movement validation, card
//! area reveals, optimal-route hints, and monster chase behavior. The GUI
//! shell (windowing, sprites, dialogs, combat arithmetic) lives elsewhere
//! and consumes this crate only through the query surface re-exported
//! below.
//!
//! # Architecture
//!
//! - **error**: `GraphError` / `GraphResult`, thiserror-derived
//! - **graph**: chambers, tunnels, adjacency, and in-place mutation
//!   (block / unblock / reweight, collapses, spawns)
//! - **map**: serde map definitions and the 7-chamber reference map
//! - **traversal**: BFS reachability, Dijkstra, and A* over a graph
//!   snapshot
//! - **query**: the façade collaborators call (connectivity checks,
//!   reachability partition, critical edges, nearest target)
//!
//! # Model
//!
//! Single-threaded and synchronous: one traversal runs to completion
//! before the next mutation or query, so every query observes a consistent
//! snapshot. Algorithms never mutate the graph; game actions mutate it
//! strictly between queries.
//!
//! # Example
//!
//! ```
//! use cave_graph::{best_path_to, reference_map, shortest_path};
//!
//! let graph = reference_map().build()?;
//!
//! let tree = shortest_path(&graph, 0, Some(6))?;
//! assert_eq!(tree.distance(6), Some(9.0));
//! assert_eq!(tree.path_to(6), vec![0, 2, 4, 6]);
//!
//! let route = best_path_to(&graph, 0, 6)?;
//! assert_eq!(route.cost, 9.0);
//! # Ok::<(), cave_graph::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod map;
pub mod query;
pub mod traversal;

pub use error::{GraphError, GraphResult};
pub use graph::{
    Biome, ChamberState, Edge, EdgeId, Graph, Hazard, Occupant, Position, TunnelKind, Vertex,
    VertexId,
};
pub use map::{reference_map, ChamberDef, MapDefinition, TunnelDef};
pub use query::{
    all_simple_paths, critical_edges, is_path_blocked, nearest_of, reachable_vertices,
    unreachable_vertices,
};
pub use traversal::{
    best_path_to, path_cost, reachable_within, reconstruct_path, shortest_path, PathResult,
    ShortestPaths,
};
