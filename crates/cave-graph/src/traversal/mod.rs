//! Graph traversal algorithms.
//!
//! Pure functions over a [`crate::Graph`] snapshot; none of them mutate
//! the graph, and each call treats the graph as a consistent instantaneous
//! snapshot (the game loop never mutates mid-query).
//!
//! - **BFS** ([`reachable_within`]): hop-count reachability for
//!   area-reveal and area-of-effect queries.
//! - **Dijkstra** ([`shortest_path`]): weighted shortest paths for optimal
//!   route display and nearest-target selection.
//! - **A*** ([`best_path_to`]): single-goal shortest path guided by the
//!   straight-line heuristic, used for monster chase on larger maps.
//!
//! Dijkstra and A* share the lazy-deletion frontier entry and the
//! predecessor-walk in [`path`].

pub mod astar;
pub mod bfs;
pub mod dijkstra;
pub(crate) mod frontier;
pub mod path;

pub use astar::{best_path_to, PathResult};
pub use bfs::reachable_within;
pub use dijkstra::{shortest_path, ShortestPaths};
pub use path::{path_cost, reconstruct_path};
