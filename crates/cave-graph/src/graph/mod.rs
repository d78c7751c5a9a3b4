//! The cave system as a weighted undirected graph.
//!
//! [`Graph`] is the single source of truth for chambers and tunnels;
//! collaborators query it, they never cache authoritative state. Edges are
//! created once at construction and afterwards only toggled (blocked /
//! unblocked) or reweighted — never added or removed mid-session.
//!
//! Traversal algorithms observe connectivity exclusively through
//! [`Graph::neighbors`], which excludes blocked edges and reflects live
//! state on every call.

mod edge;
mod vertex;

pub use edge::{Edge, EdgeId, TunnelKind};
pub use vertex::{Biome, ChamberState, Hazard, Occupant, Position, Vertex, VertexId};

use std::collections::{BTreeMap, HashMap};

use rand::Rng;

use crate::error::{GraphError, GraphResult};

/// Chambers where players start; wandering monsters never spawn there.
pub const PLAYER_START_CHAMBERS: [VertexId; 2] = [0, 1];

/// A weighted undirected graph of chambers connected by tunnels.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: BTreeMap<VertexId, Vertex>,
    edges: Vec<Edge>,
    adjacency: HashMap<VertexId, Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chamber with a caller-chosen id.
    pub fn add_vertex(
        &mut self,
        id: VertexId,
        name: impl Into<String>,
        position: Position,
        biome: Biome,
    ) -> GraphResult<()> {
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.vertices.insert(id, Vertex::new(id, name.into(), position, biome));
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Add an undirected tunnel between two existing, distinct chambers.
    ///
    /// The edge is usable from both endpoints. Construction rejects
    /// negative or non-finite weights; post-construction reweighting goes
    /// through [`Graph::set_edge_weight`], which clamps instead.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: f32,
        kind: TunnelKind,
    ) -> GraphResult<EdgeId> {
        self.require_vertex(u)?;
        self.require_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { u, v, weight });
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(u, v, weight, kind));
        self.adjacency.entry(u).or_default().push(id);
        self.adjacency.entry(v).or_default().push(id);
        Ok(id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> GraphResult<&Vertex> {
        self.vertices.get(&id).ok_or(GraphError::UnknownVertex(id))
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex> {
        self.vertices.get_mut(&id).ok_or(GraphError::UnknownVertex(id))
    }

    /// Chamber ids in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Open neighbors of `v` as `(neighbor id, edge)` pairs.
    ///
    /// Blocked edges are excluded, exactly as if they did not exist. The
    /// iterator reads live edge state, so it is restartable: call it again
    /// after a mutation and the result reflects the mutation.
    pub fn neighbors(
        &self,
        v: VertexId,
    ) -> GraphResult<impl Iterator<Item = (VertexId, &Edge)> + '_> {
        let list = self.adjacency.get(&v).ok_or(GraphError::UnknownVertex(v))?;
        Ok(list
            .iter()
            .map(|&eid| &self.edges[eid])
            .filter(|edge| !edge.is_blocked())
            .filter_map(move |edge| edge.other_endpoint(v).map(|n| (n, edge))))
    }

    /// The edge connecting `u` and `v`, blocked or not, if one exists.
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<&Edge> {
        self.adjacency
            .get(&u)?
            .iter()
            .map(|&eid| &self.edges[eid])
            .find(|edge| edge.connects(u, v))
    }

    /// Mutable access to the edge connecting `u` and `v`, for stability
    /// effects (damage, fissures, reinforcement).
    pub fn edge_between_mut(&mut self, u: VertexId, v: VertexId) -> GraphResult<&mut Edge> {
        let id = self.find_edge_id(u, v)?;
        Ok(&mut self.edges[id])
    }

    /// Block or unblock the tunnel between `u` and `v`.
    ///
    /// The change is visible to the next `neighbors` call. The edge record
    /// is kept, so blocking is reversible.
    pub fn set_blocked(&mut self, u: VertexId, v: VertexId, blocked: bool) -> GraphResult<()> {
        let id = self.find_edge_id(u, v)?;
        self.edges[id].set_blocked(blocked);
        Ok(())
    }

    /// Block the tunnel between `u` and `v` (e.g. a collapse card effect).
    pub fn block_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.set_blocked(u, v, true)
    }

    /// Reopen a previously blocked tunnel.
    pub fn unblock_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.set_blocked(u, v, false)
    }

    /// Reweight the tunnel between `u` and `v`.
    ///
    /// Negative (and NaN) weights clamp to 0; only a missing edge is an
    /// error. Effects that stack discounts can therefore drive a tunnel
    /// free but never negative.
    pub fn set_edge_weight(&mut self, u: VertexId, v: VertexId, weight: f32) -> GraphResult<()> {
        let id = self.find_edge_id(u, v)?;
        self.edges[id].set_weight(weight);
        Ok(())
    }

    /// Roll every open unstable tunnel against `probability` and block the
    /// ones that collapse. Returns the endpoint pairs that collapsed.
    pub fn trigger_random_collapses<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        probability: f32,
    ) -> Vec<(VertexId, VertexId)> {
        let mut collapsed = Vec::new();
        for edge in &mut self.edges {
            if !edge.is_blocked()
                && edge.kind == TunnelKind::Unstable
                && rng.gen::<f32>() < probability
            {
                edge.set_blocked(true);
                collapsed.push(edge.endpoints());
            }
        }
        if !collapsed.is_empty() {
            tracing::debug!(count = collapsed.len(), "unstable tunnels collapsed");
        }
        collapsed
    }

    /// Spawn wandering monsters in unexplored, unoccupied chambers.
    ///
    /// Player start chambers are always skipped. Returns the ids of the
    /// chambers that gained an occupant.
    pub fn spawn_wandering_monsters<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        probability: f32,
        kinds: &[&str],
    ) -> Vec<VertexId> {
        if kinds.is_empty() {
            return Vec::new();
        }

        let mut spawned = Vec::new();
        for vertex in self.vertices.values_mut() {
            if PLAYER_START_CHAMBERS.contains(&vertex.id()) {
                continue;
            }
            if vertex.state.occupant.is_some() || vertex.state.explored {
                continue;
            }
            if rng.gen::<f32>() < probability {
                let kind = kinds[rng.gen_range(0..kinds.len())];
                vertex.state.occupant = Some(Occupant { kind: kind.to_owned(), level: 1 });
                spawned.push(vertex.id());
            }
        }
        spawned
    }

    fn require_vertex(&self, id: VertexId) -> GraphResult<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(id))
        }
    }

    fn find_edge_id(&self, u: VertexId, v: VertexId) -> GraphResult<EdgeId> {
        self.require_vertex(u)?;
        self.require_vertex(v)?;
        self.adjacency
            .get(&u)
            .and_then(|list| list.iter().copied().find(|&eid| self.edges[eid].connects(u, v)))
            .ok_or(GraphError::EdgeNotFound(u, v))
    }
}
