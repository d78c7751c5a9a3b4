//! Tunnel (edge) types: undirected weighted connections with dynamic state.
//!
//! An edge is never removed once built; blocking toggles its availability
//! reversibly, and reweighting changes its traversal cost. The stability
//! model (damage, fissures, reinforcement) feeds a derived collapse chance
//! used by the random-collapse mutation effect.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// Index of an edge inside its owning graph.
pub type EdgeId = usize;

/// Kind of tunnel connecting two chambers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TunnelKind {
    #[default]
    Normal,
    Unstable,
    Secret,
    Collapsed,
    Reinforced,
    Narrow,
    Underwater,
}

impl TunnelKind {
    fn base_collapse_chance(self) -> f32 {
        match self {
            TunnelKind::Unstable => 0.15,
            TunnelKind::Collapsed => 1.0,
            TunnelKind::Reinforced => 0.01,
            _ => 0.0,
        }
    }
}

/// An undirected tunnel between two distinct chambers.
///
/// Weight and blocked state are mutated through [`crate::Graph`] so that
/// the (u, v) lookup and validation live in one place; the stability model
/// is mutated here directly.
#[derive(Debug, Clone)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
    weight: f32,
    blocked: bool,
    pub kind: TunnelKind,
    stability: u8,
    reinforced: bool,
    has_fissures: bool,
}

impl Edge {
    pub(crate) fn new(u: VertexId, v: VertexId, weight: f32, kind: TunnelKind) -> Self {
        Self {
            u,
            v,
            weight,
            blocked: false,
            kind,
            stability: 100,
            reinforced: false,
            has_fissures: false,
        }
    }

    /// The two endpoints, in construction order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    /// Given one endpoint, the other one. `None` if `id` is not an endpoint.
    pub fn other_endpoint(&self, id: VertexId) -> Option<VertexId> {
        if id == self.u {
            Some(self.v)
        } else if id == self.v {
            Some(self.u)
        } else {
            None
        }
    }

    /// True if this edge connects exactly the given pair, in either order.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// Movement cost to traverse this tunnel. Always >= 0.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f32) {
        // Clamps negatives and NaN to 0.
        self.weight = weight.max(0.0);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub(crate) fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Structural integrity, 0..=100.
    pub fn stability(&self) -> u8 {
        self.stability
    }

    /// Probability that this tunnel collapses when a collapse roll is made.
    pub fn collapse_chance(&self) -> f32 {
        let stability_factor = f32::from(100 - self.stability) / 100.0;
        let mut chance = (self.kind.base_collapse_chance() + stability_factor * 0.3).min(1.0);
        if self.has_fissures {
            chance += 0.1;
        }
        if self.reinforced {
            chance *= 0.3;
        }
        chance.min(1.0)
    }

    /// Reduce stability, e.g. from explosions or earthquakes.
    pub fn damage_stability(&mut self, amount: u8) {
        self.stability = self.stability.saturating_sub(amount);
    }

    /// Reinforce the tunnel, raising stability and damping collapse rolls.
    pub fn reinforce(&mut self) {
        self.reinforced = true;
        self.stability = self.stability.saturating_add(30).min(100);
    }

    /// Crack the tunnel, raising its collapse chance.
    pub fn add_fissures(&mut self) {
        self.has_fissures = true;
    }

    /// Roll against the collapse chance. On collapse the edge blocks itself
    /// and becomes a [`TunnelKind::Collapsed`] tunnel; returns whether it
    /// collapsed.
    pub fn attempt_collapse<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if rng.gen::<f32>() < self.collapse_chance() {
            self.blocked = true;
            self.kind = TunnelKind::Collapsed;
            true
        } else {
            false
        }
    }
}
