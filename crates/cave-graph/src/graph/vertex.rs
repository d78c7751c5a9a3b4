//! Chamber (vertex) types: identity, coordinates, and gameplay metadata.
//!
//! Traversal algorithms treat a vertex as an identity plus coordinates.
//! Everything else here (biome, hazards, chamber state) is gameplay
//! metadata that the algorithms never read.

use serde::{Deserialize, Serialize};

/// Vertex id type. Small, non-negative, stable for the graph's lifetime.
pub type VertexId = u32;

/// 2D coordinates of a chamber, in map units.
///
/// Used only by the A* heuristic and by rendering. Map authors must keep
/// every edge weight >= the Euclidean span of its endpoints, or the
/// straight-line heuristic stops being admissible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance to another position.
    pub fn distance_to(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Biome of a chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biome {
    #[default]
    Cave,
    UndergroundLake,
    CrystalCavern,
    LavaChamber,
    IceTunnel,
    MushroomGrove,
    AncientRuins,
}

/// Environmental hazard present in a chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    ToxicGas,
    UnstableFloor,
    Darkness,
    ExtremeHeat,
    ExtremeCold,
    Radiation,
}

/// A monster occupying a chamber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub kind: String,
    pub level: u8,
}

/// Mutable gameplay state of a chamber. Opaque to all traversals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChamberState {
    pub explored: bool,
    pub has_chest: bool,
    pub occupant: Option<Occupant>,
}

/// A chamber in the cave system.
///
/// Identity, name, and position are fixed at construction; chambers do not
/// move. Hazards and chamber state may change during play.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    name: String,
    position: Position,
    pub biome: Biome,
    pub hazards: Vec<Hazard>,
    pub state: ChamberState,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, name: String, position: Position, biome: Biome) -> Self {
        Self {
            id,
            name,
            position,
            biome,
            hazards: Vec::new(),
            state: ChamberState::default(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Add a hazard, ignoring duplicates.
    pub fn add_hazard(&mut self, hazard: Hazard) {
        if !self.hazards.contains(&hazard) {
            self.hazards.push(hazard);
        }
    }

    pub fn remove_hazard(&mut self, hazard: Hazard) {
        self.hazards.retain(|h| *h != hazard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn hazards_do_not_duplicate() {
        let mut v = Vertex::new(0, "Entrada".into(), Position::new(0.0, 0.0), Biome::Cave);
        v.add_hazard(Hazard::Darkness);
        v.add_hazard(Hazard::Darkness);
        assert_eq!(v.hazards.len(), 1);

        v.remove_hazard(Hazard::Darkness);
        assert!(v.hazards.is_empty());
    }

    #[test]
    fn fresh_chamber_state() {
        let v = Vertex::new(3, "Lago".into(), Position::new(1.0, 2.0), Biome::UndergroundLake);
        assert!(!v.state.explored);
        assert!(!v.state.has_chest);
        assert!(v.state.occupant.is_none());
    }
}
