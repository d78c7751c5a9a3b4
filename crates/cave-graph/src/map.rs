//! Map definitions: plain structured data validated into a [`Graph`].
//!
//! The map loader (outside this crate) hands over a [`MapDefinition`];
//! [`MapDefinition::build`] performs all validation through the regular
//! `Graph` constructors, so a bad definition surfaces as the same
//! [`crate::GraphError`] kinds a programmatic caller would see.
//!
//! Authoring invariant: every tunnel's weight must be at least the
//! Euclidean distance between its endpoint positions, otherwise the A*
//! straight-line heuristic stops being admissible and optimality is
//! forfeited. This is not checked at runtime; the reference map is covered
//! by a test.

use serde::{Deserialize, Serialize};

use crate::error::GraphResult;
use crate::graph::{Biome, Graph, Hazard, Position, TunnelKind, VertexId};

/// One chamber in a map definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChamberDef {
    pub id: VertexId,
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub biome: Biome,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
}

/// One tunnel in a map definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TunnelDef {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: f32,
    #[serde(default)]
    pub kind: TunnelKind,
}

/// A complete map as plain data, ready to be validated into a [`Graph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDefinition {
    pub chambers: Vec<ChamberDef>,
    pub tunnels: Vec<TunnelDef>,
}

impl MapDefinition {
    /// Validate the definition and build the session graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for chamber in &self.chambers {
            graph.add_vertex(
                chamber.id,
                chamber.name.clone(),
                Position::new(chamber.x, chamber.y),
                chamber.biome,
            )?;
            for &hazard in &chamber.hazards {
                graph.vertex_mut(chamber.id)?.add_hazard(hazard);
            }
        }
        for tunnel in &self.tunnels {
            graph.add_edge(tunnel.u, tunnel.v, tunnel.weight, tunnel.kind)?;
        }
        tracing::debug!(
            chambers = graph.vertex_count(),
            tunnels = graph.edge_count(),
            "map built"
        );
        Ok(graph)
    }
}

/// The 7-chamber, 12-tunnel reference map.
///
/// Entrance at chamber 0, treasure chamber at 6. Positions are in map
/// units chosen so that every tunnel weight dominates its Euclidean span.
pub fn reference_map() -> MapDefinition {
    let chamber = |id, name: &str, x, y, biome| ChamberDef {
        id,
        name: name.to_owned(),
        x,
        y,
        biome,
        hazards: Vec::new(),
    };
    let tunnel = |u, v, weight, kind| TunnelDef { u, v, weight, kind };

    let mut chambers = vec![
        chamber(0, "Entrada", 0.0, 2.0, Biome::Cave),
        chamber(1, "Caverna Azul", 2.0, 1.0, Biome::CrystalCavern),
        chamber(2, "Salão dos Ecos", 2.0, 3.0, Biome::Cave),
        chamber(3, "Túnel Escuro", 4.0, 1.0, Biome::Cave),
        chamber(4, "Ponte de Pedra", 4.0, 2.0, Biome::Cave),
        chamber(5, "Lago Subterrâneo", 4.0, 4.0, Biome::UndergroundLake),
        chamber(6, "Câmara do Tesouro", 6.0, 2.0, Biome::AncientRuins),
    ];
    chambers[3].hazards.push(Hazard::Darkness);

    let tunnels = vec![
        tunnel(0, 1, 3.0, TunnelKind::Normal),
        tunnel(0, 2, 4.0, TunnelKind::Normal),
        tunnel(1, 3, 2.0, TunnelKind::Unstable),
        tunnel(1, 4, 5.0, TunnelKind::Normal),
        tunnel(2, 4, 3.0, TunnelKind::Normal),
        tunnel(2, 5, 4.0, TunnelKind::Underwater),
        tunnel(3, 6, 6.0, TunnelKind::Secret),
        tunnel(4, 6, 2.0, TunnelKind::Normal),
        tunnel(5, 6, 5.0, TunnelKind::Unstable),
        tunnel(1, 2, 2.0, TunnelKind::Narrow),
        tunnel(3, 4, 3.0, TunnelKind::Normal),
        tunnel(4, 5, 2.0, TunnelKind::Normal),
    ];

    MapDefinition { chambers, tunnels }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_map_builds() {
        let graph = reference_map().build().unwrap();
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 12);
        assert_eq!(graph.vertex(0).unwrap().name(), "Entrada");
        assert_eq!(graph.vertex(6).unwrap().biome, Biome::AncientRuins);
        assert_eq!(graph.vertex(3).unwrap().hazards, vec![Hazard::Darkness]);
    }

    #[test]
    fn reference_map_weights_dominate_euclidean_spans() {
        let graph = reference_map().build().unwrap();
        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            let span = graph
                .vertex(u)
                .unwrap()
                .position()
                .distance_to(graph.vertex(v).unwrap().position());
            assert!(
                span <= edge.weight(),
                "tunnel {u}-{v} spans {span} but only costs {}",
                edge.weight()
            );
        }
    }

    #[test]
    fn definition_round_trips_through_json() {
        let def = reference_map();
        let json = serde_json::to_string(&def).unwrap();
        let back: MapDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back.chambers.len(), def.chambers.len());
        assert_eq!(back.tunnels.len(), def.tunnels.len());
        assert_eq!(back.build().unwrap().edge_count(), 12);
    }

    #[test]
    fn duplicate_chamber_id_fails_to_build() {
        let mut def = reference_map();
        let dupe = def.chambers[0].clone();
        def.chambers.push(dupe);
        assert!(def.build().is_err());
    }

    #[test]
    fn tunnel_to_missing_chamber_fails_to_build() {
        let mut def = reference_map();
        def.tunnels.push(TunnelDef { u: 0, v: 99, weight: 1.0, kind: TunnelKind::Normal });
        assert!(def.build().is_err());
    }
}
