//! Error types for graph construction, mutation, and traversal.
//!
//! Every fallible entry point fails fast with one of these variants rather
//! than silently no-oping. Callers validate vertex ids against game state
//! before calling, so any of these surfacing at runtime indicates a logic
//! bug upstream, not a recoverable gameplay event. "No path exists" is not
//! an error: traversals report it as a normal empty result.

use thiserror::Error;

use crate::graph::VertexId;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Operation references a vertex id absent from the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(VertexId),

    /// Mutation targets a vertex pair with no connecting edge.
    #[error("no edge connects {0} and {1}")]
    EdgeNotFound(VertexId, VertexId),

    /// A vertex with this id already exists (construction-time only).
    #[error("duplicate vertex id: {0}")]
    DuplicateVertex(VertexId),

    /// Negative (or non-finite) weight supplied at edge construction.
    #[error("invalid weight {weight} for edge {u}-{v} (must be finite and >= 0)")]
    InvalidWeight { u: VertexId, v: VertexId, weight: f32 },

    /// Edges connect exactly two distinct vertices.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),
}
