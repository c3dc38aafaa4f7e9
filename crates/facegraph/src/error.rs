//! Error types for graph construction, queries and dataset loading.

use thiserror::Error;

use crate::planar::{HalfEdgeId, VertexId};

/// Precondition violations detected while building or querying a `Graph`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("edge {edge} references vertex {vertex}, but only {len} vertices exist")]
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        len: usize,
    },
    #[error("edge {edge} connects vertex {vertex} to itself")]
    SelfLoop { edge: usize, vertex: usize },
    #[error("edge {edge} has zero length ({start:?} and {end:?} coincide)")]
    ZeroLength {
        edge: usize,
        start: VertexId,
        end: VertexId,
    },
    #[error("no closed face through half-edge {seed:?} ({start:?} -> {end:?}); dangling or disconnected edge?")]
    OpenTrace {
        seed: HalfEdgeId,
        start: VertexId,
        end: VertexId,
    },
    #[error("traced cycle uses {start:?} -> {end:?}, which is not in the half-edge lookup")]
    MissingHalfEdge { start: VertexId, end: VertexId },
    #[error("face {index} out of range ({len} faces)")]
    FaceOutOfRange { index: usize, len: usize },
}

/// Errors while reading or materializing a `Dataset`.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown built-in dataset '{0}'")]
    Unknown(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
