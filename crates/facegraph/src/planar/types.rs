//! Data types for the half-edge arena and its faces.
//!
//! Kept small and explicit to make `build`, `trace` and `face` easy to read.
//! All cross-links are arena indices; nothing here owns anything else.

use std::collections::HashMap;
use std::sync::OnceLock;

use nalgebra::Vector2;

use crate::geom2::{segment_ray_intersection, BoundingBox, GeomCfg, Ray};

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfEdgeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub usize);

/// One directed traversal `start -> end` of an input edge.
///
/// Invariants once linked: `next.prev == self`, `prev.next == self`, and
/// `twin.twin == self` while both sides are still joined. Twins of edges on
/// the discarded outer boundary are severed (`None` on both sides).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub start: VertexId,
    pub end: VertexId,
    pub twin: Option<HalfEdgeId>,
    pub next: Option<HalfEdgeId>,
    pub prev: Option<HalfEdgeId>,
    pub face: Option<FaceId>,
}

impl HalfEdge {
    pub(crate) fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            twin: None,
            next: None,
            prev: None,
            face: None,
        }
    }

    /// Hit point of `ray` with this edge's segment, if any (see
    /// `geom2::segment_ray_intersection`).
    #[inline]
    pub fn intersect_ray(&self, vertices: &[Vector2<f64>], ray: &Ray) -> Option<Vector2<f64>> {
        segment_ray_intersection(vertices[self.start.0], vertices[self.end.0], ray)
    }
}

/// A committed face: its half-edge cycle in traversal order.
#[derive(Debug)]
pub struct Face {
    pub index: FaceId,
    pub edges: Vec<HalfEdgeId>,
    pub(crate) bbox: OnceLock<BoundingBox>,
}

impl Face {
    pub(crate) fn new(index: FaceId, edges: Vec<HalfEdgeId>) -> Self {
        Self {
            index,
            edges,
            bbox: OnceLock::new(),
        }
    }
}

/// Planar straight-line graph with its discovered bounded faces.
///
/// Built once by `Graph::new`; read-only afterwards apart from the
/// per-face bounding-box memo.
#[derive(Debug)]
pub struct Graph {
    pub(crate) vertices: Vec<Vector2<f64>>,
    pub(crate) edges: Vec<[VertexId; 2]>,
    pub(crate) half_edges: Vec<HalfEdge>,
    /// `(start, end) -> half-edge`; outer-boundary entries are removed.
    pub(crate) lookup: HashMap<(VertexId, VertexId), HalfEdgeId>,
    /// Outgoing half-edges per vertex, in insertion order.
    pub(crate) outgoing: Vec<Vec<HalfEdgeId>>,
    pub(crate) faces: Vec<Face>,
    pub(crate) cfg: GeomCfg,
}
