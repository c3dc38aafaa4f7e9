//! Graph construction: half-edge arena, face discovery, outer-face removal.

use std::collections::{BTreeSet, HashMap};

use nalgebra::Vector2;

use crate::error::GraphError;
use crate::geom2::{signed_area_sum, GeomCfg};

use super::types::{Face, FaceId, Graph, HalfEdge, HalfEdgeId, VertexId};

impl Graph {
    /// Build the half-edge structure and discover every bounded face.
    ///
    /// Pre: no two edges properly cross; every edge lies on some closed
    /// cycle. Bad indices and zero-length edges are always reported.
    /// Crossings and bridges are not detected as such: they surface as
    /// `GraphError::OpenTrace` when a half-edge is left with no closing
    /// cycle, and a bridge that gets traced along with an outer boundary is
    /// dropped with it instead.
    pub fn new(vertices: Vec<Vector2<f64>>, edges: &[[usize; 2]]) -> Result<Self, GraphError> {
        Self::with_cfg(vertices, edges, GeomCfg::default())
    }

    /// As `new`, with explicit tolerances.
    pub fn with_cfg(
        vertices: Vec<Vector2<f64>>,
        edges: &[[usize; 2]],
        cfg: GeomCfg,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::skeleton(vertices, edges, cfg)?;
        graph.discover_faces()?;
        Ok(graph)
    }

    /// Validated input with twinned half-edges, before any face is traced.
    pub(super) fn skeleton(
        vertices: Vec<Vector2<f64>>,
        edges: &[[usize; 2]],
        cfg: GeomCfg,
    ) -> Result<Self, GraphError> {
        let edges = validate_edges(&vertices, edges)?;
        let mut graph = Graph {
            outgoing: vec![Vec::new(); vertices.len()],
            vertices,
            edges,
            half_edges: Vec::new(),
            lookup: HashMap::new(),
            faces: Vec::new(),
            cfg,
        };
        graph.build_half_edges();
        Ok(graph)
    }

    /// Split every input edge into two twinned half-edges.
    ///
    /// O(E) time and space. A repeated edge (either orientation) maps to the
    /// half-edges of its first occurrence.
    fn build_half_edges(&mut self) {
        self.half_edges.reserve(self.edges.len() * 2);
        for (i, &[a, b]) in self.edges.iter().enumerate() {
            if self.lookup.contains_key(&(a, b)) {
                tracing::debug!(edge = i, a = a.0, b = b.0, "skipping duplicate edge");
                continue;
            }
            let ab = HalfEdgeId(self.half_edges.len());
            let ba = HalfEdgeId(ab.0 + 1);
            let mut he_ab = HalfEdge::new(a, b);
            let mut he_ba = HalfEdge::new(b, a);
            he_ab.twin = Some(ba);
            he_ba.twin = Some(ab);
            self.half_edges.push(he_ab);
            self.half_edges.push(he_ba);
            self.lookup.insert((a, b), ab);
            self.lookup.insert((b, a), ba);
            self.outgoing[a.0].push(ab);
            self.outgoing[b.0].push(ba);
        }
    }

    /// Claim half-edges face by face until none are left.
    ///
    /// Each trace yields either a bounded face (positive orientation, kept)
    /// or a piece of the unbounded boundary (non-positive, removed from the
    /// structure so it can neither be traced again nor show up as adjacency).
    fn discover_faces(&mut self) -> Result<(), GraphError> {
        let mut pool: BTreeSet<HalfEdgeId> = (0..self.half_edges.len()).map(HalfEdgeId).collect();
        let mut discarded = 0usize;
        while let Some(&seed) = pool.first() {
            let cycle = self.trace_face(seed)?;
            let index = FaceId(self.faces.len());
            let edges = self.claim_cycle(&cycle, index, &mut pool)?;
            let sign = signed_area_sum(cycle.iter().map(|v| self.vertices[v.0]));
            if sign > 0.0 {
                tracing::trace!(face = index.0, len = edges.len(), sign, "committed face");
                self.faces.push(Face::new(index, edges));
            } else {
                tracing::debug!(len = edges.len(), sign, "discarding outer face");
                self.discard(&edges);
                discarded += 1;
            }
        }
        tracing::debug!(
            faces = self.faces.len(),
            discarded,
            half_edges = self.half_edges.len(),
            "face discovery done"
        );
        Ok(())
    }

    /// Resolve the traced vertex cycle to half-edges, link `next`/`prev`,
    /// stamp the tentative face index and remove them from the pool.
    fn claim_cycle(
        &mut self,
        cycle: &[VertexId],
        index: FaceId,
        pool: &mut BTreeSet<HalfEdgeId>,
    ) -> Result<Vec<HalfEdgeId>, GraphError> {
        let k = cycle.len();
        let mut edges = Vec::with_capacity(k);
        for i in 0..k {
            let (start, end) = (cycle[i], cycle[(i + 1) % k]);
            let id = self
                .half_edge_between(start, end)
                .ok_or(GraphError::MissingHalfEdge { start, end })?;
            debug_assert!(self.half_edges[id.0].face.is_none(), "half-edge claimed twice");
            edges.push(id);
        }
        for i in 0..k {
            let id = edges[i];
            let prev = edges[(i + k - 1) % k];
            self.half_edges[id.0].prev = Some(prev);
            self.half_edges[prev.0].next = Some(id);
            self.half_edges[id.0].face = Some(index);
            pool.remove(&id);
        }
        Ok(edges)
    }

    /// Remove an outer-boundary cycle: sever twins, drop lookup entries.
    fn discard(&mut self, edges: &[HalfEdgeId]) {
        for &id in edges {
            let he = &mut self.half_edges[id.0];
            let (start, end) = (he.start, he.end);
            he.face = None;
            if let Some(twin) = he.twin.take() {
                self.half_edges[twin.0].twin = None;
            }
            self.lookup.remove(&(start, end));
            self.outgoing[start.0].retain(|&h| h != id);
        }
    }
}

fn validate_edges(
    vertices: &[Vector2<f64>],
    edges: &[[usize; 2]],
) -> Result<Vec<[VertexId; 2]>, GraphError> {
    let len = vertices.len();
    edges
        .iter()
        .enumerate()
        .map(|(edge, &[a, b])| {
            for vertex in [a, b] {
                if vertex >= len {
                    return Err(GraphError::VertexOutOfRange { edge, vertex, len });
                }
            }
            if a == b {
                return Err(GraphError::SelfLoop { edge, vertex: a });
            }
            if vertices[a] == vertices[b] {
                return Err(GraphError::ZeroLength {
                    edge,
                    start: VertexId(a),
                    end: VertexId(b),
                });
            }
            Ok([VertexId(a), VertexId(b)])
        })
        .collect()
}
