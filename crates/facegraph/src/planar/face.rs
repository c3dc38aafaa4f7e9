//! Read-side API: graph accessors and per-face queries.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::geom2::{signed_area_sum, BoundingBox, GeomCfg, Ray, RAY_DIR};

use super::types::{Face, FaceId, Graph, HalfEdge, HalfEdgeId, VertexId};

impl Graph {
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    /// Input edges as accepted (duplicates included).
    pub fn input_edges(&self) -> &[[VertexId; 2]] {
        &self.edges
    }

    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    pub fn half_edge(&self, id: HalfEdgeId) -> Option<&HalfEdge> {
        self.half_edges.get(id.0)
    }

    /// Half-edge `start -> end`, unless absent or removed with the outer face.
    pub fn half_edge_between(&self, start: VertexId, end: VertexId) -> Option<HalfEdgeId> {
        self.lookup.get(&(start, end)).copied()
    }

    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn face(&self, id: FaceId) -> Option<FaceView<'_>> {
        self.faces.get(id.0).map(|face| FaceView { graph: self, face })
    }

    /// Committed faces in index order.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = FaceView<'_>> + '_ {
        self.faces.iter().map(move |face| FaceView { graph: self, face })
    }

    /// First face containing `p` (linear scan).
    pub fn pick(&self, p: Vector2<f64>) -> Option<FaceId> {
        self.faces()
            .find(|face| face.contains_point(p))
            .map(|face| face.index())
    }
}

/// A committed face viewed through its owning graph.
#[derive(Clone, Copy, Debug)]
pub struct FaceView<'a> {
    graph: &'a Graph,
    face: &'a Face,
}

impl<'a> FaceView<'a> {
    pub fn index(&self) -> FaceId {
        self.face.index
    }

    pub fn edges(&self) -> &'a [HalfEdgeId] {
        &self.face.edges
    }

    pub fn half_edges(&self) -> impl Iterator<Item = &'a HalfEdge> + Clone + 'a {
        let arena = &self.graph.half_edges;
        self.face.edges.iter().map(move |h| &arena[h.0])
    }

    /// Start vertex of every half-edge, in cycle order.
    pub fn vertex_cycle(&self) -> Vec<VertexId> {
        self.half_edges().map(|he| he.start).collect()
    }

    /// Orientation sum over the cycle; always positive for committed faces.
    pub fn sign(&self) -> f64 {
        let vertices = &self.graph.vertices;
        signed_area_sum(self.half_edges().map(|he| vertices[he.start.0]))
    }

    /// Bounding box of the cycle's vertices, computed once.
    pub fn bounding_box(&self) -> BoundingBox {
        *self.face.bbox.get_or_init(|| {
            let vertices = &self.graph.vertices;
            BoundingBox::from_points(self.half_edges().map(|he| vertices[he.start.0]))
                .unwrap_or(BoundingBox {
                    position: Vector2::zeros(),
                    size: Vector2::zeros(),
                })
        })
    }

    /// Even-odd test with a +x ray from `p`.
    ///
    /// When two edges report the bit-identical hit (the ray passes through a
    /// shared vertex) both are re-tested against a ray nudged by
    /// `eps_vertex` in +y and the count is corrected by the difference, so a
    /// crossing vertex counts once and a touching vertex zero or two times.
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        if !self.bounding_box().contains_point(p) {
            return false;
        }
        let vertices = &self.graph.vertices;
        let ray = Ray::new(p, RAY_DIR);
        let nudged = ray.translated(Vector2::new(0.0, self.graph.cfg.eps_vertex));
        let mut hits: HashMap<(u64, u64), &HalfEdge> = HashMap::new();
        let mut count = 0i64;
        for he in self.half_edges() {
            let Some(x) = he.intersect_ray(vertices, &ray) else {
                continue;
            };
            let key = (x.x.to_bits(), x.y.to_bits());
            if let Some(seen) = hits.get(&key) {
                if seen.intersect_ray(vertices, &nudged).is_none() {
                    count -= 1;
                }
                if he.intersect_ray(vertices, &nudged).is_some() {
                    count += 1;
                }
                continue;
            }
            hits.insert(key, he);
            count += 1;
        }
        count.rem_euclid(2) == 1
    }

    /// Owning face of each edge's twin, in edge order. Edges on the outer
    /// boundary have no twin and contribute nothing; a neighbor sharing
    /// several edges appears once per shared edge.
    pub fn adjacent_face_indices(&self) -> Vec<FaceId> {
        let arena = &self.graph.half_edges;
        self.half_edges()
            .filter_map(|he| he.twin)
            .filter_map(|twin| arena[twin.0].face)
            .collect()
    }
}
