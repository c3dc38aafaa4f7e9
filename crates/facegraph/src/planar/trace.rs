//! Angle-ordered depth-first face trace with explicit backtracking.
//!
//! From the seed's end vertex the walker tries outgoing half-edges in order
//! of increasing clockwise angle from the reversed incoming direction
//! (tightest left turn first), never stepping straight back to the vertex it
//! came from and never entering a half-edge that already bounds a committed
//! face. The first path that returns to the seed's start vertex is the face.
//! Dead ends (dangling edges) backtrack to the next candidate.

use std::collections::HashSet;

use crate::error::GraphError;
use crate::geom2::turn_angle;

use super::types::{Graph, HalfEdgeId, VertexId};

/// One vertex on the DFS path with its remaining candidates.
struct Frame {
    vertex: VertexId,
    via: HalfEdgeId,
    candidates: Vec<HalfEdgeId>,
    next: usize,
}

impl Graph {
    /// Trace the face cycle that starts with `seed`.
    ///
    /// Returns the vertex sequence `[seed.start, seed.end, ...]`; the closing
    /// edge runs from the last vertex back to `seed.start`. A directed
    /// half-edge is used at most once per path, which keeps the search finite
    /// on malformed input. Exhausting every candidate is `OpenTrace`.
    pub(crate) fn trace_face(&self, seed: HalfEdgeId) -> Result<Vec<VertexId>, GraphError> {
        let first = &self.half_edges[seed.0];
        let origin = first.start;
        let mut path = vec![origin, first.end];
        let mut on_path: HashSet<HalfEdgeId> = HashSet::from([seed]);
        let mut stack = vec![Frame {
            vertex: first.end,
            via: seed,
            candidates: self.sorted_candidates(first.end, origin),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&h) = frame.candidates.get(frame.next) else {
                on_path.remove(&frame.via);
                stack.pop();
                path.pop();
                continue;
            };
            frame.next += 1;
            if on_path.contains(&h) {
                continue;
            }
            let from = frame.vertex;
            let end = self.half_edges[h.0].end;
            if end == origin {
                return Ok(path);
            }
            on_path.insert(h);
            path.push(end);
            stack.push(Frame {
                vertex: end,
                via: h,
                candidates: self.sorted_candidates(end, from),
                next: 0,
            });
        }

        Err(GraphError::OpenTrace {
            seed,
            start: origin,
            end: first.end,
        })
    }

    /// Unclaimed outgoing half-edges of `vertex`, excluding the one back to
    /// `previous`, sorted by clockwise angle from the direction
    /// `vertex -> previous`.
    ///
    /// O(d log d) in the vertex degree.
    pub(crate) fn sorted_candidates(&self, vertex: VertexId, previous: VertexId) -> Vec<HalfEdgeId> {
        let pivot = self.vertices[vertex.0];
        let back = self.vertices[previous.0] - pivot;
        let mut keyed: Vec<(f64, HalfEdgeId)> = self.outgoing[vertex.0]
            .iter()
            .filter_map(|&h| {
                let he = &self.half_edges[h.0];
                if he.end == previous || he.face.is_some() {
                    return None;
                }
                Some((turn_angle(back, self.vertices[he.end.0] - pivot), h))
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, h)| h).collect()
    }
}
