//! Planar half-edge graph: face discovery, containment and adjacency.
//!
//! Purpose
//! - Take a bare planar straight-line graph (vertices + undirected edges),
//!   split edges into twinned half-edges, and recover every bounded face by
//!   tracing angle-ordered cycles.
//! - The unbounded region is traced like any other face but has
//!   non-positive orientation; it is cut out of the structure instead of
//!   being committed.
//!
//! Layout
//! - `types.rs` (ids, arena records), `build.rs` (construction and the
//!   discovery loop), `trace.rs` (stack-based DFS), `face.rs` (accessors and
//!   per-face queries), `bfs.rs` (adjacency traversal).
//!
//! Code cross-refs: `geom2::{segment_ray_intersection, turn_angle, signed_area_sum}`

mod bfs;
mod build;
mod face;
mod trace;
mod types;

pub use face::FaceView;
pub use types::{Face, FaceId, Graph, HalfEdge, HalfEdgeId, VertexId};
