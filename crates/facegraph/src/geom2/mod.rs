//! 2D geometric primitives used by the half-edge graph.
//!
//! Purpose
//! - Small value types (`BoundingBox`, `Ray`) and the few predicates the
//!   face machinery needs: segment/ray intersection, turn angles for the
//!   face trace, and the signed area sum that separates bounded faces from
//!   the unbounded one.
//! - Keep numerics explicit: the only tolerance lives in `GeomCfg`.
//!
//! Code cross-refs: `planar::{Graph, FaceView}`

mod types;
mod util;

pub use types::{BoundingBox, GeomCfg, Ray, RAY_DIR};
pub use util::{segment_ray_intersection, signed_area_sum, turn_angle};

#[cfg(test)]
mod tests;
