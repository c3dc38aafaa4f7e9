//! Face extraction for planar straight-line graphs.
//!
//! Given only vertices and undirected edges, build a half-edge structure,
//! recover every bounded face, and answer point-in-face and face-adjacency
//! queries.
//!
//! ```
//! use facegraph::prelude::*;
//!
//! let g = Graph::new(
//!     vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)],
//!     &[[0, 1], [1, 2], [2, 3], [3, 0], [0, 2]],
//! )
//! .unwrap();
//! assert_eq!(g.face_count(), 2);
//! let hit = g.pick(Vec2::new(0.75, 0.25)).unwrap();
//! assert_eq!(g.bfs_levels(hit).unwrap().len(), 2);
//! ```
//!
//! Numerics are plain `f64` with a single tolerance (`GeomCfg::eps_vertex`).
//! Input is assumed planar (edges meet only at shared vertices) and every
//! edge must lie on some closed cycle. Neither is checked directly: crossing
//! edges and bridges usually fail the face trace with
//! `GraphError::OpenTrace`, and whether a bridge is rejected or silently
//! dropped with the outer face depends on the order of the input edges.

pub mod dataset;
pub mod error;
pub mod generate;
pub mod geom2;
pub mod planar;

/// Points and directions in the plane.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dataset::Dataset;
pub use error::{DatasetError, GraphError};
pub use geom2::{BoundingBox, GeomCfg, Ray};
pub use planar::{FaceId, FaceView, Graph, HalfEdge, HalfEdgeId, VertexId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dataset::Dataset;
    pub use crate::error::{DatasetError, GraphError};
    pub use crate::generate::{jittered_grid, GridCfg};
    pub use crate::geom2::{BoundingBox, GeomCfg, Ray};
    pub use crate::planar::{FaceId, FaceView, Graph, HalfEdgeId, VertexId};
    pub use crate::Vec2;
}
