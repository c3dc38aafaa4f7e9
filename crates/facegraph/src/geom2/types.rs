//! Basic 2D value types and tolerances.
//!
//! - `GeomCfg`: centralizes the epsilon for degenerate ray/vertex hits.
//! - `BoundingBox`: half-open axis-aligned box (min corner + extent).
//! - `Ray`: origin plus unit direction.

use nalgebra::Vector2;

/// Fixed direction of the containment ray (+x).
pub const RAY_DIR: Vector2<f64> = Vector2::new(1.0, 0.0);

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Offset applied perpendicular to the containment ray when two boundary
    /// edges report the same hit point (ray through a shared vertex).
    pub eps_vertex: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_vertex: 1e-6 }
    }
}

/// Axis-aligned box given by its min corner and extent.
///
/// Containment is half-open (`min <= p < min + size` on both axes) so that
/// boxes tiling the plane never claim a shared boundary twice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub position: Vector2<f64>,
    pub size: Vector2<f64>,
}

impl BoundingBox {
    /// Min/max reduction over `points`. `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p)));
        Some(Self {
            position: min,
            size: max - min,
        })
    }

    #[inline]
    pub fn max(&self) -> Vector2<f64> {
        self.position + self.size
    }

    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        let max = self.max();
        let h = self.position.x <= p.x && p.x < max.x;
        let v = self.position.y <= p.y && p.y < max.y;
        h && v
    }
}

/// Ray with unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub point: Vector2<f64>,
    pub dir: Vector2<f64>,
}

impl Ray {
    /// Pre: `dir` is nonzero. Post: `self.dir` has unit norm.
    pub fn new(point: Vector2<f64>, dir: Vector2<f64>) -> Self {
        let len = dir.norm();
        debug_assert!(len > 0.0, "ray direction must be nonzero");
        Self {
            point,
            dir: dir / len,
        }
    }

    /// Same direction, origin shifted by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self {
            point: self.point + offset,
            dir: self.dir,
        }
    }
}
