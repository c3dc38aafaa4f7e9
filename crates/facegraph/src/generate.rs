//! Random planar inputs: jittered quad grids with optional diagonals.
//!
//! Model
//! - A `rows × cols` lattice of unit cells; every lattice point is moved by
//!   up to `jitter` on each axis. With `jitter <= 0.2` every cell stays a
//!   strictly convex quad, so a diagonal never leaves its cell and the
//!   arrangement stays planar.
//! - Each cell gets one of its two diagonals with probability
//!   `diagonal_prob`, splitting it into two triangles.
//! - Determinism comes from the seed alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dataset::Dataset;

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub rows: usize,
    pub cols: usize,
    /// Per-axis displacement bound for lattice points. Clamped to [0, 0.2].
    pub jitter: f64,
    /// Probability of splitting a cell with a diagonal. Clamped to [0, 1].
    pub diagonal_prob: f64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            jitter: 0.15,
            diagonal_prob: 0.5,
        }
    }
}

/// Draw a jittered grid. `expect_face_count` is exact: one face per cell
/// plus one per diagonal.
pub fn jittered_grid(cfg: GridCfg, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = cfg.rows.max(1);
    let cols = cfg.cols.max(1);
    let jitter = cfg.jitter.clamp(0.0, 0.2);
    let p_diag = cfg.diagonal_prob.clamp(0.0, 1.0);
    let stride = cols + 1;
    let id = |r: usize, c: usize| r * stride + c;

    let mut vertices = Vec::with_capacity((rows + 1) * stride);
    for r in 0..=rows {
        for c in 0..=cols {
            let jx = if jitter > 0.0 { rng.gen_range(-jitter..=jitter) } else { 0.0 };
            let jy = if jitter > 0.0 { rng.gen_range(-jitter..=jitter) } else { 0.0 };
            vertices.push([c as f64 + jx, r as f64 + jy]);
        }
    }

    let mut edges = Vec::new();
    for r in 0..=rows {
        for c in 0..cols {
            edges.push([id(r, c), id(r, c + 1)]);
        }
    }
    for r in 0..rows {
        for c in 0..=cols {
            edges.push([id(r, c), id(r + 1, c)]);
        }
    }
    let mut diagonals = 0;
    for r in 0..rows {
        for c in 0..cols {
            if rng.gen_bool(p_diag) {
                if rng.gen_bool(0.5) {
                    edges.push([id(r, c), id(r + 1, c + 1)]);
                } else {
                    edges.push([id(r, c + 1), id(r + 1, c)]);
                }
                diagonals += 1;
            }
        }
    }

    Dataset {
        vertices,
        edges,
        expect_face_count: rows * cols + diagonals,
        scale: 1.0 / rows.max(cols) as f64,
    }
}
