//! Reproducible planar graph samplers (jittered grids, wheels, star polygons).
//!
//! Purpose
//! - Feed tests, property tests, benches, and the CLI with planar graphs whose
//!   face count is known in closed form.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   any sample can be regenerated from its token alone.
//!
//! Model
//! - Grid: `(rows+1) × (cols+1)` lattice, vertex `r * (cols+1) + c`, each point
//!   jittered by at most `jitter_frac * spacing` per axis (clamped to 0.2, which
//!   keeps every cell convex). Optional diagonal `(r,c)–(r+1,c+1)` per cell.
//! - Wheel: `spokes` rim points at equal angles (random phase) with radial
//!   jitter; optional hub at the origin joined to every rim point. Without the
//!   hub the rim is a single star-shaped, possibly concave, polygon.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Graph};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Jittered lattice configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f64,
    /// Per-axis jitter as a fraction of `spacing`. Clamped to [0, 0.2].
    pub jitter_frac: f64,
    /// Split every cell into two triangles.
    pub diagonals: bool,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            spacing: 1.0,
            jitter_frac: 0.15,
            diagonals: true,
        }
    }
}

impl GridCfg {
    /// Number of bounded faces of the sampled grid.
    pub fn expected_faces(&self) -> usize {
        self.rows * self.cols * if self.diagonals { 2 } else { 1 }
    }
}

/// Wheel / star configuration.
#[derive(Clone, Copy, Debug)]
pub struct WheelCfg {
    /// Rim vertex count (at least 3 is enforced).
    pub spokes: usize,
    pub radius: f64,
    /// Relative radial jitter; radii = `radius * (1 + u)`, `u ∈ [-j, j]`, `j` clamped to [0, 0.9].
    pub radial_jitter: f64,
    /// Add a hub vertex (index 0) joined to every rim vertex.
    pub hub: bool,
}

impl Default for WheelCfg {
    fn default() -> Self {
        Self {
            spokes: 8,
            radius: 1.0,
            radial_jitter: 0.3,
            hub: true,
        }
    }
}

impl WheelCfg {
    /// Number of bounded faces of the sampled wheel.
    pub fn expected_faces(&self) -> usize {
        if self.hub {
            self.spokes.max(3)
        } else {
            1
        }
    }
}

/// Draw a jittered grid (see module docs for the vertex layout).
pub fn draw_grid(cfg: GridCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let jitter = cfg.jitter_frac.clamp(0.0, 0.2) * cfg.spacing;
    let width = cfg.cols + 1;
    let mut positions = Vec::with_capacity((cfg.rows + 1) * width);
    for r in 0..=cfg.rows {
        for c in 0..=cfg.cols {
            let jx = (rng.gen::<f64>() * 2.0 - 1.0) * jitter;
            let jy = (rng.gen::<f64>() * 2.0 - 1.0) * jitter;
            positions.push(Vector2::new(
                c as f64 * cfg.spacing + jx,
                r as f64 * cfg.spacing + jy,
            ));
        }
    }
    let at = |r: usize, c: usize| r * width + c;
    let mut edges = Vec::new();
    for r in 0..=cfg.rows {
        for c in 0..=cfg.cols {
            if c < cfg.cols {
                edges.push(Edge::new(at(r, c), at(r, c + 1)));
            }
            if r < cfg.rows {
                edges.push(Edge::new(at(r, c), at(r + 1, c)));
            }
            if cfg.diagonals && r < cfg.rows && c < cfg.cols {
                edges.push(Edge::new(at(r, c), at(r + 1, c + 1)));
            }
        }
    }
    Graph::new(positions, edges)
}

/// Draw a wheel (hub + rim) or, with `hub: false`, a star polygon.
pub fn draw_wheel(cfg: WheelCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let n = cfg.spokes.max(3);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.radius.max(1e-9);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let delta = std::f64::consts::TAU / n as f64;
    let offset = usize::from(cfg.hub);

    let mut positions = Vec::with_capacity(n + offset);
    if cfg.hub {
        positions.push(Vector2::zeros());
    }
    for k in 0..n {
        let theta = phase + k as f64 * delta;
        let radius = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
        positions.push(Vector2::new(radius * theta.cos(), radius * theta.sin()));
    }
    let mut edges = Vec::with_capacity(2 * n);
    for k in 0..n {
        edges.push(Edge::new(offset + k, offset + (k + 1) % n));
        if cfg.hub {
            edges.push(Edge::new(0, offset + k));
        }
    }
    Graph::new(positions, edges)
}
