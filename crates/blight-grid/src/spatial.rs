//! Uniform 2D spatial grid.

use crate::error::GridError;

/// A uniform two-dimensional grid over a rectangular domain.
///
/// Both axes carry `resolution` evenly-spaced coordinates including the
/// domain endpoints. Cells are addressed either by `(i, j)` index pairs
/// (`i` along x, `j` along y) or by the flat row-major index `i * N + j`;
/// every flat buffer in the workspace uses this ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

/// `n` evenly-spaced values covering `[lo, hi]` inclusive.
///
/// The last sample is pinned to `hi` exactly so the domain endpoint is
/// representable regardless of how the step rounds.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n - 1) as f64;
    let mut out: Vec<f64> = (0..n).map(|k| lo + step * k as f64).collect();
    out[n - 1] = hi;
    out
}

impl SpatialGrid {
    /// Build a grid with `resolution` points per axis over the given bounds.
    ///
    /// Returns a [`GridError`] if `resolution < 2` or either bounds pair
    /// is non-increasing or non-finite.
    pub fn new(
        x_bounds: (f64, f64),
        y_bounds: (f64, f64),
        resolution: usize,
    ) -> Result<Self, GridError> {
        if resolution < 2 {
            return Err(GridError::ResolutionTooSmall { resolution });
        }
        for (axis, (lo, hi)) in [("x", x_bounds), ("y", y_bounds)] {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(GridError::InvalidBounds { axis, lo, hi });
            }
        }
        Ok(Self {
            xs: linspace(x_bounds.0, x_bounds.1, resolution),
            ys: linspace(y_bounds.0, y_bounds.1, resolution),
        })
    }

    /// Number of points along each axis.
    pub fn resolution(&self) -> usize {
        self.xs.len()
    }

    /// Total number of grid points (`resolution²`).
    pub fn cell_count(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// The x-axis coordinates, in increasing order.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y-axis coordinates, in increasing order.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Spacing between adjacent x coordinates.
    pub fn dx(&self) -> f64 {
        self.xs[1] - self.xs[0]
    }

    /// Spacing between adjacent y coordinates.
    pub fn dy(&self) -> f64 {
        self.ys[1] - self.ys[0]
    }

    /// Flat row-major index of the point `(i, j)`.
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        i * self.ys.len() + j
    }

    /// The physical coordinates of the point `(i, j)`.
    pub fn point(&self, i: usize, j: usize) -> (f64, f64) {
        (self.xs[i], self.ys[j])
    }

    /// The physical coordinates of a flat-indexed point.
    pub fn position(&self, flat: usize) -> (f64, f64) {
        let n = self.ys.len();
        (self.xs[flat / n], self.ys[flat % n])
    }

    /// Euclidean distance between two flat-indexed points.
    pub fn distance(&self, p: usize, q: usize) -> f64 {
        let (px, py) = self.position(p);
        let (qx, qy) = self.position(q);
        ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
    }

    /// Whether `(i, j)` lies on one of the four domain edges.
    pub fn is_edge(&self, i: usize, j: usize) -> bool {
        let n = self.resolution();
        i == 0 || j == 0 || i == n - 1 || j == n - 1
    }
}
