//! The symmetric pairwise interaction table.

use crate::config::{KernelConfig, KernelError};
use blight_grid::SpatialGrid;

/// Precomputed interaction weights between every pair of grid points.
///
/// Conceptually a 4-index table `K[i, j, k, l]` — `(i, j)` the source
/// point, `(k, l)` the target — stored as a flat `cell_count²` matrix
/// over row-major point indices. The table is symmetric
/// (`K[p][q] == K[q][p]`), so a row doubles as a column and
/// [`row`](ContactKernel::row) serves both roles; the builder computes
/// each unordered pair once and writes both slots, which makes the
/// symmetry exact rather than merely approximate.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactKernel {
    resolution: usize,
    weights: Vec<f64>,
}

impl ContactKernel {
    /// Build the kernel for a grid: `amplitude * exp(-decay * distance)`
    /// for every pair of points.
    ///
    /// O(N⁴) in the grid resolution N, in both time and memory.
    pub fn build(grid: &SpatialGrid, config: &KernelConfig) -> Result<Self, KernelError> {
        config.validate()?;
        let cells = grid.cell_count();
        let mut weights = vec![0.0; cells * cells];
        for p in 0..cells {
            // Zero distance: exp(0) = 1, so the self-weight is exactly
            // the amplitude.
            weights[p * cells + p] = config.amplitude;
            for q in (p + 1)..cells {
                let w = config.amplitude * (-config.decay * grid.distance(p, q)).exp();
                weights[p * cells + q] = w;
                weights[q * cells + p] = w;
            }
        }
        Ok(Self {
            resolution: grid.resolution(),
            weights,
        })
    }

    /// Grid resolution this kernel was built for.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Number of grid points (`resolution²`).
    pub fn cell_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Weight between flat point indices `p` and `q`.
    pub fn pair_weight(&self, p: usize, q: usize) -> f64 {
        self.weights[p * self.cell_count() + q]
    }

    /// 4-index view: weight between source `(i, j)` and target `(k, l)`.
    pub fn weight(&self, i: usize, j: usize, k: usize, l: usize) -> f64 {
        let n = self.resolution;
        self.pair_weight(i * n + j, k * n + l)
    }

    /// All weights touching point `q`, contiguous over the other point's
    /// flat index. By symmetry this is both row and column `q` of the
    /// table; the integrator reads one row per target point per step.
    pub fn row(&self, q: usize) -> &[f64] {
        let cells = self.cell_count();
        &self.weights[q * cells..(q + 1) * cells]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_grid(n: usize) -> SpatialGrid {
        SpatialGrid::new((0.0, 1.0), (0.0, 1.0), n).unwrap()
    }

    #[test]
    fn self_weight_is_exactly_amplitude() {
        let grid = small_grid(6);
        let cfg = KernelConfig::default();
        let kernel = ContactKernel::build(&grid, &cfg).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(kernel.weight(i, j, i, j), cfg.amplitude);
            }
        }
    }

    #[test]
    fn matches_direct_formula() {
        let grid = small_grid(5);
        let cfg = KernelConfig {
            amplitude: 500.0,
            decay: 100.0,
        };
        let kernel = ContactKernel::build(&grid, &cfg).unwrap();
        for p in 0..grid.cell_count() {
            for q in 0..grid.cell_count() {
                let expected = cfg.amplitude * (-cfg.decay * grid.distance(p, q)).exp();
                let got = kernel.pair_weight(p, q);
                assert!(
                    (got - expected).abs() <= 1e-12 * expected.max(1.0),
                    "pair ({p}, {q}): got {got}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn decay_is_monotone_in_distance() {
        let grid = small_grid(7);
        let kernel = ContactKernel::build(&grid, &KernelConfig::default()).unwrap();
        let p = grid.flat_index(3, 3);
        let mut pairs: Vec<(f64, f64)> = (0..grid.cell_count())
            .map(|q| (grid.distance(p, q), kernel.pair_weight(p, q)))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        for w in pairs.windows(2) {
            assert!(
                w[0].1 >= w[1].1,
                "weight must not increase with distance: {:?} then {:?}",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn flat_kernel_with_zero_decay() {
        let grid = small_grid(4);
        let cfg = KernelConfig {
            amplitude: 2.0,
            decay: 0.0,
        };
        let kernel = ContactKernel::build(&grid, &cfg).unwrap();
        for p in 0..grid.cell_count() {
            for q in 0..grid.cell_count() {
                assert_eq!(kernel.pair_weight(p, q), 2.0);
            }
        }
    }

    #[test]
    fn row_agrees_with_pair_weight() {
        let grid = small_grid(4);
        let kernel = ContactKernel::build(&grid, &KernelConfig::default()).unwrap();
        for q in 0..grid.cell_count() {
            let row = kernel.row(q);
            assert_eq!(row.len(), grid.cell_count());
            for p in 0..grid.cell_count() {
                assert_eq!(row[p], kernel.pair_weight(q, p));
                // Symmetry makes the row valid for either argument order.
                assert_eq!(row[p], kernel.pair_weight(p, q));
            }
        }
    }

    #[test]
    fn build_rejects_invalid_config() {
        let grid = small_grid(3);
        let cfg = KernelConfig {
            amplitude: f64::INFINITY,
            ..KernelConfig::default()
        };
        assert!(matches!(
            ContactKernel::build(&grid, &cfg),
            Err(KernelError::InvalidAmplitude { .. })
        ));
    }

    proptest! {
        #[test]
        fn symmetry_for_all_quadruples(
            n in 2usize..8,
            a in 0usize..4096,
            b in 0usize..4096,
        ) {
            let grid = small_grid(n);
            let kernel = ContactKernel::build(&grid, &KernelConfig::default()).unwrap();
            let p = a % grid.cell_count();
            let q = b % grid.cell_count();
            let (i, j) = (p / n, p % n);
            let (k, l) = (q / n, q % n);
            // Exact equality: each unordered pair is computed once.
            prop_assert_eq!(kernel.weight(i, j, k, l), kernel.weight(k, l, i, j));
        }
    }
}
