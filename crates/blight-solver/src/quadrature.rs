//! Composite trapezoidal quadrature over the grid.

/// Composite trapezoidal rule for uniformly spaced samples.
///
/// Exact for linear integrands; at least two samples required.
pub fn trapezoid(values: &[f64], spacing: f64) -> f64 {
    let n = values.len();
    let mut acc = 0.5 * (values[0] + values[n - 1]);
    for &v in &values[1..n - 1] {
        acc += v;
    }
    acc * spacing
}

/// The nonlocal double integral `∬ z(p) · w(p) dp` for one target point.
///
/// Nested 1D trapezoids: the kernel-weighted infected field is
/// integrated over x for each fixed y, producing a profile over y that
/// is then integrated in turn. `z` and `w` are flat row-major over an
/// N×N grid; `profile` is caller-provided scratch of length N, reused
/// across the N² targets of a step.
pub fn weighted_double_integral(
    z: &[f64],
    w: &[f64],
    resolution: usize,
    dx: f64,
    dy: f64,
    profile: &mut [f64],
) -> f64 {
    let n = resolution;
    for (l, slot) in profile.iter_mut().enumerate() {
        let first = z[l] * w[l];
        let last = z[(n - 1) * n + l] * w[(n - 1) * n + l];
        let mut acc = 0.5 * (first + last);
        for k in 1..n - 1 {
            let s = k * n + l;
            acc += z[s] * w[s];
        }
        *slot = acc * dx;
    }
    trapezoid(profile, dy)
}
