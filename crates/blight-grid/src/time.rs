//! Uniform time discretization over a half-open horizon.

use crate::error::GridError;
use blight_core::StepId;

/// An ordered sequence of uniformly-spaced time points over `[0, t_end)`.
///
/// The points are `0, tau, 2·tau, …` strictly below `t_end`, so the
/// horizon end itself is never a time point. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
    tau: f64,
}

impl TimeGrid {
    /// Build the time grid for step `tau` over the horizon `[0, t_end)`.
    ///
    /// Returns a [`GridError`] if `tau` is non-positive or non-finite,
    /// or if the horizon yields fewer than two points (no transition to
    /// integrate).
    pub fn new(tau: f64, t_end: f64) -> Result<Self, GridError> {
        if !tau.is_finite() || tau <= 0.0 {
            return Err(GridError::InvalidTimeStep { tau });
        }
        if !t_end.is_finite() || t_end <= 0.0 {
            return Err(GridError::InvalidHorizon { t_end, tau });
        }
        let count = (t_end / tau).ceil() as usize;
        if count < 2 {
            return Err(GridError::InvalidHorizon { t_end, tau });
        }
        let points = (0..count).map(|k| k as f64 * tau).collect();
        Ok(Self { points, tau })
    }

    /// Number of time points, including `t = 0`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` — construction requires at least two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The uniform step between adjacent points.
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// All time points, in increasing order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// The time of a given step, or `None` past the end of the horizon.
    pub fn time(&self, step: StepId) -> Option<f64> {
        self.points.get(step.0 as usize).copied()
    }

    /// The last step on this grid (the terminal state of a full run).
    pub fn last_step(&self) -> StepId {
        StepId((self.points.len() - 1) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_horizon_point_count() {
        // [0, 200) at tau = 0.5: 400 points, last one 199.5.
        let time = TimeGrid::new(0.5, 200.0).unwrap();
        assert_eq!(time.len(), 400);
        assert_eq!(time.points()[0], 0.0);
        assert_eq!(time.points()[399], 199.5);
        assert_eq!(time.last_step(), StepId(399));
    }

    #[test]
    fn horizon_end_is_excluded() {
        // Exact division: t_end itself must not appear.
        let time = TimeGrid::new(1.0, 3.0).unwrap();
        assert_eq!(time.points(), &[0.0, 1.0, 2.0]);
        // Non-exact division: last point is the largest multiple below t_end.
        let time = TimeGrid::new(1.0, 2.5).unwrap();
        assert_eq!(time.points(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn time_lookup_by_step() {
        let time = TimeGrid::new(0.5, 2.0).unwrap();
        assert_eq!(time.time(StepId(0)), Some(0.0));
        assert_eq!(time.time(StepId(3)), Some(1.5));
        assert_eq!(time.time(StepId(4)), None);
    }

    #[test]
    fn rejects_non_positive_tau() {
        for tau in [0.0, -0.5, f64::NAN] {
            match TimeGrid::new(tau, 10.0) {
                Err(GridError::InvalidTimeStep { .. }) => {}
                other => panic!("expected InvalidTimeStep for tau={tau}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_degenerate_horizon() {
        // One point is not enough for a single transition.
        match TimeGrid::new(1.0, 0.5) {
            Err(GridError::InvalidHorizon { .. }) => {}
            other => panic!("expected InvalidHorizon, got {other:?}"),
        }
        assert!(TimeGrid::new(1.0, -3.0).is_err());
        assert!(TimeGrid::new(1.0, f64::INFINITY).is_err());
    }
}
