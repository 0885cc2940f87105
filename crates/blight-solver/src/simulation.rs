//! The explicit-Euler stepping state machine.

use std::error::Error;
use std::fmt;

use crate::boundary;
use crate::config::{ConfigError, SolverConfig};
use crate::fields::FieldPair;
use crate::history::{History, HistoryRecorder};
use crate::quadrature;
use crate::stability::{self, Envelope};
use blight_core::{FieldKind, ModelParams, StepError, StepId};
use blight_grid::{SpatialGrid, TimeGrid};
use blight_kernel::ContactKernel;

/// A configured simulation advancing one [`FieldPair`] per step.
///
/// Each state is derived solely from its immediate predecessor plus the
/// immutable kernel and parameters: all reads in a step come from the
/// frozen previous fields, so the per-target updates are independent of
/// one another. Stepping is deterministic; two simulations built from
/// the same configuration produce identical sequences.
///
/// A failed step leaves the simulation at its pre-step state, so the
/// last published [`current`](Simulation::current) fields are always
/// ones that passed the stability check.
#[derive(Debug)]
pub struct Simulation {
    spatial: SpatialGrid,
    time: TimeGrid,
    kernel: ContactKernel,
    params: ModelParams,
    envelope: Envelope,
    current: FieldPair,
    step: StepId,
    /// Scratch for the quadrature's intermediate y-profile, reused
    /// across all targets of a step.
    profile: Vec<f64>,
}

impl Simulation {
    /// Build a simulation from configuration, including the O(N⁴)
    /// kernel construction.
    pub fn new(config: &SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (spatial, time) = config.grid.build()?;
        let kernel = ContactKernel::build(&spatial, &config.kernel)?;
        Ok(Self::assemble(spatial, time, kernel, config))
    }

    /// Build a simulation around a prebuilt kernel, re-using the one
    /// expensive artifact across runs with different rates or seeds.
    ///
    /// Fails with [`StepError::DimensionMismatch`] if the kernel was
    /// built for a different resolution than the configured grid —
    /// checked here, before any stepping.
    pub fn with_kernel(config: &SolverConfig, kernel: ContactKernel) -> Result<Self, RunError> {
        config.validate()?;
        let (spatial, time) = config.grid.build().map_err(ConfigError::from)?;
        if kernel.resolution() != spatial.resolution() {
            return Err(RunError::Step(StepError::DimensionMismatch {
                kernel: kernel.resolution(),
                grid: spatial.resolution(),
            }));
        }
        Ok(Self::assemble(spatial, time, kernel, config))
    }

    fn assemble(
        spatial: SpatialGrid,
        time: TimeGrid,
        kernel: ContactKernel,
        config: &SolverConfig,
    ) -> Self {
        let mut current = FieldPair::seeded(spatial.resolution(), &config.seed);
        boundary::enforce(&mut current);
        let profile = vec![0.0; spatial.resolution()];
        Self {
            spatial,
            time,
            kernel,
            params: config.params,
            envelope: config.envelope,
            current,
            step: StepId(0),
            profile,
        }
    }

    /// The spatial grid the simulation runs on.
    pub fn spatial(&self) -> &SpatialGrid {
        &self.spatial
    }

    /// The time grid the simulation steps along.
    pub fn time(&self) -> &TimeGrid {
        &self.time
    }

    /// The model rates in effect.
    pub fn params(&self) -> ModelParams {
        self.params
    }

    /// The most recent state that passed the stability check.
    pub fn current(&self) -> &FieldPair {
        &self.current
    }

    /// The step of the current state; `StepId(0)` is the seeded state.
    pub fn current_step(&self) -> StepId {
        self.step
    }

    /// The physical time of the current state.
    pub fn current_time(&self) -> f64 {
        self.time
            .time(self.step)
            .expect("current step lies on the time grid")
    }

    /// Whether the terminal time point has been reached.
    pub fn is_complete(&self) -> bool {
        self.step == self.time.last_step()
    }

    /// Advance one time step and return the new state.
    ///
    /// For every target point the nonlocal infection pressure is the
    /// kernel-weighted double integral of the previous infected field;
    /// the explicit Euler update then moves both densities, the domain
    /// edges are pinned to zero, and the result is checked against the
    /// envelope. On failure the state does not advance.
    pub fn step_sync(&mut self) -> Result<&FieldPair, StepError> {
        if self.is_complete() {
            return Err(StepError::HorizonExhausted { last: self.step });
        }
        let next_step = self.step.next();
        let n = self.spatial.resolution();
        let cells = n * n;
        let (dx, dy) = (self.spatial.dx(), self.spatial.dy());
        let tau = self.time.tau();
        let ModelParams { beta, gamma } = self.params;

        let z = &self.current.infected;
        let r = &self.current.recovered;
        let mut infected = vec![0.0; cells];
        let mut recovered = vec![0.0; cells];
        for target in 0..cells {
            let weights = self.kernel.row(target);
            let pressure =
                quadrature::weighted_double_integral(z, weights, n, dx, dy, &mut self.profile);
            let z_prev = z[target];
            let r_prev = r[target];
            infected[target] =
                z_prev + tau * (beta * (1.0 - z_prev - r_prev) * pressure - gamma * z_prev);
            recovered[target] = r_prev + tau * gamma * z_prev;
        }

        boundary::zero_edges(&mut infected, n);
        boundary::zero_edges(&mut recovered, n);
        stability::check(&infected, FieldKind::Infected, next_step, &self.envelope)?;
        stability::check(&recovered, FieldKind::Recovered, next_step, &self.envelope)?;

        self.current = FieldPair {
            resolution: n,
            infected,
            recovered,
        };
        self.step = next_step;
        Ok(&self.current)
    }
}

/// The full artifact of a run, handed to the external visualizer:
/// coordinate grids plus the retained `(time, fields)` sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct SimRun {
    /// The spatial grid coordinates.
    pub spatial: SpatialGrid,
    /// The time grid.
    pub time: TimeGrid,
    /// The retained frames, in time order.
    pub history: History,
}

/// Any failure of a full [`run`]: bad configuration or a failed step.
#[derive(Clone, Debug, PartialEq)]
pub enum RunError {
    /// Configuration rejected before computation started.
    Config(ConfigError),
    /// A step failed after the run started.
    Step(StepError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Step(e) => write!(f, "step: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Step(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for RunError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

/// Run a configured simulation to the end of its time grid.
///
/// Frames are recorded through a [`HistoryRecorder`] with the
/// configured retention policy, starting with the seeded state.
pub fn run(config: &SolverConfig) -> Result<SimRun, RunError> {
    let mut sim = Simulation::new(config)?;
    let mut recorder = HistoryRecorder::new(config.history);
    recorder.record(sim.current_step(), sim.current_time(), sim.current());
    while !sim.is_complete() {
        sim.step_sync()?;
        recorder.record(sim.current_step(), sim.current_time(), sim.current());
    }
    let Simulation { spatial, time, .. } = sim;
    Ok(SimRun {
        spatial,
        time,
        history: recorder.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use blight_grid::GridConfig;

    fn small_config() -> SolverConfig {
        // On a 5x5 grid the quadrature self-weight is large
        // (amplitude * dx * dy ~ 31), so beta must stay small for the
        // default amplitude to remain inside the envelope.
        SolverConfig {
            grid: GridConfig {
                resolution: 5,
                tau: 0.5,
                t_end: 2.0,
                ..GridConfig::default()
            },
            params: ModelParams {
                beta: 0.05,
                gamma: 0.1,
            },
            seed: SeedConfig {
                half_width: 0,
                value: 0.1,
            },
            ..SolverConfig::default()
        }
    }

    #[test]
    fn seeded_state_is_step_zero() {
        let sim = Simulation::new(&small_config()).unwrap();
        assert_eq!(sim.current_step(), StepId(0));
        assert_eq!(sim.current_time(), 0.0);
        assert!(!sim.is_complete());
        assert_eq!(sim.current().at(FieldKind::Infected, 2, 2), 0.1);
    }

    #[test]
    fn stepping_to_the_horizon_completes() {
        let mut sim = Simulation::new(&small_config()).unwrap();
        let mut steps = 0;
        while !sim.is_complete() {
            sim.step_sync().unwrap();
            steps += 1;
        }
        // [0, 2) at tau = 0.5: 4 points, 3 transitions.
        assert_eq!(steps, 3);
        assert_eq!(sim.current_step(), StepId(3));
        assert_eq!(sim.current_time(), 1.5);
    }

    #[test]
    fn stepping_past_the_horizon_fails() {
        let mut sim = Simulation::new(&small_config()).unwrap();
        while !sim.is_complete() {
            sim.step_sync().unwrap();
        }
        match sim.step_sync() {
            Err(StepError::HorizonExhausted { last }) => assert_eq!(last, StepId(3)),
            other => panic!("expected HorizonExhausted, got {other:?}"),
        }
    }

    #[test]
    fn with_kernel_rejects_mismatched_resolution() {
        let config = small_config();
        let other_grid =
            blight_grid::SpatialGrid::new((0.0, 1.0), (0.0, 1.0), 7).unwrap();
        let kernel = ContactKernel::build(&other_grid, &config.kernel).unwrap();
        match Simulation::with_kernel(&config, kernel) {
            Err(RunError::Step(StepError::DimensionMismatch { kernel: 7, grid: 5 })) => {}
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn with_kernel_accepts_matching_resolution() {
        let config = small_config();
        let (spatial, _) = config.grid.build().unwrap();
        let kernel = ContactKernel::build(&spatial, &config.kernel).unwrap();
        let sim = Simulation::with_kernel(&config, kernel).unwrap();
        assert_eq!(sim.current_step(), StepId(0));
    }

    #[test]
    fn failed_step_does_not_advance_state() {
        // beta = 1 with the default amplitude blows the envelope on
        // the very first transition of a coarse grid.
        let mut config = small_config();
        config.params.beta = 1.0;
        config.seed.half_width = 1;
        let mut sim = Simulation::new(&config).unwrap();
        let before = sim.current().clone();

        let err = sim.step_sync().unwrap_err();
        match err {
            StepError::Instability { step, .. } => assert_eq!(step, StepId(1)),
            other => panic!("expected Instability, got {other:?}"),
        }
        assert_eq!(sim.current_step(), StepId(0));
        assert_eq!(sim.current(), &before);
    }

    #[test]
    fn run_records_every_step_under_full_policy() {
        let result = run(&small_config()).unwrap();
        assert_eq!(result.history.len(), result.time.len());
        assert_eq!(result.history.first().unwrap().step, StepId(0));
        assert_eq!(result.history.last().unwrap().step, StepId(3));
        assert_eq!(result.spatial.resolution(), 5);
    }

    #[test]
    fn run_surfaces_instability_as_step_error() {
        let mut config = small_config();
        config.params.beta = 1.0;
        config.seed.half_width = 1;
        match run(&config) {
            Err(RunError::Step(StepError::Instability { .. })) => {}
            other => panic!("expected Step(Instability), got {other:?}"),
        }
    }

    #[test]
    fn run_surfaces_bad_config_as_config_error() {
        let mut config = small_config();
        config.grid.tau = 0.0;
        match run(&config) {
            Err(RunError::Config(ConfigError::Grid(_))) => {}
            other => panic!("expected Config(Grid), got {other:?}"),
        }
    }
}
