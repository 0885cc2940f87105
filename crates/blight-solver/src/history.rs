//! Retained time series of field states.
//!
//! The recorder is a collaborator of the stepping loop, not part of the
//! integrator: memory growth is decoupled from simulation length by the
//! retention policy. `Full` reproduces the reference behavior of
//! keeping every step for the visualizer; `LastK` keeps a sliding
//! window when only the tail matters.

use std::collections::VecDeque;

use crate::fields::FieldPair;
use blight_core::StepId;

/// How many frames the recorder retains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryPolicy {
    /// Keep every recorded frame (O(T·N²) memory over a full run).
    Full,
    /// Keep only the most recent `k` frames. Must be at least 1.
    LastK(usize),
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self::Full
    }
}

/// One retained time point: the step, its physical time, and the fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Step index within the time grid.
    pub step: StepId,
    /// Physical time of the step.
    pub time: f64,
    /// Field state at that time.
    pub fields: FieldPair,
}

/// Accumulates frames during a run according to a [`HistoryPolicy`].
#[derive(Debug)]
pub struct HistoryRecorder {
    policy: HistoryPolicy,
    frames: VecDeque<Frame>,
}

impl HistoryRecorder {
    /// Create a recorder with the given retention policy.
    pub fn new(policy: HistoryPolicy) -> Self {
        Self {
            policy,
            frames: VecDeque::new(),
        }
    }

    /// Record one frame, evicting the oldest under `LastK`.
    pub fn record(&mut self, step: StepId, time: f64, fields: &FieldPair) {
        if let HistoryPolicy::LastK(k) = self.policy {
            // LastK(0) is rejected at config validation; treat it as
            // LastK(1) here rather than draining forever.
            while self.frames.len() >= k.max(1) {
                self.frames.pop_front();
            }
        }
        self.frames.push_back(Frame {
            step,
            time,
            fields: fields.clone(),
        });
    }

    /// Finish recording and hand the retained frames over.
    pub fn finish(self) -> History {
        History {
            frames: Vec::from(self.frames),
        }
    }
}

/// The ordered sequence of retained frames from a run.
///
/// Together with the coordinate grids this is the solver's entire
/// contract to the external visualizer.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    frames: Vec<Frame>,
}

impl History {
    /// Number of retained frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing was retained.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// A retained frame by position (not step index, under `LastK`).
    pub fn frame(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    /// The earliest retained frame.
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// The most recent retained frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Iterate over the retained frames in time order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}
