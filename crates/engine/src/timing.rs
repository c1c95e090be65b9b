//! Timing model
//!
//! Trace `i` (1-based) starts `i - 1` hours after the base time. Inside a
//! trace every activity boundary advances the cursor by the same step,
//! sampled once per trace from `Normal(mean, std)` minutes and floored at
//! [`MIN_STEP_MINUTES`]. Spacing is uniform within a trace and varies
//! across traces; the positive floor keeps timestamps strictly increasing.

use rand_distr::Normal;
use tracing::warn;

use ocelgen_core::{Error, Result, Timestamp};

use crate::sampler::Sampler;

/// Lower bound on the per-trace step
pub const MIN_STEP_MINUTES: f64 = 10.0;

/// Trace start times and per-trace step sampling
#[derive(Debug, Clone)]
pub struct TimingModel {
    base_time: Timestamp,
    step: Normal<f64>,
}

impl TimingModel {
    /// Create a timing model
    ///
    /// Fails with `InvalidConfig` if `std_minutes` is negative or either
    /// parameter is not finite.
    pub fn new(base_time: Timestamp, mean_minutes: f64, std_minutes: f64) -> Result<Self> {
        if !mean_minutes.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "step mean must be finite, got {}",
                mean_minutes
            )));
        }
        if !std_minutes.is_finite() || std_minutes < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "step std must be finite and non-negative, got {}",
                std_minutes
            )));
        }
        let step = Normal::new(mean_minutes, std_minutes).map_err(|e| {
            Error::InvalidConfig(format!("step std {}: {}", std_minutes, e))
        })?;
        Ok(Self { base_time, step })
    }

    /// Base time of the first trace
    pub fn base_time(&self) -> Timestamp {
        self.base_time
    }

    /// Start time of trace `index` (1-based)
    pub fn trace_start(&self, index: usize) -> Result<Timestamp> {
        let hours = i64::try_from(index.saturating_sub(1))
            .map_err(|_| Error::InvalidConfig(format!("trace index {} too large", index)))?;
        self.base_time.plus_hours(hours)
    }

    /// Sample the step for one trace, in minutes
    pub fn sample_step(&self, sampler: &mut Sampler) -> f64 {
        let minutes = sampler.draw(&self.step);
        if minutes < MIN_STEP_MINUTES {
            warn!(sampled = minutes, floor = MIN_STEP_MINUTES, "step below floor");
            MIN_STEP_MINUTES
        } else {
            minutes
        }
    }
}
