//! Generator configuration
//!
//! All fields are optional and fall back to documented defaults:
//!
//! | Field | Default |
//! |-------|---------|
//! | `base_time` | `2025-08-01T09:00:00Z` |
//! | `step_mean_minutes` | 30.0 |
//! | `step_std_minutes` | 10.0 |
//! | `id_pad_width` | 3 |
//! | `seed` | 42 |
//! | `schema` | [`Schema::clinical`] |
//!
//! Configuration can be built in code with the `with_*` setters or read
//! from TOML:
//!
//! ```toml
//! seed = 123
//! step_mean_minutes = 45.0
//! step_std_minutes = 15.0
//! base_time = "2025-08-01T09:00:00Z"
//! ```

use std::path::Path;

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use ocelgen_core::{Error, Result, Schema, Timestamp};

use crate::timing::TimingModel;

/// Largest accepted zero-pad width for object ids
pub const MAX_PAD_WIDTH: usize = 12;

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Start time of the first trace
    pub base_time: Timestamp,
    /// Mean of the per-trace step, in minutes
    pub step_mean_minutes: f64,
    /// Standard deviation of the per-trace step, in minutes
    pub step_std_minutes: f64,
    /// Zero-pad width of object sequence numbers
    pub id_pad_width: usize,
    /// Random seed
    pub seed: u64,
    /// Schema dictionaries copied into the output document
    pub schema: Schema,
}

fn default_base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
        .into()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_time: default_base_time(),
            step_mean_minutes: 30.0,
            step_std_minutes: 10.0,
            id_pad_width: 3,
            seed: 42,
            schema: Schema::clinical(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the step distribution (minutes)
    pub fn with_step(mut self, mean_minutes: f64, std_minutes: f64) -> Self {
        self.step_mean_minutes = mean_minutes;
        self.step_std_minutes = std_minutes;
        self
    }

    /// Set the base time
    pub fn with_base_time(mut self, base_time: Timestamp) -> Self {
        self.base_time = base_time;
        self
    }

    /// Set the object id pad width
    pub fn with_pad_width(mut self, width: usize) -> Self {
        self.id_pad_width = width;
        self
    }

    /// Replace the schema dictionaries
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.id_pad_width == 0 || self.id_pad_width > MAX_PAD_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "id_pad_width must be in 1..={}, got {}",
                MAX_PAD_WIDTH, self.id_pad_width
            )));
        }
        self.timing().map(|_| ())
    }

    /// Build the timing model for these settings
    pub fn timing(&self) -> Result<TimingModel> {
        TimingModel::new(self.base_time, self.step_mean_minutes, self.step_std_minutes)
    }
}
