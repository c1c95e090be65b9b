//! Error types for log generation.
//!
//! Every failure is fatal to the run that raised it: generation is a
//! deterministic single-pass batch transformation, so there is nothing to
//! retry and no partial result worth keeping.

use thiserror::Error;

/// All ocelgen errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A trace contains a label outside the canonical activity vocabulary
    #[error("unknown activity label {label:?} in trace {trace} at position {position}")]
    UnknownActivity {
        /// The offending label
        label: String,
        /// 1-based trace index
        trace: usize,
        /// 1-based position of the label inside the trace
        position: usize,
    },

    /// Human-readable labels with no entry in the label map (sorted, unique)
    #[error("unmapped labels found: {0:?}")]
    UnmappedLabels(Vec<String>),

    /// Attribute mutation or lookup against an object id that was never created
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// An object id was registered twice
    #[error("duplicate object id: {0}")]
    DuplicateObject(String),

    /// Generator configuration is unusable
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for ocelgen operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the caller supplied bad input (traces, labels or config).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::UnknownActivity { .. } | Error::UnmappedLabels(_) | Error::InvalidConfig(_)
        )
    }

    /// Check if this is an internal-consistency failure (a bug in the engine).
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::ObjectNotFound(_) | Error::DuplicateObject(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
