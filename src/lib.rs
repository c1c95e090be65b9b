//! # ocelgen
//!
//! Synthesizes object-centric event logs (OCEL) for clinical care
//! pathways.
//!
//! Input is a list of traces, each an ordered list of activity labels.
//! Output is an [`OcelLog`]: events, versioned objects and
//! object-to-object relationships, ready for process-mining tools.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ocelgen::prelude::*;
//!
//! let traces = vec![
//!     vec!["OutpatientRegistration", "InitialVisit", "ImagingTest", "Discharge"],
//! ];
//!
//! let mut builder = LogBuilder::new(GeneratorConfig::default().with_seed(7))?;
//! builder.add_traces(&traces)?;
//! let log = builder.finish();
//!
//! ocelgen::export::write_json(&log, "ocel.json")?;
//! println!("{}", log.summary());
//! ```
//!
//! ## Human-readable labels
//!
//! Traces recorded with clinic vocabulary go through a [`LabelMap`] first:
//!
//! ```ignore
//! let activities = LabelMap::clinical_ko().translate(&[["외래 접수", "퇴원"]])?;
//! builder.add_activity_traces(&activities)?;
//! ```
//!
//! ## Crates
//!
//! - `ocelgen-core`: data model, schema dictionaries, error type
//! - `ocelgen-engine`: the trace-to-log engine

#![warn(missing_docs)]

pub mod export;
pub mod prelude;

// Re-export main entry points
pub use ocelgen_engine::{generate, GeneratorConfig, LabelMap, LogBuilder};

// Error handling
pub use ocelgen_core::{Error, Result};

// Data model
pub use ocelgen_core::{
    Activity, Attribute, AttributeEntry, AttributeValue, Event, EventRelationship, LogSummary,
    Object, ObjectId, ObjectRelationship, ObjectType, OcelLog, Qualifier, RelationshipType,
    Schema, Timestamp,
};

/// Attribute-name constants
pub use ocelgen_core::contract::attributes;

/// Engine internals, for callers that drive replay themselves
pub use ocelgen_engine as engine;
