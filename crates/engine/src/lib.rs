//! Trace-to-log materialization engine
//!
//! Turns traces of activity labels into a fully materialized
//! [`OcelLog`](ocelgen_core::OcelLog):
//!
//! - [`allocator`]: collision-free ids for events, objects and O2O records
//! - [`store`]: the object collection with append-only attribute history
//! - [`factory`]: initial attribute snapshots per object type
//! - [`context`]: per-trace state
//! - [`handlers`]: one handler per activity, dispatched through a registry
//! - [`emitter`]: O2O records derived after each trace
//! - [`builder`]: drives the run
//!
//! Supporting pieces: [`config`], [`labels`], [`sampler`], [`timing`].

#![warn(missing_docs)]

pub mod allocator;
pub mod builder;
pub mod config;
pub mod context;
pub mod emitter;
pub mod factory;
pub mod handlers;
pub mod labels;
pub mod sampler;
pub mod state;
pub mod store;
pub mod timing;

pub use allocator::{Counter, IdAllocator};
pub use builder::{generate, parse_traces, LogBuilder};
pub use config::GeneratorConfig;
pub use context::TraceContext;
pub use handlers::{ActivityHandler, HandlerRegistry};
pub use labels::LabelMap;
pub use sampler::Sampler;
pub use state::LogState;
pub use store::ObjectStore;
pub use timing::{TimingModel, MIN_STEP_MINUTES};
