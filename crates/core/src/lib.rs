//! Core types for ocelgen
//!
//! This crate defines the canonical data model shared by the engine and
//! the public facade:
//! - [`contract`]: closed vocabularies (activities, object types,
//!   qualifiers, O2O types, attribute names)
//! - [`primitives`]: event, object and O2O records
//! - [`schema`]: pass-through schema dictionaries
//! - [`OcelLog`]: the output document
//! - [`Error`]: the error type for every crate in the workspace

#![warn(missing_docs)]

pub mod contract;
pub mod error;
pub mod log;
pub mod primitives;
pub mod schema;
pub mod time;
pub mod types;
pub mod value;

pub use contract::{Activity, ObjectType, Qualifier, RelationshipType};
pub use error::{Error, Result};
pub use log::{LogSummary, OcelLog};
pub use primitives::{
    Attribute, AttributeEntry, Event, EventRelationship, Object, ObjectRelationship,
};
pub use schema::{Schema, TypeDeclaration};
pub use time::Timestamp;
pub use types::ObjectId;
pub use value::AttributeValue;
