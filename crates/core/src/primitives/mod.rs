//! Record types for the three log collections
//!
//! - [`Event`]: immutable, appended once per replayed activity
//! - [`Object`]: mutable only by appending attribute history
//! - [`ObjectRelationship`]: immutable O2O link
//!
//! The engine owns the collections; these are the shared definitions.

pub mod event;
pub mod object;
pub mod relationship;

pub use event::{Attribute, Event, EventRelationship};
pub use object::{AttributeEntry, Object};
pub use relationship::ObjectRelationship;
