//! The output document
//!
//! Field names and nesting are a stable contract for downstream
//! process-mining tools:
//!
//! ```json
//! {
//!   "eventTypes": [...],
//!   "objectTypes": [...],
//!   "events": [...],
//!   "objects": [...],
//!   "objectRelationshipTypes": [...],
//!   "objectRelationships": [...]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::contract::ObjectType;
use crate::primitives::{Event, Object, ObjectRelationship};
use crate::schema::TypeDeclaration;
use crate::types::ObjectId;

/// A fully materialized object-centric event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcelLog {
    /// Event-type schema, verbatim
    pub event_types: Vec<TypeDeclaration>,
    /// Object-type schema, verbatim
    pub object_types: Vec<TypeDeclaration>,
    /// Events in emission order
    pub events: Vec<Event>,
    /// Objects in creation order
    pub objects: Vec<Object>,
    /// O2O-type schema, verbatim
    pub object_relationship_types: Vec<TypeDeclaration>,
    /// O2O records in emission order
    pub object_relationships: Vec<ObjectRelationship>,
}

impl OcelLog {
    /// Find an object by id (linear scan)
    pub fn object(&self, id: &ObjectId) -> Option<&Object> {
        self.objects.iter().find(|o| &o.id == id)
    }

    /// Objects of one type, in creation order
    pub fn objects_of(&self, object_type: ObjectType) -> impl Iterator<Item = &Object> {
        self.objects
            .iter()
            .filter(move |o| o.object_type == object_type)
    }

    /// Collection sizes
    pub fn summary(&self) -> LogSummary {
        LogSummary {
            events: self.events.len(),
            objects: self.objects.len(),
            object_relationships: self.object_relationships.len(),
        }
    }
}

/// Collection sizes of a log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSummary {
    /// Number of events
    pub events: usize,
    /// Number of objects
    pub objects: usize,
    /// Number of O2O records
    pub object_relationships: usize,
}

impl fmt::Display for LogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated OCEL with {} events, {} objects, {} O2O relations.",
            self.events, self.objects, self.object_relationships
        )
    }
}
