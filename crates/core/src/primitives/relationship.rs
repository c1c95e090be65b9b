//! Object-to-object relationship records

use serde::{Deserialize, Serialize};

use super::event::Attribute;
use crate::contract::RelationshipType;
use crate::time::Timestamp;
use crate::types::ObjectId;

/// A standing link between two objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRelationship {
    /// Relationship id (`or{n}`)
    pub id: String,
    /// Relationship type
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    /// When the link was established
    pub time: Timestamp,
    /// Source object
    pub source_object: ObjectId,
    /// Target object
    pub target_object: ObjectId,
    /// Always empty; reserved for extension
    pub attributes: Vec<Attribute>,
}

impl ObjectRelationship {
    /// Create a relationship with no attributes
    pub fn new(
        id: impl Into<String>,
        relationship_type: RelationshipType,
        time: Timestamp,
        source_object: ObjectId,
        target_object: ObjectId,
    ) -> Self {
        Self {
            id: id.into(),
            relationship_type,
            time,
            source_object,
            target_object,
            attributes: Vec::new(),
        }
    }
}
