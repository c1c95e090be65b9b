//! Object records with attribute history
//!
//! An object's attributes are an append-only list of
//! `(name, time, value)` entries. Several entries may share a name; the
//! current value of an attribute is the value of the most recently
//! appended entry with that name. Entries are never removed or
//! overwritten, so the history doubles as an audit trail of state
//! transitions (e.g. an Encounter's `billing_status` going from `unpaid`
//! to `paid`).

use serde::{Deserialize, Serialize};

use crate::contract::ObjectType;
use crate::time::Timestamp;
use crate::types::ObjectId;
use crate::value::AttributeValue;

/// One entry in an object's attribute history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    /// Attribute name
    pub name: String,
    /// When this value took effect
    pub time: Timestamp,
    /// The value
    pub value: AttributeValue,
}

impl AttributeEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, time: Timestamp, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            time,
            value: value.into(),
        }
    }
}

/// An object in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Object id
    pub id: ObjectId,
    /// Object type
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// Attribute history, in append order
    pub attributes: Vec<AttributeEntry>,
}

impl Object {
    /// Create an object with an initial attribute snapshot
    pub fn new(id: ObjectId, object_type: ObjectType, initial: Vec<AttributeEntry>) -> Self {
        Self {
            id,
            object_type,
            attributes: initial,
        }
    }

    /// Append one history entry
    pub fn push(&mut self, entry: AttributeEntry) {
        self.attributes.push(entry);
    }

    /// Current value of an attribute (last appended entry with that name)
    pub fn current(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .rev()
            .find(|e| e.name == name)
            .map(|e| &e.value)
    }

    /// Every entry recorded for an attribute, oldest first
    pub fn history<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AttributeEntry> + 'a {
        self.attributes.iter().filter(move |e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(min: f64) -> Timestamp {
        Timestamp::from_ymd_hms(2025, 8, 1, 9, 0, 0)
            .unwrap()
            .plus_minutes(min)
            .unwrap()
    }

    fn encounter() -> Object {
        Object::new(
            ObjectId::from("enc-001"),
            ObjectType::Encounter,
            vec![
                AttributeEntry::new("status", at(0.0), "open"),
                AttributeEntry::new("billing_status", at(0.0), "unpaid"),
            ],
        )
    }

    #[test]
    fn current_is_last_appended() {
        let mut enc = encounter();
        assert_eq!(enc.current("billing_status").unwrap(), &"unpaid");
        enc.push(AttributeEntry::new("billing_status", at(90.0), "paid"));
        assert_eq!(enc.current("billing_status").unwrap(), &"paid");
        assert_eq!(enc.current("status").unwrap(), &"open");
    }

    #[test]
    fn absent_attribute() {
        assert!(encounter().current("end_time").is_none());
    }

    #[test]
    fn history_keeps_every_transition() {
        let mut enc = encounter();
        enc.push(AttributeEntry::new("billing_status", at(90.0), "paid"));
        let values: Vec<_> = enc
            .history("billing_status")
            .map(|e| e.value.to_string())
            .collect();
        assert_eq!(values, vec!["unpaid", "paid"]);
        assert_eq!(enc.attributes.len(), 3);
    }

    #[test]
    fn wire_shape() {
        let json = serde_json::to_value(&encounter()).unwrap();
        assert_eq!(json["id"], "enc-001");
        assert_eq!(json["type"], "Encounter");
        assert_eq!(
            json["attributes"][0],
            serde_json::json!({"name": "status", "time": "2025-08-01T09:00:00Z", "value": "open"})
        );
    }
}
