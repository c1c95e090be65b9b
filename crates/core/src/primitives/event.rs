//! Event records
//!
//! Events are immutable once appended to the log. Attribute and
//! relationship order is fixed at creation and preserved on the wire.

use serde::{Deserialize, Serialize};

use crate::contract::{Activity, Qualifier};
use crate::time::Timestamp;
use crate::types::ObjectId;
use crate::value::AttributeValue;

/// A named attribute value without its own timestamp
///
/// Used for event attributes and (reserved) O2O attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Attribute value
    pub value: AttributeValue,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An event-to-object link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRelationship {
    /// Target object
    pub object_id: ObjectId,
    /// Role of the object in the event
    pub qualifier: Qualifier,
}

/// An event in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event id (`e{n}`)
    pub id: String,
    /// Event type
    #[serde(rename = "type")]
    pub event_type: Activity,
    /// When the event happened
    pub time: Timestamp,
    /// Attributes fixed at creation
    pub attributes: Vec<Attribute>,
    /// Related objects, subject first
    pub relationships: Vec<EventRelationship>,
}

impl Event {
    /// Start an event with no attributes or relationships
    pub fn new(id: impl Into<String>, event_type: Activity, time: Timestamp) -> Self {
        Self {
            id: id.into(),
            event_type,
            time,
            attributes: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Append an attribute
    pub fn with_attribute(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Append a relationship
    pub fn with_relationship(mut self, object_id: &ObjectId, qualifier: Qualifier) -> Self {
        self.relationships.push(EventRelationship {
            object_id: object_id.clone(),
            qualifier,
        });
        self
    }

    /// Value of the first attribute with this name
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.iter().find(|a| a.name == name).map(|a| &a.value)
    }

    /// Objects related under a qualifier, in order
    pub fn related(&self, qualifier: Qualifier) -> impl Iterator<Item = &ObjectId> {
        self.relationships
            .iter()
            .filter(move |r| r.qualifier == qualifier)
            .map(|r| &r.object_id)
    }

    /// The Patient this event is about
    pub fn subject(&self) -> Option<&ObjectId> {
        self.related(Qualifier::Subject).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Timestamp {
        Timestamp::from_ymd_hms(2025, 8, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn wire_shape() {
        let pat = ObjectId::from("pat-001");
        let e = Event::new("e1", Activity::Payment, t0())
            .with_attribute("PaymentAmount", 120000i64)
            .with_relationship(&pat, Qualifier::Subject);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "e1",
                "type": "Payment",
                "time": "2025-08-01T09:00:00Z",
                "attributes": [{"name": "PaymentAmount", "value": 120000}],
                "relationships": [{"objectId": "pat-001", "qualifier": "subject"}]
            })
        );
    }

    #[test]
    fn related_filters_by_qualifier() {
        let e = Event::new("e2", Activity::FollowUpVisit, t0())
            .with_relationship(&ObjectId::from("pat-001"), Qualifier::Subject)
            .with_relationship(&ObjectId::from("test-001-1"), Qualifier::ReviewedTest)
            .with_relationship(&ObjectId::from("test-001-2"), Qualifier::ReviewedTest);
        let reviewed: Vec<_> = e.related(Qualifier::ReviewedTest).map(|o| o.as_str()).collect();
        assert_eq!(reviewed, vec!["test-001-1", "test-001-2"]);
        assert_eq!(e.subject().map(|o| o.as_str()), Some("pat-001"));
    }
}
