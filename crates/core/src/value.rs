//! Attribute value type
//!
//! Event and object attributes carry either an integer or a string. The
//! wire form is the bare JSON scalar (`42`, `"paid"`), which is what
//! process-mining tools expect in an OCEL document.
//!
//! ## Equality Rules
//!
//! - Different variants are never equal (no coercion)
//! - `Int(1)` != `String("1")`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::Timestamp;

/// Value of a single event or object attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// 64-bit signed integer (ages, amounts, cycle numbers)
    Int(i64),

    /// UTF-8 string (enumerations, identifiers, formatted timestamps)
    String(String),
}

impl AttributeValue {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Int(_) => "Int",
            AttributeValue::String(_) => "String",
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(i) => write!(f, "{}", i),
            AttributeValue::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Int(i)
    }
}

impl From<u32> for AttributeValue {
    fn from(i: u32) -> Self {
        AttributeValue::Int(i64::from(i))
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

/// Timestamps stored as attribute values use the wire format.
impl From<Timestamp> for AttributeValue {
    fn from(t: Timestamp) -> Self {
        AttributeValue::String(t.to_string())
    }
}

impl PartialEq<&str> for AttributeValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
