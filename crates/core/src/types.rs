//! Identifier types
//!
//! - [`ObjectId`]: identifier of an object in the log

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an object (e.g. `pat-001`, `test-004-2`)
///
/// Stable for the lifetime of the object. Trace contexts and event
/// relationships hold `ObjectId`s, never the objects themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap an already-formatted identifier
    pub fn new(id: impl Into<String>) -> Self {
        ObjectId(id.into())
    }

    /// Borrow as str
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        ObjectId(s.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        ObjectId(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ObjectId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
