//! Convenient imports for ocelgen.
//!
//! ```ignore
//! use ocelgen::prelude::*;
//!
//! let log = generate(GeneratorConfig::default(), &[["Payment", "Discharge"]])?;
//! ```

// Entry points
pub use crate::{generate, GeneratorConfig, LabelMap, LogBuilder};

// Error handling
pub use crate::{Error, Result};

// Data model
pub use crate::{
    Activity, AttributeValue, Event, Object, ObjectId, ObjectRelationship, ObjectType, OcelLog,
    Qualifier, RelationshipType, Schema, Timestamp,
};

// Export
pub use crate::export::{to_json_string, write_json};
