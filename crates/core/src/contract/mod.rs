//! Closed vocabularies shared by the engine and the output document.
//!
//! Everything a handler may name (activity kinds, object types,
//! qualifiers, O2O types, attribute names) is declared here once.

pub mod activity;
pub mod attributes;
pub mod object_type;
pub mod qualifier;
pub mod relationship_type;

pub use activity::Activity;
pub use object_type::ObjectType;
pub use qualifier::Qualifier;
pub use relationship_type::RelationshipType;
