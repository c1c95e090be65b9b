//! Object type vocabulary
//!
//! | Type | Id prefix | Id source |
//! |------|-----------|-----------|
//! | Patient | pat | allocator |
//! | Test | test | trace-scoped |
//! | Encounter | enc | allocator |
//! | Diagnosis | dx | allocator |
//! | TreatmentPlan | plan | allocator |
//! | Dose | med | trace-scoped |

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six object types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectType {
    /// The person whose pathway a trace describes
    Patient,
    /// An ordered imaging or lab test
    Test,
    /// The visit/admission that frames one trace
    Encounter,
    /// Established once per trace on first need
    Diagnosis,
    /// Established once per trace on first need
    TreatmentPlan,
    /// One medication administration
    Dose,
}

impl ObjectType {
    /// All object types
    pub const ALL: [ObjectType; 6] = [
        ObjectType::Patient,
        ObjectType::Test,
        ObjectType::Encounter,
        ObjectType::Diagnosis,
        ObjectType::TreatmentPlan,
        ObjectType::Dose,
    ];

    /// Type name as it appears in the output document
    pub const fn name(&self) -> &'static str {
        match self {
            ObjectType::Patient => "Patient",
            ObjectType::Test => "Test",
            ObjectType::Encounter => "Encounter",
            ObjectType::Diagnosis => "Diagnosis",
            ObjectType::TreatmentPlan => "TreatmentPlan",
            ObjectType::Dose => "Dose",
        }
    }

    /// Identifier prefix
    pub const fn id_prefix(&self) -> &'static str {
        match self {
            ObjectType::Patient => "pat",
            ObjectType::Test => "test",
            ObjectType::Encounter => "enc",
            ObjectType::Diagnosis => "dx",
            ObjectType::TreatmentPlan => "plan",
            ObjectType::Dose => "med",
        }
    }

    /// Dense index into `ALL`
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a type name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
