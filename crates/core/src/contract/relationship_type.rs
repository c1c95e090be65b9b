//! Object-to-object relationship types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ObjectType;

/// O2O relationship types, keyed by (source type, target type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    /// Encounter → Patient
    #[serde(rename = "Encounter-Patient")]
    EncounterPatient,
    /// TreatmentPlan → Dose
    #[serde(rename = "TreatmentPlan-Dose")]
    TreatmentPlanDose,
}

impl RelationshipType {
    /// All relationship types
    pub const ALL: [RelationshipType; 2] = [
        RelationshipType::EncounterPatient,
        RelationshipType::TreatmentPlanDose,
    ];

    /// Type name as it appears in the output document
    pub const fn name(&self) -> &'static str {
        match self {
            RelationshipType::EncounterPatient => "Encounter-Patient",
            RelationshipType::TreatmentPlanDose => "TreatmentPlan-Dose",
        }
    }

    /// Object type of the source end
    pub const fn source_type(&self) -> ObjectType {
        match self {
            RelationshipType::EncounterPatient => ObjectType::Encounter,
            RelationshipType::TreatmentPlanDose => ObjectType::TreatmentPlan,
        }
    }

    /// Object type of the target end
    pub const fn target_type(&self) -> ObjectType {
        match self {
            RelationshipType::EncounterPatient => ObjectType::Patient,
            RelationshipType::TreatmentPlanDose => ObjectType::Dose,
        }
    }

    /// Look up the type for a (source, target) pair
    pub fn between(source: ObjectType, target: ObjectType) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.source_type() == source && r.target_type() == target)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
