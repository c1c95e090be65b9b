//! Activity vocabulary
//!
//! The closed set of activity kinds a trace may contain. Each variant is
//! also the event type of the event its handler emits.
//!
//! | Activity | Creates | Mutates |
//! |----------|---------|---------|
//! | OutpatientRegistration | - | - |
//! | InitialVisit | - | Encounter |
//! | ImagingTest | Test | - |
//! | LabTest | Test | - |
//! | FollowUpVisit | - | Test |
//! | JointConsult | Diagnosis, TreatmentPlan (lazily) | - |
//! | MedicationTreatment | Diagnosis, TreatmentPlan (lazily), Dose | TreatmentPlan |
//! | Payment | - | Encounter |
//! | Discharge | - | Encounter |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine activity kinds of the clinical pathway
///
/// ## Invariant
///
/// `ALL` lists every variant exactly once, in declaration order, and
/// `index()` is the position in `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Activity {
    /// Front-desk registration of an outpatient visit
    OutpatientRegistration,
    /// First consultation; assigns the attending physician
    InitialVisit,
    /// CT/MRI/PET order
    ImagingTest,
    /// Blood/pathology order
    LabTest,
    /// Return visit; reviews every test ordered so far
    FollowUpVisit,
    /// Multidisciplinary consult; establishes diagnosis and plan
    JointConsult,
    /// One medication cycle
    MedicationTreatment,
    /// Settles the encounter bill
    Payment,
    /// Closes the encounter
    Discharge,
}

impl Activity {
    /// All activities (for iteration and registry sizing)
    pub const ALL: [Activity; 9] = [
        Activity::OutpatientRegistration,
        Activity::InitialVisit,
        Activity::ImagingTest,
        Activity::LabTest,
        Activity::FollowUpVisit,
        Activity::JointConsult,
        Activity::MedicationTreatment,
        Activity::Payment,
        Activity::Discharge,
    ];

    /// Get all activities as a slice
    pub fn all() -> &'static [Activity] {
        &Self::ALL
    }

    /// Canonical label, also used as the emitted event type
    pub const fn name(&self) -> &'static str {
        match self {
            Activity::OutpatientRegistration => "OutpatientRegistration",
            Activity::InitialVisit => "InitialVisit",
            Activity::ImagingTest => "ImagingTest",
            Activity::LabTest => "LabTest",
            Activity::FollowUpVisit => "FollowUpVisit",
            Activity::JointConsult => "JointConsult",
            Activity::MedicationTreatment => "MedicationTreatment",
            Activity::Payment => "Payment",
            Activity::Discharge => "Discharge",
        }
    }

    /// Dense index into `ALL`
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a canonical label
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::from_name(s).ok_or_else(|| format!("unknown activity: {}", s))
    }
}
