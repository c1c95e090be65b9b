//! Event-to-object relationship qualifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role an object plays in an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    /// The trace's Patient; present on every event
    Subject,
    /// The trace's Encounter
    Encounter,
    /// The trace's Encounter, on Payment events
    BillingEncounter,
    /// A Test ordered by this event
    Order,
    /// A Test reviewed by this event
    ReviewedTest,
    /// The trace's Diagnosis
    Diagnosis,
    /// The trace's TreatmentPlan
    Plan,
    /// A Dose administered by this event
    DrugAdmin,
}

impl Qualifier {
    /// Wire string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Qualifier::Subject => "subject",
            Qualifier::Encounter => "encounter",
            Qualifier::BillingEncounter => "billing_encounter",
            Qualifier::Order => "order",
            Qualifier::ReviewedTest => "reviewed_test",
            Qualifier::Diagnosis => "diagnosis",
            Qualifier::Plan => "plan",
            Qualifier::DrugAdmin => "drug_admin",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_as_str() {
        for q in [
            Qualifier::Subject,
            Qualifier::Encounter,
            Qualifier::BillingEncounter,
            Qualifier::Order,
            Qualifier::ReviewedTest,
            Qualifier::Diagnosis,
            Qualifier::Plan,
            Qualifier::DrugAdmin,
        ] {
            assert_eq!(serde_json::to_string(&q).unwrap(), format!("\"{}\"", q.as_str()));
        }
    }
}
