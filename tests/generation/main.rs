//! Generation Test Suite
//!
//! End-to-end checks of the trace-to-log engine through the public
//! `ocelgen` facade.
//!
//! ## Running Tests
//!
//! ```bash
//! # Everything
//! cargo test --test generation
//!
//! # Property tests only
//! cargo test --test generation invariants::
//! ```

use std::collections::BTreeMap;

use ocelgen::prelude::*;

pub mod determinism;
pub mod export;
pub mod invariants;
pub mod scenarios;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Every activity once, in pathway order
pub const FULL_TRACE: [&str; 9] = [
    "OutpatientRegistration",
    "InitialVisit",
    "ImagingTest",
    "LabTest",
    "FollowUpVisit",
    "JointConsult",
    "MedicationTreatment",
    "Payment",
    "Discharge",
];

/// Build a log with the default configuration
pub fn build(traces: &[Vec<&str>]) -> OcelLog {
    generate(GeneratorConfig::default(), traces).expect("generation failed")
}

/// Build a log with a given seed
pub fn build_seeded(seed: u64, traces: &[Vec<&str>]) -> OcelLog {
    generate(GeneratorConfig::default().with_seed(seed), traces).expect("generation failed")
}

/// Events grouped by their subject Patient, in emission order
///
/// Patients are created one per trace, so the map is keyed by trace.
pub fn events_by_patient(log: &OcelLog) -> BTreeMap<ObjectId, Vec<&Event>> {
    let mut grouped: BTreeMap<ObjectId, Vec<&Event>> = BTreeMap::new();
    for event in &log.events {
        let subject = event.subject().expect("event without subject").clone();
        grouped.entry(subject).or_default().push(event);
    }
    grouped
}

/// Patient ids in trace order
pub fn patients(log: &OcelLog) -> Vec<ObjectId> {
    log.objects_of(ObjectType::Patient).map(|o| o.id.clone()).collect()
}

/// Count objects of one type
pub fn count(log: &OcelLog, object_type: ObjectType) -> usize {
    log.objects_of(object_type).count()
}
