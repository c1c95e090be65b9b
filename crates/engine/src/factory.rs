//! Object factory
//!
//! One constructor per object type. Each builds the initial attribute
//! snapshot, registers the object and returns its id. Random draws are
//! made in attribute order, so the snapshot layout is part of the
//! determinism contract.
//!
//! Human-facing codes (`P-0004`, `DX-0004`, ...) always use four digits;
//! object ids use the allocator's pad width.

use ocelgen_core::contract::attributes::{diagnosis, dose, encounter, patient, plan, test};
use ocelgen_core::{AttributeEntry, ObjectId, ObjectType, Result, Timestamp};

use crate::state::LogState;

/// Minutes after a test is performed until its findings are recorded
pub const FINDINGS_DELAY_MINUTES: f64 = 15.0;
/// Minutes after a dose is given until its adverse event is recorded
pub const ADVERSE_EVENT_DELAY_MINUTES: f64 = 30.0;
/// Probability that a dose records an adverse event
pub const ADVERSE_EVENT_PROBABILITY: f64 = 0.2;

const SEXES: [&str; 2] = ["M", "F"];
const REASONS: [&str; 3] = ["StomachPain", "ChestPain", "ThroatPain"];
const FINDINGS: [&str; 2] = ["Suspicious", "Normal"];
const PRIMARY_SITES: [&str; 3] = ["Lung", "Stomach", "Breast"];
const STAGES: [&str; 4] = ["I", "II", "III", "IV"];
const INTENTS: [&str; 2] = ["curative", "palliative"];
const REGIMENS: [&str; 3] = ["FOLFOX", "FOLFIRI", "CAPOX"];
const DRUGS: [&str; 3] = ["pembrolizumab", "trastuzumab", "paclitaxel"];

fn code(prefix: &str, trace: usize) -> String {
    format!("{}-{:04}", prefix, trace)
}

/// `P-{trace:04}`
pub fn patient_code(trace: usize) -> String {
    code("P", trace)
}

/// Create the trace's Patient
pub fn create_patient(state: &mut LogState, trace: usize, at: Timestamp) -> Result<ObjectId> {
    let sex = state.sampler.choose(&SEXES);
    let age = state.sampler.int_in(20, 85);
    let initial = vec![
        AttributeEntry::new(patient::PATIENT_ID, at, patient_code(trace)),
        AttributeEntry::new(patient::SEX, at, sex),
        AttributeEntry::new(patient::AGE, at, age),
        AttributeEntry::new(patient::CONTRAINDICATIONS, at, "none"),
        AttributeEntry::new(patient::ALLERGIES, at, "none"),
        AttributeEntry::new(patient::STATUS, at, "Outpatient"),
        AttributeEntry::new(patient::CONDITION, at, "Stable"),
    ];
    state
        .store
        .create_object(&mut state.ids, ObjectType::Patient, initial)
}

/// Create the trace's Encounter, open and unpaid
pub fn create_encounter(state: &mut LogState, trace: usize, at: Timestamp) -> Result<ObjectId> {
    let reason = state.sampler.choose(&REASONS);
    let initial = vec![
        AttributeEntry::new(encounter::ENC_ID, at, code("E", trace)),
        AttributeEntry::new(encounter::PATIENT_ID, at, patient_code(trace)),
        AttributeEntry::new(encounter::TYPE, at, "Outpatient"),
        AttributeEntry::new(encounter::DEPT, at, "Oncology"),
        AttributeEntry::new(encounter::START_TIME, at, at),
        AttributeEntry::new(encounter::STATUS, at, "open"),
        AttributeEntry::new(encounter::REASON, at, reason),
        AttributeEntry::new(encounter::BILLING_STATUS, at, "unpaid"),
    ];
    state
        .store
        .create_object(&mut state.ids, ObjectType::Encounter, initial)
}

/// Create the `k`-th Test of a trace (1-based)
pub fn create_test(
    state: &mut LogState,
    trace: usize,
    k: usize,
    modality: &str,
    at: Timestamp,
) -> Result<ObjectId> {
    let id = state.ids.format_trace_scoped_id(ObjectType::Test, trace, k);
    let findings = state.sampler.choose(&FINDINGS);
    let initial = vec![
        AttributeEntry::new(test::TEST_ID, at, format!("{}-{}{}", code("T", trace), modality, k)),
        AttributeEntry::new(test::PATIENT_ID, at, patient_code(trace)),
        AttributeEntry::new(test::MODALITY, at, modality),
        AttributeEntry::new(test::PERFORM_TIME, at, at),
        AttributeEntry::new(test::RESULT_STATE, at, "Unreviewed"),
        AttributeEntry::new(test::FINDINGS, at.plus_minutes(FINDINGS_DELAY_MINUTES)?, findings),
    ];
    state.store.insert_object(id.clone(), ObjectType::Test, initial)?;
    Ok(id)
}

/// Create the trace's Diagnosis
pub fn create_diagnosis(state: &mut LogState, trace: usize, at: Timestamp) -> Result<ObjectId> {
    let site = state.sampler.choose(&PRIMARY_SITES);
    let stage = state.sampler.choose(&STAGES);
    let initial = vec![
        AttributeEntry::new(diagnosis::DX_ID, at, code("DX", trace)),
        AttributeEntry::new(diagnosis::PATIENT_ID, at, patient_code(trace)),
        AttributeEntry::new(diagnosis::PRIMARY_SITE, at, site),
        AttributeEntry::new(diagnosis::STAGE, at, stage),
        AttributeEntry::new(diagnosis::CONFIRM_TIME, at, at),
    ];
    state
        .store
        .create_object(&mut state.ids, ObjectType::Diagnosis, initial)
}

/// Create the trace's TreatmentPlan for an existing Diagnosis
pub fn create_plan(
    state: &mut LogState,
    trace: usize,
    dx: &ObjectId,
    at: Timestamp,
) -> Result<ObjectId> {
    let dx_code = state.store.required_attribute(dx, diagnosis::DX_ID)?;
    let intent = state.sampler.choose(&INTENTS);
    let regimen = state.sampler.choose(&REGIMENS);
    let initial = vec![
        AttributeEntry::new(plan::PLAN_ID, at, code("PLAN", trace)),
        AttributeEntry::new(plan::PATIENT_ID, at, patient_code(trace)),
        AttributeEntry::new(plan::DX_ID, at, dx_code),
        AttributeEntry::new(plan::INTENT, at, intent),
        AttributeEntry::new(plan::PRIMARY_MODALITY, at, "medication"),
        AttributeEntry::new(plan::REGIMEN, at, regimen),
        AttributeEntry::new(plan::STATUS, at, "Planned"),
    ];
    state
        .store
        .create_object(&mut state.ids, ObjectType::TreatmentPlan, initial)
}

/// Create the `k`-th Dose of a trace (1-based) under a TreatmentPlan
pub fn create_dose(
    state: &mut LogState,
    trace: usize,
    k: usize,
    plan_id: &ObjectId,
    at: Timestamp,
) -> Result<ObjectId> {
    let id = state.ids.format_trace_scoped_id(ObjectType::Dose, trace, k);
    let plan_code = state.store.required_attribute(plan_id, plan::PLAN_ID)?;
    let drug = state.sampler.choose(&DRUGS);
    let amount = state.sampler.int_in(100, 500);
    let adverse = if state.sampler.chance(ADVERSE_EVENT_PROBABILITY) {
        "Nausea"
    } else {
        "None"
    };
    let initial = vec![
        AttributeEntry::new(dose::ADMIN_ID, at, format!("{}-{}", code("D", trace), k)),
        AttributeEntry::new(dose::PATIENT_ID, at, patient_code(trace)),
        AttributeEntry::new(dose::PLAN_ID, at, plan_code),
        AttributeEntry::new(dose::DRUG_NAME, at, drug),
        AttributeEntry::new(dose::AMOUNT, at, amount),
        AttributeEntry::new(dose::ROUTE, at, "IV"),
        AttributeEntry::new(dose::GIVEN_TIME, at, at),
        AttributeEntry::new(
            dose::ADVERSE_EVENT,
            at.plus_minutes(ADVERSE_EVENT_DELAY_MINUTES)?,
            adverse,
        ),
    ];
    state.store.insert_object(id.clone(), ObjectType::Dose, initial)?;
    Ok(id)
}
