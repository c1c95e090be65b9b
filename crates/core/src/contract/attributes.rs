//! Attribute names
//!
//! Handlers refer to attribute names only through these constants, so a
//! misspelt name is a compile error instead of a silently malformed log.
//! The names match the default schema in [`crate::schema`].

#![allow(missing_docs)]

/// Patient object attributes
pub mod patient {
    pub const PATIENT_ID: &str = "patient_id";
    pub const SEX: &str = "sex";
    pub const AGE: &str = "age";
    // Spelling follows the published object-type schema.
    pub const CONTRAINDICATIONS: &str = "contradindications";
    pub const ALLERGIES: &str = "allergies";
    pub const STATUS: &str = "status";
    pub const CONDITION: &str = "condition";
}

/// Test object attributes
pub mod test {
    pub const TEST_ID: &str = "test_id";
    pub const PATIENT_ID: &str = "patient_id";
    pub const MODALITY: &str = "modality";
    pub const PERFORM_TIME: &str = "perform_time";
    pub const RESULT_STATE: &str = "result_state";
    pub const FINDINGS: &str = "findings";
}

/// Encounter object attributes
pub mod encounter {
    pub const ENC_ID: &str = "enc_id";
    pub const PATIENT_ID: &str = "patient_id";
    pub const TYPE: &str = "type";
    pub const DEPT: &str = "dept";
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";
    pub const STATUS: &str = "status";
    pub const REASON: &str = "reason";
    pub const ATTENDING: &str = "attending";
    pub const BILLING_STATUS: &str = "billing_status";
    pub const BILLING_AMOUNT: &str = "billing_amount";
    pub const PAYMENT_METHOD: &str = "payment_method";
    pub const BILLING_TIME: &str = "billing_time";
}

/// Diagnosis object attributes
pub mod diagnosis {
    pub const DX_ID: &str = "dx_id";
    pub const PATIENT_ID: &str = "patient_id";
    pub const PRIMARY_SITE: &str = "primary_site";
    pub const STAGE: &str = "stage";
    pub const CONFIRM_TIME: &str = "confirm_time";
}

/// TreatmentPlan object attributes
pub mod plan {
    pub const PLAN_ID: &str = "plan_id";
    pub const PATIENT_ID: &str = "patient_id";
    pub const DX_ID: &str = "dx_id";
    pub const INTENT: &str = "intent";
    pub const PRIMARY_MODALITY: &str = "primary_modality";
    pub const REGIMEN: &str = "regimen";
    pub const STATUS: &str = "status";
}

/// Dose object attributes
pub mod dose {
    pub const ADMIN_ID: &str = "admin_id";
    pub const PATIENT_ID: &str = "patient_id";
    pub const PLAN_ID: &str = "plan_id";
    pub const DRUG_NAME: &str = "drug_name";
    pub const AMOUNT: &str = "amount";
    pub const ROUTE: &str = "route";
    pub const GIVEN_TIME: &str = "given_time";
    pub const ADVERSE_EVENT: &str = "adverse_event";
}

/// Event attributes, grouped by the activity that emits them
pub mod event {
    pub const RECEPTION_DESK: &str = "ReceptionDesk";
    pub const DEPARTMENT: &str = "Department";
    pub const ATTENDING_PHYSICIAN: &str = "AttendingPhysician";
    pub const TEST_TYPE: &str = "TestType";
    pub const ASSESSMENT: &str = "Assessment";
    pub const CARE_TEAM: &str = "CareTeam";
    pub const CYCLE_NUMBER: &str = "CycleNumber";
    pub const PAYMENT_METHOD: &str = "PaymentMethod";
    pub const PAYMENT_AMOUNT: &str = "PaymentAmount";
}
