//! Per-trace execution context
//!
//! A [`TraceContext`] threads object ids through one trace. It holds ids
//! only; every attribute read or write goes through the
//! [`ObjectStore`](crate::store::ObjectStore). Lifecycle:
//!
//! 1. [`TraceContext::open`] creates the Patient and Encounter at trace start
//! 2. handlers fill in tests, doses, diagnosis and plan as the trace replays
//! 3. the relationship emitter reads the final state, then the context is dropped

use ocelgen_core::{Activity, Event, ObjectId, Qualifier, Result, Timestamp};

use crate::factory;
use crate::state::LogState;

/// Mutable state of one trace
#[derive(Debug, Clone)]
pub struct TraceContext {
    /// 1-based trace index across the whole run
    pub index: usize,
    /// Trace start time
    pub start_time: Timestamp,
    /// The trace's Patient
    pub patient: ObjectId,
    /// The trace's Encounter
    pub encounter: ObjectId,
    /// Diagnosis, once a consult or medication has established it
    pub diagnosis: Option<ObjectId>,
    /// TreatmentPlan, created right after the diagnosis
    pub plan: Option<ObjectId>,
    /// Tests in order of creation
    pub tests: Vec<ObjectId>,
    /// Doses in order of administration
    pub doses: Vec<ObjectId>,
    /// Medication cycles administered so far
    pub med_cycles: u32,
}

impl TraceContext {
    /// Create the trace's Patient and Encounter, both stamped at `start_time`
    pub fn open(state: &mut LogState, index: usize, start_time: Timestamp) -> Result<Self> {
        let patient = factory::create_patient(state, index, start_time)?;
        let encounter = factory::create_encounter(state, index, start_time)?;
        Ok(Self {
            index,
            start_time,
            patient,
            encounter,
            diagnosis: None,
            plan: None,
            tests: Vec::new(),
            doses: Vec::new(),
            med_cycles: 0,
        })
    }

    /// Start an event linked to the Patient (`subject`) and the Encounter
    /// under `encounter_qualifier`
    pub fn event(
        &self,
        state: &mut LogState,
        activity: Activity,
        at: Timestamp,
        encounter_qualifier: Qualifier,
    ) -> Event {
        state
            .new_event(activity, at)
            .with_relationship(&self.patient, Qualifier::Subject)
            .with_relationship(&self.encounter, encounter_qualifier)
    }

    /// Diagnosis and TreatmentPlan ids, creating whichever is missing
    ///
    /// Each is created at most once per trace.
    pub fn ensure_care_plan(
        &mut self,
        state: &mut LogState,
        at: Timestamp,
    ) -> Result<(ObjectId, ObjectId)> {
        let dx = match &self.diagnosis {
            Some(dx) => dx.clone(),
            None => {
                let dx = factory::create_diagnosis(state, self.index, at)?;
                self.diagnosis = Some(dx.clone());
                dx
            }
        };
        let plan = match &self.plan {
            Some(plan) => plan.clone(),
            None => {
                let plan = factory::create_plan(state, self.index, &dx, at)?;
                self.plan = Some(plan.clone());
                plan
            }
        };
        Ok((dx, plan))
    }

    /// Create the next Test of this trace
    pub fn order_test(
        &mut self,
        state: &mut LogState,
        modality: &str,
        at: Timestamp,
    ) -> Result<ObjectId> {
        let k = self.tests.len() + 1;
        let id = factory::create_test(state, self.index, k, modality, at)?;
        self.tests.push(id.clone());
        Ok(id)
    }

    /// Create the next Dose of this trace under `plan`
    pub fn administer_dose(
        &mut self,
        state: &mut LogState,
        plan: &ObjectId,
        at: Timestamp,
    ) -> Result<ObjectId> {
        let k = self.doses.len() + 1;
        let id = factory::create_dose(state, self.index, k, plan, at)?;
        self.doses.push(id.clone());
        self.med_cycles += 1;
        Ok(id)
    }
}
