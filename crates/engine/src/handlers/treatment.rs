//! Consult and medication
//!
//! Both activities establish the trace's Diagnosis and TreatmentPlan on
//! first use; a trace may reach medication without a prior consult.

use ocelgen_core::contract::attributes::{event, plan};
use ocelgen_core::{Activity, Event, Qualifier, Result, Timestamp};

use super::ActivityHandler;
use crate::context::TraceContext;
use crate::state::LogState;

const CARE_TEAM: &str = "OncologySurgeryRadiology";

/// Multidisciplinary consult
pub struct JointConsult;

impl ActivityHandler for JointConsult {
    fn activity(&self) -> Activity {
        Activity::JointConsult
    }

    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event> {
        let (dx, plan_id) = ctx.ensure_care_plan(state, at)?;
        Ok(ctx
            .event(state, self.activity(), at, Qualifier::Encounter)
            .with_attribute(event::CARE_TEAM, CARE_TEAM)
            .with_relationship(&dx, Qualifier::Diagnosis)
            .with_relationship(&plan_id, Qualifier::Plan))
    }
}

/// One medication cycle: a new Dose under the plan, which moves to `Proceed`
pub struct MedicationTreatment;

impl ActivityHandler for MedicationTreatment {
    fn activity(&self) -> Activity {
        Activity::MedicationTreatment
    }

    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event> {
        let (_, plan_id) = ctx.ensure_care_plan(state, at)?;
        let dose_id = ctx.administer_dose(state, &plan_id, at)?;
        state
            .store
            .append_attribute(&plan_id, plan::STATUS, at, "Proceed")?;
        Ok(ctx
            .event(state, self.activity(), at, Qualifier::Encounter)
            .with_attribute(event::CYCLE_NUMBER, ctx.med_cycles)
            .with_relationship(&plan_id, Qualifier::Plan)
            .with_relationship(&dose_id, Qualifier::DrugAdmin))
    }
}
