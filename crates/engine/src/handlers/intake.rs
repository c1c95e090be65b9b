//! Registration and first consultation

use ocelgen_core::contract::attributes::{encounter, event};
use ocelgen_core::{Activity, Event, Qualifier, Result, Timestamp};

use super::ActivityHandler;
use crate::context::TraceContext;
use crate::state::LogState;

const PHYSICIANS: [&str; 3] = ["Dr. Kim", "Dr. Cha", "Dr.Jung"];
const DEPARTMENTS: [&str; 2] = ["Oncology", "Surgery"];

/// Front-desk registration; rotates over three reception desks by trace
pub struct OutpatientRegistration;

impl ActivityHandler for OutpatientRegistration {
    fn activity(&self) -> Activity {
        Activity::OutpatientRegistration
    }

    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event> {
        let desk = format!("Outpatient {}", (ctx.index % 3) + 1);
        Ok(ctx
            .event(state, self.activity(), at, Qualifier::Encounter)
            .with_attribute(event::RECEPTION_DESK, desk))
    }
}

/// First consultation; records the attending physician on the Encounter
pub struct InitialVisit;

impl ActivityHandler for InitialVisit {
    fn activity(&self) -> Activity {
        Activity::InitialVisit
    }

    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event> {
        let physician = state.sampler.choose(&PHYSICIANS);
        state
            .store
            .append_attribute(&ctx.encounter, encounter::ATTENDING, at, physician)?;
        let department = state.sampler.choose(&DEPARTMENTS);
        Ok(ctx
            .event(state, self.activity(), at, Qualifier::Encounter)
            .with_attribute(event::DEPARTMENT, department)
            .with_attribute(event::ATTENDING_PHYSICIAN, physician))
    }
}
