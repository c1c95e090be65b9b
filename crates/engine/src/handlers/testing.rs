//! Test orders and result review

use ocelgen_core::contract::attributes::{event, test};
use ocelgen_core::{Activity, Event, Qualifier, Result, Timestamp};

use super::ActivityHandler;
use crate::context::TraceContext;
use crate::state::LogState;

const IMAGING_MODALITIES: &[&str] = &["CT", "MRI", "PET"];
const LAB_MODALITIES: &[&str] = &["Blood", "Pathology"];
const ASSESSMENTS: [&str; 3] = ["AdditionalTesting", "TreatmentPlanning", "Monitoring"];

/// Orders one Test with a modality drawn from a fixed table
pub struct OrderTest {
    activity: Activity,
    modalities: &'static [&'static str],
}

impl OrderTest {
    /// CT, MRI or PET
    pub fn imaging() -> Self {
        Self {
            activity: Activity::ImagingTest,
            modalities: IMAGING_MODALITIES,
        }
    }

    /// Blood or pathology
    pub fn lab() -> Self {
        Self {
            activity: Activity::LabTest,
            modalities: LAB_MODALITIES,
        }
    }
}

impl ActivityHandler for OrderTest {
    fn activity(&self) -> Activity {
        self.activity
    }

    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event> {
        let modality = state.sampler.choose(self.modalities);
        let test_id = ctx.order_test(state, modality, at)?;
        Ok(ctx
            .event(state, self.activity, at, Qualifier::Encounter)
            .with_attribute(event::TEST_TYPE, modality)
            .with_relationship(&test_id, Qualifier::Order))
    }
}

/// Return visit; marks every Test ordered so far as reviewed
pub struct FollowUpVisit;

impl ActivityHandler for FollowUpVisit {
    fn activity(&self) -> Activity {
        Activity::FollowUpVisit
    }

    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event> {
        for test_id in &ctx.tests {
            state
                .store
                .append_attribute(test_id, test::RESULT_STATE, at, "Reviewed")?;
        }
        let assessment = state.sampler.choose(&ASSESSMENTS);
        let event = ctx
            .event(state, self.activity(), at, Qualifier::Encounter)
            .with_attribute(event::ASSESSMENT, assessment);
        Ok(ctx
            .tests
            .iter()
            .fold(event, |e, test_id| e.with_relationship(test_id, Qualifier::ReviewedTest)))
    }
}
