//! Activity handlers
//!
//! One handler per [`Activity`]. A handler consumes the trace context and
//! the cursor time, creates or updates objects through the store, and
//! returns exactly one event. The builder appends the event; handlers
//! never touch the event list.
//!
//! | Module | Activities |
//! |--------|------------|
//! | [`intake`] | OutpatientRegistration, InitialVisit |
//! | [`testing`] | ImagingTest, LabTest, FollowUpVisit |
//! | [`treatment`] | JointConsult, MedicationTreatment |
//! | [`closing`] | Payment, Discharge |

pub mod closing;
pub mod intake;
pub mod testing;
pub mod treatment;

use ocelgen_core::{Activity, Event, Result, Timestamp};

use crate::context::TraceContext;
use crate::state::LogState;

/// Behavior of one activity kind
pub trait ActivityHandler {
    /// The activity this handler implements
    fn activity(&self) -> Activity;

    /// Apply the activity at time `at` and build its event
    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event>;
}

// =============================================================================
// Registry
// =============================================================================

/// Handlers keyed by activity discriminant
pub struct HandlerRegistry {
    handlers: [Box<dyn ActivityHandler>; Activity::ALL.len()],
}

impl HandlerRegistry {
    /// The clinical pathway handlers
    ///
    /// Slots follow `Activity::ALL` order so `activity.index()` selects
    /// the handler.
    pub fn clinical() -> Self {
        Self {
            handlers: [
                Box::new(intake::OutpatientRegistration),
                Box::new(intake::InitialVisit),
                Box::new(testing::OrderTest::imaging()),
                Box::new(testing::OrderTest::lab()),
                Box::new(testing::FollowUpVisit),
                Box::new(treatment::JointConsult),
                Box::new(treatment::MedicationTreatment),
                Box::new(closing::Payment),
                Box::new(closing::Discharge),
            ],
        }
    }

    /// Handler for an activity
    pub fn get(&self, activity: Activity) -> &dyn ActivityHandler {
        self.handlers[activity.index()].as_ref()
    }

    /// Run the handler for `activity`
    pub fn dispatch(
        &self,
        activity: Activity,
        state: &mut LogState,
        ctx: &mut TraceContext,
        at: Timestamp,
    ) -> Result<Event> {
        self.get(activity).handle(state, ctx, at)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::clinical()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|h| h.activity()))
            .finish()
    }
}
