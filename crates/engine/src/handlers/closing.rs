//! Billing and discharge

use ocelgen_core::contract::attributes::{encounter, event};
use ocelgen_core::{Activity, AttributeValue, Event, Qualifier, Result, Timestamp};

use super::ActivityHandler;
use crate::context::TraceContext;
use crate::state::LogState;

const PAYMENT_METHODS: [&str; 3] = ["card", "cash", "transfer"];
const MIN_BILL: i64 = 100_000;
const MAX_BILL: i64 = 1_000_000;

/// Settles the Encounter bill
///
/// The Encounter is linked as `billing_encounter` instead of `encounter`.
pub struct Payment;

impl ActivityHandler for Payment {
    fn activity(&self) -> Activity {
        Activity::Payment
    }

    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event> {
        let amount = state.sampler.int_in(MIN_BILL, MAX_BILL);
        let method = state.sampler.choose(&PAYMENT_METHODS);
        state.store.append_attributes(
            &ctx.encounter,
            at,
            [
                (encounter::BILLING_AMOUNT, AttributeValue::from(amount)),
                (encounter::BILLING_STATUS, AttributeValue::from("paid")),
                (encounter::PAYMENT_METHOD, AttributeValue::from(method)),
                (encounter::BILLING_TIME, AttributeValue::from(at)),
            ],
        )?;
        Ok(ctx
            .event(state, self.activity(), at, Qualifier::BillingEncounter)
            .with_attribute(event::PAYMENT_METHOD, method)
            .with_attribute(event::PAYMENT_AMOUNT, amount))
    }
}

/// Closes the Encounter
pub struct Discharge;

impl ActivityHandler for Discharge {
    fn activity(&self) -> Activity {
        Activity::Discharge
    }

    fn handle(&self, state: &mut LogState, ctx: &mut TraceContext, at: Timestamp) -> Result<Event> {
        state.store.append_attributes(
            &ctx.encounter,
            at,
            [
                (encounter::STATUS, AttributeValue::from("closed")),
                (encounter::END_TIME, AttributeValue::from(at)),
            ],
        )?;
        Ok(ctx.event(state, self.activity(), at, Qualifier::Encounter))
    }
}
