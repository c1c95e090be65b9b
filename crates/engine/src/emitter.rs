//! Relationship emitter
//!
//! Runs once per trace, after replay, and derives O2O records from the
//! final context:
//!
//! - one `Encounter-Patient` record (Encounter → Patient)
//! - one `TreatmentPlan-Dose` record per Dose, when the trace has a plan
//!
//! Every record is stamped at trace start.

use ocelgen_core::{ObjectId, ObjectRelationship, RelationshipType, Result};

use crate::context::TraceContext;
use crate::state::LogState;

fn link(
    state: &mut LogState,
    relationship_type: RelationshipType,
    ctx: &TraceContext,
    source: &ObjectId,
    target: &ObjectId,
) {
    let id = state.ids.next_relationship_id();
    state.push_relationship(ObjectRelationship::new(
        id,
        relationship_type,
        ctx.start_time,
        source.clone(),
        target.clone(),
    ));
}

/// Emit the O2O records for a finished trace; returns how many were added
///
/// Every referenced object is checked first, so a dangling reference
/// fails without emitting anything.
pub fn emit_relationships(state: &mut LogState, ctx: &TraceContext) -> Result<usize> {
    let doses: &[ObjectId] = match &ctx.plan {
        Some(_) => &ctx.doses,
        None => &[],
    };
    for id in [&ctx.encounter, &ctx.patient]
        .into_iter()
        .chain(ctx.plan.iter())
        .chain(doses)
    {
        state.store.get(id)?;
    }

    link(
        state,
        RelationshipType::EncounterPatient,
        ctx,
        &ctx.encounter,
        &ctx.patient,
    );
    if let Some(plan) = &ctx.plan {
        for dose in doses {
            link(state, RelationshipType::TreatmentPlanDose, ctx, plan, dose);
        }
    }
    Ok(1 + doses.len())
}
