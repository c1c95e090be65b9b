//! Properties that hold for any valid input.

use std::collections::HashSet;

use proptest::collection::vec;
use proptest::prelude::*;

use ocelgen::prelude::*;

use crate::{count, events_by_patient, patients};

fn trace_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    vec(
        proptest::sample::select(Activity::ALL.to_vec()).prop_map(|a| a.name()),
        0..12,
    )
}

fn traces_strategy() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    vec(trace_strategy(), 0..6)
}

fn label_count(traces: &[Vec<&str>], label: &str) -> usize {
    traces.iter().flatten().filter(|l| **l == label).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn one_event_per_label(traces in traces_strategy(), seed in any::<u64>()) {
        let log = generate(GeneratorConfig::default().with_seed(seed), &traces).unwrap();
        let total: usize = traces.iter().map(Vec::len).sum();
        prop_assert_eq!(log.events.len(), total);

        let grouped = events_by_patient(&log);
        for (trace, patient) in traces.iter().zip(patients(&log)) {
            let n = grouped.get(&patient).map_or(0, Vec::len);
            prop_assert_eq!(n, trace.len());
        }
    }

    #[test]
    fn one_patient_and_encounter_per_trace(traces in traces_strategy()) {
        let log = generate(GeneratorConfig::default(), &traces).unwrap();
        prop_assert_eq!(count(&log, ObjectType::Patient), traces.len());
        prop_assert_eq!(count(&log, ObjectType::Encounter), traces.len());
    }

    #[test]
    fn diagnosis_and_plan_at_most_once(traces in traces_strategy()) {
        let log = generate(GeneratorConfig::default(), &traces).unwrap();
        let with_plan = traces
            .iter()
            .filter(|t| t.iter().any(|l| *l == "JointConsult" || *l == "MedicationTreatment"))
            .count();
        prop_assert_eq!(count(&log, ObjectType::Diagnosis), with_plan);
        prop_assert_eq!(count(&log, ObjectType::TreatmentPlan), with_plan);
    }

    #[test]
    fn o2o_count(traces in traces_strategy()) {
        let log = generate(GeneratorConfig::default(), &traces).unwrap();
        let doses = label_count(&traces, "MedicationTreatment");
        prop_assert_eq!(count(&log, ObjectType::Dose), doses);
        prop_assert_eq!(log.object_relationships.len(), traces.len() + doses);
        let tests = label_count(&traces, "ImagingTest") + label_count(&traces, "LabTest");
        prop_assert_eq!(count(&log, ObjectType::Test), tests);
    }

    #[test]
    fn timestamps_strictly_increase_within_trace(
        traces in traces_strategy(),
        mean in -60.0f64..120.0,
        std in 0.0f64..40.0,
    ) {
        let config = GeneratorConfig::default().with_step(mean, std);
        let log = generate(config, &traces).unwrap();
        for events in events_by_patient(&log).values() {
            for pair in events.windows(2) {
                prop_assert!(pair[0].time < pair[1].time);
                let gap = pair[1].time.as_datetime() - pair[0].time.as_datetime();
                prop_assert!(gap >= chrono::Duration::minutes(10) - chrono::Duration::seconds(1));
            }
        }
    }

    #[test]
    fn follow_up_reviews_exactly_prior_tests(traces in traces_strategy()) {
        let log = generate(GeneratorConfig::default(), &traces).unwrap();
        for events in events_by_patient(&log).values() {
            let mut ordered: Vec<ObjectId> = Vec::new();
            for event in events {
                match event.event_type {
                    Activity::ImagingTest | Activity::LabTest => {
                        ordered.extend(event.related(Qualifier::Order).cloned());
                    }
                    Activity::FollowUpVisit => {
                        let reviewed: Vec<ObjectId> =
                            event.related(Qualifier::ReviewedTest).cloned().collect();
                        prop_assert_eq!(&reviewed, &ordered);
                        for id in &reviewed {
                            let test = log.object(id).unwrap();
                            let entry = test.history("result_state").find(|e| e.time == event.time);
                            prop_assert!(entry.is_some());
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn references_resolve_and_ids_are_unique(traces in traces_strategy()) {
        let log = generate(GeneratorConfig::default(), &traces).unwrap();
        let ids: HashSet<&ObjectId> = log.objects.iter().map(|o| &o.id).collect();
        prop_assert_eq!(ids.len(), log.objects.len());

        let event_ids: HashSet<&str> = log.events.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(event_ids.len(), log.events.len());

        for event in &log.events {
            for rel in &event.relationships {
                prop_assert!(ids.contains(&rel.object_id));
            }
        }
        for rel in &log.object_relationships {
            prop_assert!(ids.contains(&rel.source_object));
            prop_assert!(ids.contains(&rel.target_object));
        }
    }

    #[test]
    fn rejected_input_produces_nothing(
        traces in traces_strategy(),
        bad in "[A-Z][a-z]{2,8}Scan",
    ) {
        let mut poisoned: Vec<Vec<&str>> = traces.clone();
        poisoned.push(vec!["OutpatientRegistration", bad.as_str()]);
        let mut builder = LogBuilder::with_defaults().unwrap();
        let err = builder.add_traces(&poisoned).unwrap_err();
        prop_assert!(err.is_invalid_input());
        prop_assert_eq!(builder.trace_count(), 0);
        prop_assert!(builder.state().events().is_empty());
    }
}
