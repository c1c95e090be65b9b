//! Fixed traces with known outcomes.

use ocelgen::attributes::{dose, encounter, patient, plan, test};
use ocelgen::prelude::*;

use crate::{build, count, events_by_patient, FULL_TRACE};

#[test]
fn minimal_visit() {
    let log = build(&[vec!["OutpatientRegistration", "InitialVisit", "Discharge"]]);

    assert_eq!(log.events.len(), 3);
    assert_eq!(log.objects.len(), 2);
    assert_eq!(log.object_relationships.len(), 1);

    let enc = log.objects_of(ObjectType::Encounter).next().unwrap();
    assert_eq!(enc.current(encounter::STATUS).unwrap(), &"closed");
    assert_eq!(
        enc.current(encounter::END_TIME).unwrap(),
        &log.events[2].time.to_string().as_str()
    );

    let rel = &log.object_relationships[0];
    assert_eq!(rel.relationship_type, RelationshipType::EncounterPatient);
    assert_eq!(rel.source_object, enc.id);
    assert_eq!(rel.time, log.events[0].time);
}

#[test]
fn full_pathway() {
    let log = build(&[FULL_TRACE.to_vec()]);

    assert_eq!(log.events.len(), 9);
    assert_eq!(count(&log, ObjectType::Patient), 1);
    assert_eq!(count(&log, ObjectType::Encounter), 1);
    assert_eq!(count(&log, ObjectType::Diagnosis), 1);
    assert_eq!(count(&log, ObjectType::TreatmentPlan), 1);
    assert_eq!(count(&log, ObjectType::Test), 2);
    assert_eq!(count(&log, ObjectType::Dose), 1);
    assert_eq!(log.object_relationships.len(), 2);

    let types: Vec<&str> = log.events.iter().map(|e| e.event_type.name()).collect();
    assert_eq!(types, FULL_TRACE.to_vec());

    let follow_up = &log.events[4];
    let reviewed: Vec<&str> = follow_up
        .related(Qualifier::ReviewedTest)
        .map(|id| id.as_str())
        .collect();
    assert_eq!(reviewed, vec!["test-001-1", "test-001-2"]);

    let dose_rel = &log.object_relationships[1];
    assert_eq!(dose_rel.relationship_type, RelationshipType::TreatmentPlanDose);
    assert_eq!(dose_rel.source_object, "plan-001");
    assert_eq!(dose_rel.target_object, "med-001-1");
}

#[test]
fn payment_uses_billing_encounter() {
    let log = build(&[vec!["Payment"]]);
    let event = &log.events[0];
    assert_eq!(event.related(Qualifier::Encounter).count(), 0);
    assert_eq!(event.related(Qualifier::BillingEncounter).count(), 1);

    let enc = log.objects_of(ObjectType::Encounter).next().unwrap();
    assert_eq!(enc.current(encounter::BILLING_STATUS).unwrap(), &"paid");
    assert_eq!(
        enc.current(encounter::BILLING_AMOUNT),
        event.attribute("PaymentAmount")
    );
}

#[test]
fn test_states_before_and_after_follow_up() {
    let log = build(&[vec!["ImagingTest", "FollowUpVisit", "LabTest"]]);
    let imaging = log.object(&ObjectId::from("test-001-1")).unwrap();
    let lab = log.object(&ObjectId::from("test-001-2")).unwrap();

    assert_eq!(imaging.current(test::RESULT_STATE).unwrap(), &"Reviewed");
    assert_eq!(imaging.history(test::RESULT_STATE).count(), 2);
    assert_eq!(lab.current(test::RESULT_STATE).unwrap(), &"Unreviewed");

    let follow_up = &log.events[1];
    let reviewed: Vec<_> = follow_up.related(Qualifier::ReviewedTest).collect();
    assert_eq!(reviewed, vec![&imaging.id]);
}

#[test]
fn medication_before_consult_creates_plan_once() {
    let log = build(&[vec![
        "MedicationTreatment",
        "JointConsult",
        "MedicationTreatment",
    ]]);
    assert_eq!(count(&log, ObjectType::Diagnosis), 1);
    assert_eq!(count(&log, ObjectType::TreatmentPlan), 1);
    assert_eq!(count(&log, ObjectType::Dose), 2);
    assert_eq!(log.object_relationships.len(), 3);

    let cycles: Vec<i64> = log
        .events
        .iter()
        .filter(|e| e.event_type == Activity::MedicationTreatment)
        .filter_map(|e| e.attribute("CycleNumber").and_then(|v| v.as_int()))
        .collect();
    assert_eq!(cycles, vec![1, 2]);

    let plan_obj = log.objects_of(ObjectType::TreatmentPlan).next().unwrap();
    assert_eq!(plan_obj.current(plan::STATUS).unwrap(), &"Proceed");
    assert_eq!(plan_obj.current(plan::DX_ID).unwrap(), &"DX-0001");
    for d in log.objects_of(ObjectType::Dose) {
        assert_eq!(d.current(dose::PLAN_ID).unwrap(), &"PLAN-0001");
    }
}

#[test]
fn consult_event_type_and_care_team() {
    let log = build(&[vec!["JointConsult"]]);
    let event = &log.events[0];
    assert_eq!(event.event_type, Activity::JointConsult);
    assert_eq!(
        event.attribute("CareTeam").unwrap(),
        &"OncologySurgeryRadiology"
    );
    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["type"], "JointConsult");
}

#[test]
fn unknown_label_aborts() {
    let traces = vec![FULL_TRACE.to_vec(), vec!["OutpatientRegistration", "XRay"]];
    let err = generate(GeneratorConfig::default(), &traces).unwrap_err();
    match err {
        Error::UnknownActivity { label, trace, position } => {
            assert_eq!(label, "XRay");
            assert_eq!(trace, 2);
            assert_eq!(position, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn korean_traces_through_label_map() {
    let traces = vec![vec![
        "외래 접수",
        "초진",
        "영상 검사",
        "재진",
        "협진",
        "약물 치료",
        "수납",
        "퇴원",
    ]];
    let activities = LabelMap::clinical_ko().translate(&traces).unwrap();
    let mut builder = LogBuilder::with_defaults().unwrap();
    builder.add_activity_traces(&activities).unwrap();
    let log = builder.finish();
    assert_eq!(log.events.len(), 8);
    assert_eq!(log.events[5].event_type, Activity::JointConsult);
}

#[test]
fn traces_are_an_hour_apart() {
    let log = build(&[vec!["Discharge"], vec!["Discharge"], vec!["Discharge"]]);
    let starts: Vec<String> = log.events.iter().map(|e| e.time.to_string()).collect();
    assert_eq!(
        starts,
        vec![
            "2025-08-01T09:00:00Z",
            "2025-08-01T10:00:00Z",
            "2025-08-01T11:00:00Z"
        ]
    );
    for (i, p) in log.objects_of(ObjectType::Patient).enumerate() {
        assert_eq!(
            p.current(patient::PATIENT_ID).unwrap(),
            &format!("P-{:04}", i + 1).as_str()
        );
    }
}

#[test]
fn every_event_has_subject() {
    let log = build(&[FULL_TRACE.to_vec(), vec!["Payment", "Discharge"]]);
    let grouped = events_by_patient(&log);
    assert_eq!(grouped.len(), 2);
    for event in &log.events {
        assert_eq!(event.relationships[0].qualifier, Qualifier::Subject);
    }
}

#[test]
fn custom_pad_width() {
    let log = generate(
        GeneratorConfig::default().with_pad_width(5),
        &[vec!["LabTest", "MedicationTreatment"]],
    )
    .unwrap();
    assert!(log.object(&ObjectId::from("pat-00001")).is_some());
    assert!(log.object(&ObjectId::from("test-00001-1")).is_some());
    assert!(log.object(&ObjectId::from("med-00001-1")).is_some());
    assert!(log.object(&ObjectId::from("plan-00001")).is_some());
}
