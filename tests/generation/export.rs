//! Document shape and file output.

use ocelgen::export::{to_json_string, write_json};
use serde_json::Value;

use crate::{build, FULL_TRACE};

fn document() -> Value {
    let log = build(&[FULL_TRACE.to_vec()]);
    serde_json::from_str(&to_json_string(&log).unwrap()).unwrap()
}

#[test]
fn top_level_keys_in_order() {
    let log = build(&[vec!["Discharge"]]);
    let json = to_json_string(&log).unwrap();
    let keys = [
        "\"eventTypes\"",
        "\"objectTypes\"",
        "\"events\"",
        "\"objects\"",
        "\"objectRelationshipTypes\"",
        "\"objectRelationships\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn event_shape() {
    let doc = document();
    let event = &doc["events"][6];
    assert_eq!(event["id"], "e7");
    assert_eq!(event["type"], "MedicationTreatment");
    assert_eq!(event["attributes"][0]["name"], "CycleNumber");
    assert_eq!(event["attributes"][0]["value"], 1);
    assert_eq!(event["relationships"][0]["objectId"], "pat-001");
    assert_eq!(event["relationships"][0]["qualifier"], "subject");
    assert_eq!(event["relationships"][3]["qualifier"], "drug_admin");
    let time = event["time"].as_str().unwrap();
    assert_eq!(time.len(), "2025-08-01T09:00:00Z".len());
    assert!(time.ends_with('Z'));
}

#[test]
fn object_and_o2o_shape() {
    let doc = document();
    let patient = &doc["objects"][0];
    assert_eq!(patient["id"], "pat-001");
    assert_eq!(patient["type"], "Patient");
    assert_eq!(patient["attributes"][0]["name"], "patient_id");
    assert_eq!(patient["attributes"][0]["time"], "2025-08-01T09:00:00Z");
    assert!(patient["attributes"][2]["value"].is_i64());

    let rel = &doc["objectRelationships"][0];
    assert_eq!(rel["id"], "or1");
    assert_eq!(rel["type"], "Encounter-Patient");
    assert_eq!(rel["sourceObject"], "enc-001");
    assert_eq!(rel["targetObject"], "pat-001");
    assert_eq!(rel["attributes"], serde_json::json!([]));
}

#[test]
fn write_json_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ocel.json");
    let log = build(&[FULL_TRACE.to_vec()]);
    write_json(&log, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n    \"eventTypes\""));
    // Wire timestamps carry whole seconds, so compare re-serialized text
    let back: ocelgen::OcelLog = serde_json::from_str(&text).unwrap();
    assert_eq!(back.summary(), log.summary());
    assert_eq!(to_json_string(&back).unwrap(), text);
}

#[test]
fn write_json_to_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let log = build(&[vec!["Discharge"]]);
    let err = write_json(&log, dir.path().join("nope").join("ocel.json")).unwrap_err();
    assert!(matches!(err, ocelgen::Error::Io(_)));
}
