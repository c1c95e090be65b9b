//! Schema dictionaries
//!
//! Event-type, object-type and O2O-type declarations are static
//! configuration. The engine copies them verbatim into the output
//! document and never enforces them against the generated data.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One declaration (event type, object type or O2O type)
///
/// Kept as raw JSON: unknown keys, key order and number formats survive
/// a load/emit cycle untouched.
pub type TypeDeclaration = Value;

/// The three schema dictionaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Schema {
    /// Event types
    pub event_types: Vec<TypeDeclaration>,
    /// Object types
    pub object_types: Vec<TypeDeclaration>,
    /// O2O relationship types
    pub object_relationship_types: Vec<TypeDeclaration>,
}

impl Default for Schema {
    fn default() -> Self {
        Schema::clinical()
    }
}

/// Attribute declaration builder for the built-in dictionaries
struct Attr(Map<String, Value>);

impl Attr {
    fn of(name: &str, kind: &str) -> Self {
        Attr(Map::new()).set("name", name).set("type", kind)
    }

    fn string(name: &str) -> Self {
        Self::of(name, "string")
    }

    fn integer(name: &str) -> Self {
        Self::of(name, "integer")
    }

    fn id(name: &str, format: &str) -> Self {
        Self::of(name, "id").set("format", format)
    }

    fn time(name: &str) -> Self {
        Self::of(name, "time")
            .set("format", crate::time::WIRE_FORMAT)
            .set("timezone", "UTC")
    }

    fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    fn one_of(self, values: &[&str]) -> Self {
        self.set("enum", values.to_vec())
    }

    fn continuous(self, min: i64, max: i64) -> Self {
        self.set("semantics", "continuous")
            .set("range", json!({ "min": min, "max": max }))
    }

    fn unit(self, unit: &str) -> Self {
        self.set("unit", unit)
    }

    fn optional(self) -> Self {
        self.set("optional", true)
    }

    fn example(self, example: &str) -> Self {
        self.set("example", example)
    }
}

fn declaration(name: &str, attributes: Vec<Attr>) -> TypeDeclaration {
    let attributes: Vec<Value> = attributes.into_iter().map(|a| Value::Object(a.0)).collect();
    json!({ "name": name, "attributes": attributes })
}

impl Schema {
    /// Dictionaries for the clinical care pathway
    pub fn clinical() -> Self {
        use Attr as A;

        let event_types = vec![
            declaration("OutpatientRegistration", vec![A::string("ReceptionDesk")]),
            declaration(
                "InitialVisit",
                vec![A::string("Department"), A::string("AttendingPhysician")],
            ),
            declaration("ImagingTest", vec![A::string("TestType")]),
            declaration("LabTest", vec![A::string("TestType")]),
            declaration("FollowUpVisit", vec![A::string("Assessment")]),
            declaration("JointConsult", vec![A::string("CareTeam")]),
            declaration("MedicationTreatment", vec![A::integer("CycleNumber")]),
            declaration(
                "Payment",
                vec![A::string("PaymentMethod"), A::integer("PaymentAmount")],
            ),
            declaration("Discharge", vec![]),
        ];

        let patient_id = || A::id("patient_id", "P-{:04d}");
        let object_types = vec![
            declaration(
                "Patient",
                vec![
                    patient_id(),
                    A::string("sex").one_of(&["M", "F"]),
                    A::integer("age").continuous(0, 120),
                    A::string("allergies").example("penicillin"),
                    A::string("contradindications").example("contrast"),
                    A::string("status").one_of(&["Outpatient", "Inpatient", "Discharged"]),
                    A::string("condition").one_of(&["Severe", "Critical", "Stable"]),
                ],
            ),
            declaration(
                "Test",
                vec![
                    A::id("test_id", "T-{:04d}-{}"),
                    patient_id(),
                    A::string("modality").one_of(&["CT", "MRI", "PET", "Blood", "Pathology"]),
                    A::time("perform_time"),
                    A::string("result_state").one_of(&["Unreviewed", "Reviewed"]),
                    A::string("findings").example("Suspicious for Cancer"),
                ],
            ),
            declaration(
                "Encounter",
                vec![
                    A::id("enc_id", "E-{:04d}"),
                    patient_id(),
                    A::string("type").one_of(&["Outpatient", "Inpatient", "Emergency"]),
                    A::string("dept").example("Internal Medicine"),
                    A::time("start_time"),
                    A::time("end_time").optional(),
                    A::string("status").one_of(&["open", "closed"]),
                    A::string("reason").optional().example("AbdominalPain"),
                    A::string("attending").one_of(&["Dr. Kim", "Dr. Cha", "Dr.Jung"]),
                    A::string("billing_status").one_of(&["unpaid", "partial", "paid"]),
                    A::integer("billing_amount")
                        .continuous(0, 10_000_000)
                        .unit("KRW"),
                    A::string("payment_method")
                        .one_of(&["card", "cash", "transfer"])
                        .optional(),
                    A::time("billing_time").optional(),
                ],
            ),
            declaration(
                "Diagnosis",
                vec![
                    A::id("dx_id", "DX-{:04d}"),
                    patient_id(),
                    A::string("primary_site").example("Lung"),
                    A::string("stage").one_of(&["I", "II", "III", "IV"]),
                    A::time("confirm_time"),
                ],
            ),
            declaration(
                "TreatmentPlan",
                vec![
                    A::id("plan_id", "PLAN-{:04d}"),
                    patient_id(),
                    A::id("dx_id", "DX-{:04d}"),
                    A::string("intent").one_of(&["curative", "palliative"]),
                    A::string("primary_modality").example("medication"),
                    A::string("regimen").example("FOLFOX"),
                    A::string("status").one_of(&["Planned", "Proceed", "Complete"]),
                ],
            ),
            declaration(
                "Dose",
                vec![
                    A::id("admin_id", "D-{:04d}-{}"),
                    patient_id(),
                    A::id("plan_id", "PLAN-{:04d}"),
                    A::string("drug_name").example("pembrolizumab"),
                    A::integer("amount").continuous(0, 2000).unit("mg"),
                    A::string("route").one_of(&["IV", "PO"]),
                    A::time("given_time"),
                    A::string("adverse_event").example("None"),
                ],
            ),
        ];

        let object_relationship_types = crate::contract::RelationshipType::ALL
            .iter()
            .map(|r| {
                json!({
                    "name": r.name(),
                    "sourceType": r.source_type().name(),
                    "targetType": r.target_type().name(),
                    "attributes": [],
                })
            })
            .collect();

        Schema {
            event_types,
            object_types,
            object_relationship_types,
        }
    }
}
