//! Human-readable label mapping
//!
//! Trace sources often name activities in the language of the clinic.
//! A [`LabelMap`] translates those names into [`Activity`] values before
//! generation. Translation is all-or-nothing: every unmapped label across
//! every trace is collected and reported together.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ocelgen_core::{Activity, Error, Result};

/// Label → activity lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: BTreeMap<String, Activity>,
}

impl LabelMap {
    /// An empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the canonical activity names only
    pub fn identity() -> Self {
        Activity::ALL
            .into_iter()
            .map(|a| (a.name().to_string(), a))
            .collect()
    }

    /// Korean clinical vocabulary
    pub fn clinical_ko() -> Self {
        [
            ("외래 접수", Activity::OutpatientRegistration),
            ("초진", Activity::InitialVisit),
            ("영상 검사", Activity::ImagingTest),
            ("실험실 검사", Activity::LabTest),
            ("재진", Activity::FollowUpVisit),
            ("협진", Activity::JointConsult),
            ("약물 치료", Activity::MedicationTreatment),
            ("수납", Activity::Payment),
            ("퇴원", Activity::Discharge),
        ]
        .into_iter()
        .map(|(label, activity)| (label.to_string(), activity))
        .collect()
    }

    /// Parse a JSON object of `"label": "ActivityName"` pairs
    pub fn from_json_str(s: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(s)?;
        entries
            .into_iter()
            .map(|(label, name)| {
                Activity::from_name(&name)
                    .map(|activity| (label.clone(), activity))
                    .ok_or_else(|| {
                        Error::InvalidConfig(format!(
                            "label {:?} maps to unknown activity {:?}",
                            label, name
                        ))
                    })
            })
            .collect()
    }

    /// Read a JSON label map file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Add or replace one entry
    pub fn insert(&mut self, label: impl Into<String>, activity: Activity) {
        self.entries.insert(label.into(), activity);
    }

    /// Look up one label
    pub fn get(&self, label: &str) -> Option<Activity> {
        self.entries.get(label).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate every trace
    ///
    /// Fails with `UnmappedLabels` (sorted, deduplicated) if any label has
    /// no entry; nothing is translated in that case.
    pub fn translate<T, S>(&self, traces: &[T]) -> Result<Vec<Vec<Activity>>>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        let unmapped: BTreeSet<&str> = traces
            .iter()
            .flat_map(|trace| trace.as_ref().iter())
            .map(|label| label.as_ref())
            .filter(|label| !self.entries.contains_key(*label))
            .collect();
        if !unmapped.is_empty() {
            return Err(Error::UnmappedLabels(
                unmapped.into_iter().map(str::to_string).collect(),
            ));
        }

        Ok(traces
            .iter()
            .map(|trace| {
                trace
                    .as_ref()
                    .iter()
                    .filter_map(|label| self.get(label.as_ref()))
                    .collect()
            })
            .collect())
    }
}

impl FromIterator<(String, Activity)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
