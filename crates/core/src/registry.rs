//! The in-memory patient roster.
//!
//! Holds every patient record for the session in insertion order with
//! newly registered patients at the front. All other flows (directory,
//! detail, campaigns, analytics, export) read from or write back to
//! this registry.

use chrono::NaiveDate;
use rand::Rng;
use tracing::warn;

use crate::domain::{Patient, PatientDraft};

/// Session roster of patient records.
#[derive(Clone, Debug, Default)]
pub struct PatientRegistry {
    patients: Vec<Patient>,
}

impl PatientRegistry {
    /// Starts from the demo roster.
    pub fn seeded() -> Self {
        Self {
            patients: crate::seed::patients(),
        }
    }

    pub fn new(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    /// Registers a new patient from a submitted form, assigning a
    /// random `P<n>` identifier and prepending the record so it shows
    /// at the top of the directory.
    ///
    /// Returns the assigned identifier.
    pub fn register(&mut self, draft: PatientDraft, today: NaiveDate) -> String {
        let id = format!("P{}", rand::thread_rng().gen_range(0..10_000));
        let patient = draft.into_patient(id.clone(), today);
        self.patients.insert(0, patient);
        id
    }

    /// Replaces the stored record with the same id.
    ///
    /// An unknown id is dropped silently apart from a log line, so a
    /// stale detail view cannot corrupt the roster.
    pub fn update(&mut self, updated: Patient) {
        match self.patients.iter_mut().find(|p| p.id == updated.id) {
            Some(existing) => *existing = updated,
            None => warn!(patient_id = %updated.id, "update for unknown patient dropped"),
        }
    }

    /// Prepends externally sourced records, newest first.
    pub fn import(&mut self, records: Vec<Patient>) {
        for patient in records.into_iter().rev() {
            self.patients.insert(0, patient);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdherenceStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date")
    }

    #[test]
    fn register_prepends_with_generated_id() {
        let mut registry = PatientRegistry::seeded();
        let before = registry.len();

        let draft = PatientDraft {
            name: Some("Test Person".to_string()),
            ..PatientDraft::default()
        };
        let id = registry.register(draft, today());

        assert_eq!(registry.len(), before + 1);
        assert!(id.starts_with('P'));
        let numeric: u32 = id[1..].parse().expect("numeric suffix");
        assert!(numeric < 10_000);
        let first = registry.iter().next().expect("nonempty");
        assert_eq!(first.id, id);
        assert_eq!(first.name, "Test Person");
    }

    #[test]
    fn update_replaces_matching_record() {
        let mut registry = PatientRegistry::seeded();
        let mut patient = registry.get("P002").expect("seeded").clone();
        patient.status = AdherenceStatus::Good;
        patient.loyalty_points += 50;
        let points = patient.loyalty_points;

        registry.update(patient);

        let stored = registry.get("P002").expect("still present");
        assert_eq!(stored.status, AdherenceStatus::Good);
        assert_eq!(stored.loyalty_points, points);
    }

    #[test]
    fn update_for_unknown_id_is_a_no_op() {
        let mut registry = PatientRegistry::seeded();
        let mut ghost = registry.get("P001").expect("seeded").clone();
        ghost.id = "P9999999".to_string();
        let before = registry.len();

        registry.update(ghost);

        assert_eq!(registry.len(), before);
        assert!(registry.get("P9999999").is_none());
    }

    #[test]
    fn import_prepends_in_given_order() {
        let mut registry = PatientRegistry::seeded();
        let mut a = registry.get("P001").expect("seeded").clone();
        a.id = "IMP-A".to_string();
        let mut b = a.clone();
        b.id = "IMP-B".to_string();

        registry.import(vec![a, b]);

        let ids: Vec<&str> = registry.iter().map(|p| p.id.as_str()).take(2).collect();
        assert_eq!(ids, ["IMP-A", "IMP-B"]);
    }
}
