//! Patient directory: search, status filtering, PHI masking, and the
//! simulated file import.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use jemine_types::AdherenceRate;

use crate::constants::IMPORT_DELAY;
use crate::domain::{
    AdherenceStatus, CommunicationChannel, Patient, SubscriptionStatus,
};
use crate::error::DashboardResult;
use crate::ops::{simulate_transport, OpState};
use crate::registry::PatientRegistry;

/// Combined status filter over both adherence and subscription status.
///
/// The directory exposes them as a single dropdown, so a filter value
/// is one or the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Adherence(AdherenceStatus),
    Subscription(SubscriptionStatus),
}

impl StatusFilter {
    /// The dashboard's "critical patients" shortcut filter.
    pub fn critical() -> Self {
        StatusFilter::Adherence(AdherenceStatus::Critical)
    }

    fn matches(&self, patient: &Patient) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Adherence(status) => patient.status == *status,
            StatusFilter::Subscription(status) => patient.subscription_status == *status,
        }
    }
}

/// Outcome of a completed import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOutcome {
    pub count: usize,
    pub source: String,
}

impl ImportOutcome {
    /// Confirmation line shown after an import.
    pub fn confirmation(&self) -> String {
        format!(
            "Successfully imported {} patients from {}",
            self.count, self.source
        )
    }
}

/// Masks a phone number down to its last four characters.
pub fn masked_phone(phone: &str) -> String {
    let tail: String = phone
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("•••-•••-{tail}")
}

/// Directory screen state.
#[derive(Clone, Debug, Default)]
pub struct Directory {
    pub search: String,
    pub filter: StatusFilter,
    revealed: HashSet<String>,
    pub import_state: OpState,
}

impl Directory {
    /// Opens the directory, honoring a deep-link filter when present.
    pub fn with_filter(filter: Option<StatusFilter>) -> Self {
        Self {
            filter: filter.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Patients matching the current search and status filter, in
    /// roster order.
    pub fn filtered<'a>(&self, registry: &'a PatientRegistry) -> Vec<&'a Patient> {
        let needle = self.search.to_lowercase();
        registry
            .iter()
            .filter(|p| {
                let matches_search = needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.condition.to_lowercase().contains(&needle);
                matches_search && self.filter.matches(p)
            })
            .collect()
    }

    /// Per-row phone reveal. Independent of the global mask-PHI
    /// setting.
    pub fn toggle_reveal(&mut self, patient_id: &str) {
        if !self.revealed.remove(patient_id) {
            self.revealed.insert(patient_id.to_string());
        }
    }

    pub fn is_revealed(&self, patient_id: &str) -> bool {
        self.revealed.contains(patient_id)
    }

    /// The phone number as the row renders it.
    pub fn phone_display(&self, patient: &Patient) -> String {
        if self.is_revealed(&patient.id) {
            patient.phone.clone()
        } else {
            masked_phone(&patient.phone)
        }
    }

    /// Simulated CSV import: after a fixed delay, two synthetic records
    /// are prepended to the roster.
    ///
    /// # Errors
    ///
    /// Refused while a previous import is still running.
    pub async fn import(
        &mut self,
        registry: &mut PatientRegistry,
        source_filename: &str,
    ) -> DashboardResult<ImportOutcome> {
        self.import_state.begin()?;
        simulate_transport(IMPORT_DELAY).await;

        let today = Utc::now().date_naive();
        let records = imported_records(today);
        let count = records.len();
        registry.import(records);

        self.import_state.succeed();
        Ok(ImportOutcome {
            count,
            source: source_filename.to_string(),
        })
    }
}

/// The two synthetic records every import produces. There is no real
/// parser behind the upload.
fn imported_records(today: NaiveDate) -> Vec<Patient> {
    let millis = Utc::now().timestamp_millis();
    vec![
        Patient {
            id: format!("IMP-{millis}-1"),
            name: "Imported User 1".to_string(),
            age: 45,
            phone: "+234 80 000 0001".to_string(),
            email: "imported1@example.com".to_string(),
            language: "English".to_string(),
            condition: "Hypertension".to_string(),
            adherence_rate: AdherenceRate::FULL,
            status: AdherenceStatus::Excellent,
            subscription_status: SubscriptionStatus::Active,
            communication_preference: CommunicationChannel::Sms,
            loyalty_points: 0,
            medications: Vec::new(),
            appointments: Vec::new(),
            vitals: Vec::new(),
            last_contact: today,
        },
        Patient {
            id: format!("IMP-{millis}-2"),
            name: "Imported User 2".to_string(),
            age: 62,
            phone: "+234 80 000 0002".to_string(),
            email: "imported2@example.com".to_string(),
            language: "Hausa".to_string(),
            condition: "Diabetes".to_string(),
            adherence_rate: AdherenceRate::clamped(90),
            status: AdherenceStatus::Good,
            subscription_status: SubscriptionStatus::Active,
            communication_preference: CommunicationChannel::Sms,
            loyalty_points: 0,
            medications: Vec::new(),
            appointments: Vec::new(),
            vitals: Vec::new(),
            last_contact: today,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn search_matches_name_or_condition_case_insensitively() {
        let registry = PatientRegistry::seeded();
        let mut directory = Directory::default();

        directory.search = "kwame".to_string();
        let by_name = directory.filtered(&registry);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "P001");

        directory.search = "DIABETES".to_string();
        let by_condition = directory.filtered(&registry);
        assert!(by_condition.iter().all(|p| p.condition.contains("Diabetes")));
        assert!(!by_condition.is_empty());
    }

    #[test]
    fn status_filter_spans_adherence_and_subscription() {
        let registry = PatientRegistry::seeded();
        let mut directory = Directory::default();

        directory.filter = StatusFilter::critical();
        let critical = directory.filtered(&registry);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].name, "Samuel Kiprotich");

        directory.filter = StatusFilter::Subscription(SubscriptionStatus::Active);
        assert_eq!(directory.filtered(&registry).len(), 2);
    }

    #[test]
    fn masking_keeps_the_last_four_characters() {
        assert_eq!(masked_phone("+234 801 234 5678"), "•••-•••-5678");
        assert_eq!(masked_phone("911"), "•••-•••-911");
    }

    #[test]
    fn reveal_is_per_row_and_toggles() {
        let registry = PatientRegistry::seeded();
        let patient = registry.get("P001").expect("seeded").clone();
        let mut directory = Directory::default();

        assert!(directory.phone_display(&patient).starts_with("•••-•••-"));
        directory.toggle_reveal("P001");
        assert_eq!(directory.phone_display(&patient), patient.phone);
        assert!(!directory.is_revealed("P002"));
        directory.toggle_reveal("P001");
        assert!(!directory.is_revealed("P001"));
    }

    #[tokio::test(start_paused = true)]
    async fn import_prepends_two_synthetic_records() {
        let mut registry = PatientRegistry::seeded();
        let mut directory = Directory::default();
        let before = registry.len();

        let outcome = directory
            .import(&mut registry, "roster.csv")
            .await
            .expect("import completes");

        assert_eq!(outcome.count, 2);
        assert_eq!(
            outcome.confirmation(),
            "Successfully imported 2 patients from roster.csv"
        );
        assert_eq!(registry.len(), before + 2);
        let first = registry.iter().next().expect("nonempty");
        assert!(first.id.starts_with("IMP-"));
        assert_eq!(first.name, "Imported User 1");
        assert!(directory.import_state.is_succeeded());
    }

    #[tokio::test(start_paused = true)]
    async fn import_refuses_a_second_trigger_while_running() {
        let mut directory = Directory::default();
        directory.import_state.begin().expect("mark running");

        let mut registry = PatientRegistry::seeded();
        let err = directory
            .import(&mut registry, "again.csv")
            .await
            .expect_err("already running");
        assert!(matches!(err, DashboardError::OperationInFlight));
    }
}
