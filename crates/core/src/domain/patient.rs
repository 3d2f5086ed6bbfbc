//! Patient records and their classification enums.

use chrono::NaiveDate;
use jemine_types::AdherenceRate;
use serde::{Deserialize, Serialize};

use crate::domain::{Appointment, Medication, VitalLog};

/// Adherence classification shown against each patient.
///
/// The classification is nominally derived from the adherence rate
/// (see [`AdherenceStatus::from_rate`]) but is stored independently and
/// never recomputed on mutation; several flows set it directly (new
/// patients are always `Excellent` regardless of any rate computation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdherenceStatus {
    Excellent,
    Good,
    #[serde(rename = "At Risk")]
    AtRisk,
    Critical,
}

impl AdherenceStatus {
    /// The nominal rate-to-status mapping: >90 Excellent, 75-90 Good,
    /// 50-74 At Risk, below 50 Critical.
    ///
    /// Callers that want a derived view can use this; nothing in the
    /// dashboard applies it automatically.
    pub fn from_rate(rate: AdherenceRate) -> Self {
        match rate.percent() {
            p if p > 90 => AdherenceStatus::Excellent,
            p if p >= 75 => AdherenceStatus::Good,
            p if p >= 50 => AdherenceStatus::AtRisk,
            _ => AdherenceStatus::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdherenceStatus::Excellent => "Excellent",
            AdherenceStatus::Good => "Good",
            AdherenceStatus::AtRisk => "At Risk",
            AdherenceStatus::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for AdherenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of a patient's programme membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Unsubscribed,
}

impl SubscriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Inactive => "Inactive",
            SubscriptionStatus::Unsubscribed => "Unsubscribed",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Preferred outreach channel for a patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommunicationChannel {
    WhatsApp,
    #[serde(rename = "SMS")]
    Sms,
    Email,
    #[serde(rename = "Phone Call")]
    PhoneCall,
}

impl CommunicationChannel {
    pub fn label(&self) -> &'static str {
        match self {
            CommunicationChannel::WhatsApp => "WhatsApp",
            CommunicationChannel::Sms => "SMS",
            CommunicationChannel::Email => "Email",
            CommunicationChannel::PhoneCall => "Phone Call",
        }
    }
}

impl std::fmt::Display for CommunicationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A patient record with its owned collections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    /// The patient's own language, free-form (it can name languages the
    /// provider UI is not localised into, e.g. Twi or Ewe).
    pub language: String,
    pub condition: String,
    pub adherence_rate: AdherenceRate,
    pub status: AdherenceStatus,
    pub subscription_status: SubscriptionStatus,
    pub communication_preference: CommunicationChannel,
    pub loyalty_points: u32,
    pub medications: Vec<Medication>,
    pub appointments: Vec<Appointment>,
    pub vitals: Vec<VitalLog>,
    pub last_contact: NaiveDate,
}

impl Patient {
    /// Whether any of the patient's medications is flagged for refill.
    pub fn has_refill_due(&self) -> bool {
        self.medications.iter().any(|m| m.refill_due)
    }
}

/// Fields collected by the "add patient" form.
///
/// Unset fields are filled with fixed defaults when the draft is turned
/// into a [`Patient`] by the registry.
#[derive(Clone, Debug, Default)]
pub struct PatientDraft {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub language: Option<String>,
    pub condition: Option<String>,
}

impl PatientDraft {
    /// Materialises the draft into a full record.
    ///
    /// Defaults: name "Unknown", age 30, language English, condition
    /// "General Care", full adherence, `Excellent` status, active
    /// subscription, SMS preference, zero loyalty points, empty owned
    /// collections.
    pub fn into_patient(self, id: String, today: NaiveDate) -> Patient {
        Patient {
            id,
            name: self.name.unwrap_or_else(|| "Unknown".to_string()),
            age: self.age.unwrap_or(30),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            language: self.language.unwrap_or_else(|| "English".to_string()),
            condition: self.condition.unwrap_or_else(|| "General Care".to_string()),
            adherence_rate: AdherenceRate::FULL,
            status: AdherenceStatus::Excellent,
            subscription_status: SubscriptionStatus::Active,
            communication_preference: CommunicationChannel::Sms,
            loyalty_points: 0,
            medications: Vec::new(),
            appointments: Vec::new(),
            vitals: Vec::new(),
            last_contact: today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_status_derivation_bands() {
        let cases = [
            (100, AdherenceStatus::Excellent),
            (91, AdherenceStatus::Excellent),
            (90, AdherenceStatus::Good),
            (75, AdherenceStatus::Good),
            (74, AdherenceStatus::AtRisk),
            (50, AdherenceStatus::AtRisk),
            (49, AdherenceStatus::Critical),
            (0, AdherenceStatus::Critical),
        ];
        for (percent, expected) in cases {
            assert_eq!(
                AdherenceStatus::from_rate(AdherenceRate::clamped(percent)),
                expected,
                "rate {percent}"
            );
        }
    }

    #[test]
    fn draft_defaults_match_creation_contract() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let patient = PatientDraft {
            name: Some("Adaeze Obi".to_string()),
            ..PatientDraft::default()
        }
        .into_patient("P123".to_string(), today);

        assert_eq!(patient.name, "Adaeze Obi");
        assert_eq!(patient.age, 30);
        assert_eq!(patient.adherence_rate, AdherenceRate::FULL);
        assert_eq!(patient.status, AdherenceStatus::Excellent);
        assert_eq!(patient.subscription_status, SubscriptionStatus::Active);
        assert_eq!(patient.communication_preference, CommunicationChannel::Sms);
        assert_eq!(patient.loyalty_points, 0);
        assert!(patient.medications.is_empty());
        assert_eq!(patient.last_contact, today);
    }

    #[test]
    fn status_labels_match_ui_strings() {
        assert_eq!(AdherenceStatus::AtRisk.to_string(), "At Risk");
        assert_eq!(CommunicationChannel::PhoneCall.to_string(), "Phone Call");
        assert_eq!(CommunicationChannel::Sms.to_string(), "SMS");
    }

    #[test]
    fn wire_names_keep_their_spaced_forms() {
        let status = serde_json::to_string(&AdherenceStatus::AtRisk).expect("serializes");
        assert_eq!(status, "\"At Risk\"");
        let channel: CommunicationChannel =
            serde_json::from_str("\"Phone Call\"").expect("deserializes");
        assert_eq!(channel, CommunicationChannel::PhoneCall);
    }
}
