//! Patient detail view: working copies of the clinical collections,
//! the refill/vital/reminder/call/delivery sub-forms, and the AI
//! adherence analysis.
//!
//! Medications and vitals are detached copies of the patient's record.
//! Edits here do not flow back to the roster; only the
//! communication-preference change round-trips through the registry.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use jemine_ai::{AiClient, TextProvider};

use crate::domain::{
    classify, CommunicationChannel, Medication, Patient, VitalLog, VitalType,
};
use crate::error::{DashboardError, DashboardResult};
use crate::ops::OpState;
use crate::registry::PatientRegistry;

/// Canned risk-factor lines shown in the risk assessment modal.
///
/// Static placeholder copy, shown for every patient regardless of their
/// data.
pub const RISK_FACTORS: [&str; 2] = [
    "Missed 3 doses of Lisinopril in the last 7 days.",
    "Blood pressure trending upward.",
];

/// Confirmation line after a refill check-in.
pub const REFILL_CONFIRMATION: &str = "Refill checked in successfully. Inventory updated.";

/// Repeat options for a medication reminder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A reminder set from the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reminder {
    pub title: String,
    /// Composed schedule label, e.g. "Daily at 09:00".
    pub schedule: String,
}

/// How a logged call ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    #[default]
    Connected,
    Voicemail,
    #[serde(rename = "No Answer")]
    NoAnswer,
    Busy,
    #[serde(rename = "Wrong Number")]
    WrongNumber,
}

impl CallOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            CallOutcome::Connected => "Connected",
            CallOutcome::Voicemail => "Voicemail",
            CallOutcome::NoAnswer => "No Answer",
            CallOutcome::Busy => "Busy",
            CallOutcome::WrongNumber => "Wrong Number",
        }
    }
}

/// One entry in the call log, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallLog {
    /// Local timestamp rendered by the caller.
    pub timestamp: String,
    pub outcome: CallOutcome,
    pub notes: String,
}

/// Fulfilment method for a medication hand-off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfilmentMethod {
    #[default]
    Delivery,
    Pickup,
}

impl FulfilmentMethod {
    fn lowercase(&self) -> &'static str {
        match self {
            FulfilmentMethod::Delivery => "delivery",
            FulfilmentMethod::Pickup => "pickup",
        }
    }
}

/// The delivery/pickup scheduling form.
#[derive(Clone, Debug, Default)]
pub struct DeliveryRequest {
    pub medication_id: String,
    /// ISO date string from the form; may be blank.
    pub date: String,
    pub notes: String,
    pub method: FulfilmentMethod,
}

/// State of the open detail view for one patient.
#[derive(Clone, Debug)]
pub struct PatientDetail {
    /// Snapshot taken when the view opened.
    pub patient: Patient,
    /// Working copy; refill check-ins mutate this, not the roster.
    pub medications: Vec<Medication>,
    /// Working copy, newest entry first.
    pub vitals: Vec<VitalLog>,
    pub reminders: Vec<Reminder>,
    pub call_logs: Vec<CallLog>,
    pub analysis: Option<String>,
    pub analysis_state: OpState,
}

impl PatientDetail {
    pub fn open(patient: &Patient) -> Self {
        Self {
            patient: patient.clone(),
            medications: patient.medications.clone(),
            vitals: patient.vitals.clone(),
            reminders: Vec::new(),
            call_logs: Vec::new(),
            analysis: None,
            analysis_state: OpState::default(),
        }
    }

    /// Marks a medication refilled: supply back to a full cycle, refill
    /// flag cleared. Unknown ids leave everything untouched.
    pub fn check_in_refill(&mut self, medication_id: &str) -> &'static str {
        if let Some(med) = self.medications.iter_mut().find(|m| m.id == medication_id) {
            med.check_in_refill();
        }
        REFILL_CONFIRMATION
    }

    /// Logs a vital reading, classifying it at entry.
    ///
    /// # Errors
    ///
    /// A blank reading is rejected.
    pub fn add_vital(
        &mut self,
        vital_type: VitalType,
        value: &str,
        unit: &str,
        today: NaiveDate,
    ) -> DashboardResult<&VitalLog> {
        if value.trim().is_empty() {
            return Err(DashboardError::MissingVitalValue);
        }
        let entry = VitalLog {
            id: format!("v-{}", Utc::now().timestamp_millis()),
            date: today,
            vital_type,
            value: value.to_string(),
            unit: unit.to_string(),
            status: classify(vital_type, value),
        };
        self.vitals.insert(0, entry);
        Ok(&self.vitals[0])
    }

    /// Adds a reminder with a composed schedule label.
    ///
    /// # Errors
    ///
    /// The title is required.
    pub fn add_reminder(
        &mut self,
        title: &str,
        frequency: Frequency,
        time: &str,
    ) -> DashboardResult<()> {
        if title.trim().is_empty() {
            return Err(DashboardError::MissingReminderTitle);
        }
        self.reminders.push(Reminder {
            title: title.to_string(),
            schedule: format!("{frequency} at {time}"),
        });
        Ok(())
    }

    /// Records a call, newest first.
    pub fn log_call(&mut self, timestamp: String, outcome: CallOutcome, notes: String) {
        self.call_logs.insert(
            0,
            CallLog {
                timestamp,
                outcome,
                notes,
            },
        );
    }

    /// Validates a delivery/pickup request and returns the confirmation
    /// line. Nothing is stored; fulfilment is outside this system.
    ///
    /// # Errors
    ///
    /// Both a medication and a date are required.
    pub fn schedule_fulfilment(&self, request: &DeliveryRequest) -> DashboardResult<String> {
        if request.medication_id.is_empty() || request.date.is_empty() {
            return Err(DashboardError::MissingDeliveryFields(
                request.method.lowercase().to_string(),
            ));
        }
        let confirmation = match request.method {
            FulfilmentMethod::Delivery => format!(
                "Delivery scheduled for {} to {}'s primary address.",
                request.date, self.patient.name
            ),
            FulfilmentMethod::Pickup => format!(
                "Pickup scheduled for {} at the pharmacy counter.",
                request.date
            ),
        };
        Ok(confirmation)
    }

    /// Changes the preferred channel and writes the updated record back
    /// to the roster. Working-copy edits to medications and vitals stay
    /// local.
    pub fn set_communication_preference(
        &mut self,
        channel: CommunicationChannel,
        registry: &mut PatientRegistry,
    ) {
        self.patient.communication_preference = channel;
        registry.update(self.patient.clone());
    }

    /// The data summary handed to the AI analysis.
    pub fn data_summary(&self) -> String {
        let vitals = self
            .vitals
            .iter()
            .map(|v| format!("{}: {}", v.vital_type, v.value))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Patient {} has {}. Adherence is {}. Latest vitals: {}.",
            self.patient.name, self.patient.condition, self.patient.adherence_rate, vitals
        )
    }

    /// Runs the AI adherence analysis and stores the insight.
    ///
    /// # Errors
    ///
    /// Refused while a previous analysis is running. Provider failures
    /// do not surface here; the client degrades to fallback text.
    pub async fn analyze<P: TextProvider>(
        &mut self,
        client: &AiClient<P>,
    ) -> DashboardResult<&str> {
        self.analysis_state.begin()?;
        let summary = self.data_summary();
        let insight = client.analyze_adherence_pattern(&summary).await;
        self.analysis = Some(insight);
        self.analysis_state.succeed();
        Ok(self.analysis.as_deref().unwrap_or_default())
    }
}
