//! Vital sign logs and their threshold classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BLOOD_SUGAR_CRITICAL, BLOOD_SUGAR_WARNING, BP_SYSTOLIC_CRITICAL, BP_SYSTOLIC_WARNING,
};

/// The kind of vital reading logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalType {
    #[serde(rename = "Blood Pressure")]
    BloodPressure,
    #[serde(rename = "Blood Sugar")]
    BloodSugar,
    Weight,
    #[serde(rename = "Heart Rate")]
    HeartRate,
}

impl VitalType {
    pub fn label(&self) -> &'static str {
        match self {
            VitalType::BloodPressure => "Blood Pressure",
            VitalType::BloodSugar => "Blood Sugar",
            VitalType::Weight => "Weight",
            VitalType::HeartRate => "Heart Rate",
        }
    }

    /// The unit the entry form defaults to for this type.
    pub fn default_unit(&self) -> &'static str {
        match self {
            VitalType::BloodPressure => "mmHg",
            VitalType::BloodSugar => "mg/dL",
            VitalType::Weight => "kg",
            VitalType::HeartRate => "bpm",
        }
    }
}

impl std::fmt::Display for VitalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification computed once at insertion time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalStatus {
    Normal,
    Warning,
    Critical,
}

impl VitalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VitalStatus::Normal => "Normal",
            VitalStatus::Warning => "Warning",
            VitalStatus::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One logged vital reading, owned by one patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalLog {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub vital_type: VitalType,
    /// Raw reading as entered, e.g. "120/80" or "165".
    pub value: String,
    pub unit: String,
    pub status: VitalStatus,
}

/// Classifies a raw reading against the per-type thresholds.
///
/// Blood pressure reads the systolic figure before the `/`; blood sugar
/// reads the whole value. Weight and heart rate have no thresholds
/// defined and always classify `Normal` — a documented edge case, not a
/// gap to fix silently. Unparseable numbers also classify `Normal`.
pub fn classify(vital_type: VitalType, value: &str) -> VitalStatus {
    let leading_number = |s: &str| -> Option<i32> {
        let digits: String = s
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    };

    match vital_type {
        VitalType::BloodPressure => {
            let systolic = value.split('/').next().and_then(leading_number);
            match systolic {
                Some(s) if s > BP_SYSTOLIC_CRITICAL => VitalStatus::Critical,
                Some(s) if s > BP_SYSTOLIC_WARNING => VitalStatus::Warning,
                _ => VitalStatus::Normal,
            }
        }
        VitalType::BloodSugar => match leading_number(value) {
            Some(v) if v > BLOOD_SUGAR_CRITICAL => VitalStatus::Critical,
            Some(v) if v > BLOOD_SUGAR_WARNING => VitalStatus::Warning,
            _ => VitalStatus::Normal,
        },
        VitalType::Weight | VitalType::HeartRate => VitalStatus::Normal,
    }
}
