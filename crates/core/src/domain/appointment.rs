//! Appointments owned by a patient record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduling state of an appointment.
///
/// No transition logic exists beyond the seeded value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Missed,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Missed => "Missed",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A clinic or lab appointment, owned by one patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub date: NaiveDate,
    /// Display time, e.g. "09:00 AM".
    pub time: String,
    /// Appointment kind, e.g. "Cardiology Check-up".
    pub label: String,
    pub provider: String,
    pub status: AppointmentStatus,
}
