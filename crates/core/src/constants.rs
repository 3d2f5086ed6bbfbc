//! Fixed values used throughout the dashboard core.

use std::time::Duration;

/// Days of supply restored by a refill check-in.
pub const REFILL_RESET_DAYS: u32 = 30;

/// Systolic blood pressure above this reads as a warning.
pub const BP_SYSTOLIC_WARNING: i32 = 140;
/// Systolic blood pressure above this reads as critical.
pub const BP_SYSTOLIC_CRITICAL: i32 = 160;
/// Blood sugar (mg/dL) above this reads as a warning.
pub const BLOOD_SUGAR_WARNING: i32 = 140;
/// Blood sugar (mg/dL) above this reads as critical.
pub const BLOOD_SUGAR_CRITICAL: i32 = 200;

/// Default time-of-day for new reminder schedules.
pub const DEFAULT_SCHEDULE_TIME: &str = "09:00";

/// Simulated parse delay for the patient-file import.
pub const IMPORT_DELAY: Duration = Duration::from_millis(1000);
/// Simulated transport delay for a composed outreach message.
pub const MESSAGE_SEND_DELAY: Duration = Duration::from_millis(1500);
/// Simulated upload delay for a voice note.
pub const VOICE_SEND_DELAY: Duration = Duration::from_millis(2000);
/// Simulated transport delay for the bulk refill broadcast.
pub const REFILL_BROADCAST_DELAY: Duration = Duration::from_millis(2000);
/// Simulated transport delay for the survey dispatch.
pub const SURVEY_DISPATCH_DELAY: Duration = Duration::from_millis(2000);

/// Header row of the PHI export artifact.
pub const PHI_EXPORT_HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Age",
    "Condition",
    "Phone",
    "Adherence Rate",
    "Status",
    "Last Contact",
];

/// Fixed satisfaction score shown on the dashboard (1-5 scale).
pub const AVG_SATISFACTION: f32 = 4.5;
