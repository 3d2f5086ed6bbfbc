//! Error taxonomy for the dashboard core.
//!
//! Validation failures are surfaced as typed errors whose display text is
//! the user-facing message; external-call failures never reach this enum
//! because the AI client degrades to fallback strings at its own boundary.
//! Nothing here is fatal to a session.

/// Errors produced by dashboard state operations.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    // Authentication form validation.
    #[error("Passwords do not match. Please verify your entries.")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("invalid signup field: {0}")]
    InvalidSignupField(#[from] jemine_types::ValueError),

    // Composer schedule validation.
    #[error("Please set an end date for the reminder campaign.")]
    MissingEndDate,
    #[error("End date must be after start date.")]
    EndDateNotAfterStart,
    #[error("message context and recipient are required before sending")]
    ComposerNotReady,

    // Patient-detail sub-forms.
    #[error("reminder title cannot be empty")]
    MissingReminderTitle,
    #[error("Please select a medication and a {0} date.")]
    MissingDeliveryFields(String),
    #[error("vital reading cannot be empty")]
    MissingVitalValue,

    // Loyalty rule management.
    #[error("a loyalty rule needs an action and a positive point value")]
    InvalidLoyaltyRule,

    // Voice recorder.
    #[error("Microphone access denied. Please enable permissions in your browser.")]
    MicrophoneDenied,
    #[error("recording is already in progress")]
    AlreadyRecording,
    #[error("no recording available")]
    NoRecording,

    // Cross-cutting.
    #[error("No patient data available to export.")]
    EmptyExport,
    #[error("unknown patient: {0}")]
    UnknownPatient(String),
    #[error("operation already in flight")]
    OperationInFlight,
}

pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
