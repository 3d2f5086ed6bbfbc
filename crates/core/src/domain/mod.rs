//! Domain records for the provider dashboard.
//!
//! Plain data shapes with no persistence: everything lives in memory for
//! the duration of a session.

pub mod appointment;
pub mod loyalty;
pub mod medication;
pub mod patient;
pub mod survey;
pub mod template;
pub mod vitals;

pub use appointment::{Appointment, AppointmentStatus};
pub use loyalty::{LoyaltyRule, PendingRedemption, Reward, RewardCategory};
pub use medication::Medication;
pub use patient::{
    AdherenceStatus, CommunicationChannel, Patient, PatientDraft, SubscriptionStatus,
};
pub use survey::SurveyResponse;
pub use template::{Region, RegionTemplate, TemplateCategory};
pub use vitals::{classify, VitalLog, VitalStatus, VitalType};
