//! # Jemine Core
//!
//! Domain model and view-model state for the Jemine provider dashboard:
//! the in-memory patient roster, the per-screen state machines
//! (directory, patient detail, outreach composer, voice recorder,
//! dashboard campaigns), analytics series, and CSV export.
//!
//! Everything is session-scoped and in-memory. There is no persistence
//! layer and no real transport: every "send" awaits a fixed timer
//! behind an explicit async boundary so genuine calls can replace the
//! simulation later. AI text generation is delegated to `jemine-ai`.

pub mod analytics;
pub mod app;
pub mod assistant;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod detail;
pub mod directory;
pub mod domain;
pub mod error;
pub mod export;
pub mod i18n;
pub mod ops;
pub mod recorder;
pub mod registry;
pub mod seed;

pub use app::{AppState, AppView, AuthMode, SignupForm, Tab};
pub use dashboard::DashboardStats;
pub use error::{DashboardError, DashboardResult};
pub use ops::OpState;
pub use registry::PatientRegistry;
