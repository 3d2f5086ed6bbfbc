//! # Jemine AI
//!
//! Text-generation client for the Jemine provider dashboard.
//!
//! This crate wraps a third-party generative-text provider behind the
//! [`TextProvider`] trait and exposes three entry points on [`AiClient`]:
//! patient outreach drafting, adherence-pattern analysis, and survey
//! invitation previews. Every entry point is single-shot (no retry, no
//! backoff) and always resolves to usable text: provider failures are
//! mapped to fixed fallback strings at the call site, and a placeholder
//! credential switches the whole client into demo mode with canned
//! responses.
//!
//! **No UI concerns**: view state, scheduling validation, and send
//! simulation live in `jemine-core`.

mod client;
mod credential;
mod provider;

pub use client::{AiClient, MessageGoal, SurveyPreview};
pub use credential::{ApiCredential, PLACEHOLDER_CREDENTIAL};
pub use provider::{NullProvider, ProviderError, TextProvider};
