//! The third-party text-generation boundary.
//!
//! [`TextProvider`] is the single seam between this crate and whichever
//! generative model backs it. The client composes a natural-language
//! instruction prompt; the provider returns the model's text or an error.
//! Trait-based injection keeps every entry point testable without a live
//! provider.

use std::future::Future;

/// Errors surfaced by a text-generation provider.
///
/// These never escape [`crate::AiClient`]: each entry point converts them
/// into its fixed human-readable fallback string.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider call itself failed (network, auth, quota).
    #[error("provider call failed: {0}")]
    Call(String),
    /// The provider answered with an empty or unusable payload.
    #[error("provider returned an empty response")]
    EmptyResponse,
}

/// A generative-text completion backend.
///
/// Implementations perform exactly one call per invocation; retry and
/// rate-limiting policy is deliberately out of scope here.
pub trait TextProvider: Send + Sync {
    /// Generates free-form text for the given instruction prompt.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, ProviderError>> + Send;

    /// Generates text constrained to a JSON object with the given keys.
    ///
    /// The default implementation forwards to [`TextProvider::generate`]
    /// with the schema hint appended to the prompt, which suits providers
    /// without a structured-output mode.
    fn generate_json(
        &self,
        prompt: &str,
        keys: &[&str],
    ) -> impl Future<Output = Result<String, ProviderError>> + Send {
        let prompt = format!(
            "{prompt}\n\nRespond with a single JSON object with string fields: {}.",
            keys.join(", ")
        );
        async move { self.generate(&prompt).await }
    }
}

/// A provider with no backend. Every call fails.
///
/// Suits demo-mode clients, which never reach their provider, and tests
/// of fallback behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProvider;

impl TextProvider for NullProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Call("no provider configured".to_string()))
    }
}
