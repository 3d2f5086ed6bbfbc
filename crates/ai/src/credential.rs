//! API credential resolution.
//!
//! The credential should be resolved once at startup and passed into
//! [`crate::AiClient`], rather than read from the environment during
//! request handling.

/// The literal placeholder credential that activates demo mode.
///
/// When the configured credential equals this value, every client entry
/// point short-circuits into a fixed-delay canned response and the
/// provider is never contacted.
pub const PLACEHOLDER_CREDENTIAL: &str = "dummy_key_for_demo_ui";

/// Environment variable holding the provider API key.
const API_KEY_VAR: &str = "API_KEY";

/// A resolved text-generation API credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Resolves a credential from an optional configured value.
    ///
    /// `None`, empty, or whitespace-only values resolve to the demo
    /// placeholder.
    pub fn from_value(value: Option<String>) -> Self {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Self(value.unwrap_or_else(|| PLACEHOLDER_CREDENTIAL.to_string()))
    }

    /// Resolves the credential from the `API_KEY` environment variable.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_KEY_VAR).ok())
    }

    /// Whether this credential is the demo placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_CREDENTIAL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiCredential {
    fn default() -> Self {
        Self(PLACEHOLDER_CREDENTIAL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_resolve_to_placeholder() {
        assert!(ApiCredential::from_value(None).is_placeholder());
        assert!(ApiCredential::from_value(Some("   ".into())).is_placeholder());
        assert!(ApiCredential::from_value(Some(String::new())).is_placeholder());
    }

    #[test]
    fn configured_value_is_kept() {
        let cred = ApiCredential::from_value(Some("  real-key  ".into()));
        assert!(!cred.is_placeholder());
        assert_eq!(cred.as_str(), "real-key");
    }
}
