//! Session-scoped provider preferences.
//!
//! Settings and profile state are process-wide UI preferences with an
//! explicit session-only lifecycle: nothing is persisted, and `Default`
//! is the documented reset-on-restart contract.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Display currency for medication prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "NGN")]
    Ngn,
    #[serde(rename = "KES")]
    Kes,
    #[serde(rename = "GHS")]
    Ghs,
    #[serde(rename = "ZAR")]
    Zar,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Kes => "KES",
            Currency::Ghs => "GHS",
            Currency::Zar => "ZAR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Ngn => "₦",
            Currency::Kes => "KSh",
            Currency::Ghs => "₵",
            Currency::Zar => "R",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Eur => "€",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Provider-wide preference state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Mask patient health information by default.
    ///
    /// The directory's per-row phone reveal is a separate mechanism and
    /// does not consult this flag.
    pub mask_phi: bool,
    pub email_alerts: bool,
    pub daily_digest: bool,
    pub dark_mode: bool,
    pub language: Language,
    pub currency: Currency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mask_phi: true,
            email_alerts: true,
            daily_digest: false,
            dark_mode: false,
            language: Language::English,
            currency: Currency::Ngn,
        }
    }
}

/// The signed-in provider's editable profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub facility: String,
    pub email: String,
    /// Assigned identifier; not editable in the settings form.
    pub provider_id: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Pharm. A. Bello".to_string(),
            role: "Lead Pharmacist".to_string(),
            facility: "General Hospital • Pharmacy Unit".to_string(),
            email: "pharm.bello@hospital.com".to_string(),
            provider_id: "PHARM-BELLO-001".to_string(),
        }
    }
}
