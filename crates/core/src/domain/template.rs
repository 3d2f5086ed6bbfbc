//! Region-aware outreach message templates.

use serde::{Deserialize, Serialize};

/// Broad region a template's phrasing is written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "West Africa")]
    WestAfrica,
    #[serde(rename = "East Africa")]
    EastAfrica,
    #[serde(rename = "Southern Africa")]
    SouthernAfrica,
    #[serde(rename = "North Africa")]
    NorthAfrica,
    General,
}

impl Region {
    pub fn label(&self) -> &'static str {
        match self {
            Region::WestAfrica => "West Africa",
            Region::EastAfrica => "East Africa",
            Region::SouthernAfrica => "Southern Africa",
            Region::NorthAfrica => "North Africa",
            Region::General => "General",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What kind of outreach a template is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateCategory {
    Reminder,
    Refill,
    Welcome,
}

/// A reusable culturally targeted message template.
///
/// `[Name]` inside `content` is a placeholder substituted by the care
/// provider, not by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTemplate {
    pub id: String,
    pub title: String,
    pub region: Region,
    pub category: TemplateCategory,
    pub content: String,
}
