//! Patient satisfaction survey responses.

use chrono::NaiveDate;
use jemine_types::Rating;
use serde::{Deserialize, Serialize};

/// One submitted survey response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: String,
    pub patient_name: String,
    pub date: NaiveDate,
    pub rating: Rating,
    pub comment: String,
}
