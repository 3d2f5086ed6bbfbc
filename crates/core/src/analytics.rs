//! Population-level chart series derived from the roster and survey
//! responses.

use serde::{Deserialize, Serialize};

use crate::domain::SurveyResponse;
use crate::registry::PatientRegistry;

/// One labelled chart value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: usize,
}

/// One point of the weekly adherence trend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherencePoint {
    pub label: String,
    /// Mean adherence for the week, as a whole percentage.
    pub value: u32,
}

/// Counts grouped by a label, in first-seen roster order so the chart
/// segments stay stable as records mutate.
fn breakdown<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = Vec::new();
    for label in labels {
        match points.iter_mut().find(|p| p.name == label) {
            Some(point) => point.value += 1,
            None => points.push(ChartPoint {
                name: label.to_string(),
                value: 1,
            }),
        }
    }
    points
}

/// Patients per condition.
pub fn condition_breakdown(registry: &PatientRegistry) -> Vec<ChartPoint> {
    breakdown(registry.iter().map(|p| p.condition.as_str()))
}

/// Patients per adherence status.
pub fn status_breakdown(registry: &PatientRegistry) -> Vec<ChartPoint> {
    breakdown(registry.iter().map(|p| p.status.label()))
}

/// Patients per spoken language.
pub fn language_breakdown(registry: &PatientRegistry) -> Vec<ChartPoint> {
    breakdown(registry.iter().map(|p| p.language.as_str()))
}

/// Patients per subscription status.
pub fn subscription_breakdown(registry: &PatientRegistry) -> Vec<ChartPoint> {
    breakdown(registry.iter().map(|p| p.subscription_status.label()))
}

/// Survey ratings bucketed into the five star levels, lowest first.
pub fn satisfaction_histogram(responses: &[SurveyResponse]) -> Vec<ChartPoint> {
    let mut counts = [0usize; 5];
    for response in responses {
        counts[(response.rating.stars() - 1) as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| ChartPoint {
            name: format!("{} Stars", i + 1),
            value: count,
        })
        .collect()
}
