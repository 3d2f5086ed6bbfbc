//! PHI roster export as CSV.

use chrono::NaiveDate;
use tracing::warn;

use crate::constants::PHI_EXPORT_HEADERS;
use crate::error::{DashboardError, DashboardResult};
use crate::registry::PatientRegistry;

/// A generated CSV artifact ready for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvReport {
    pub filename: String,
    pub content: String,
}

/// Builds the PHI report over the whole roster.
///
/// One row per patient; adherence is rendered as `NN%` and the contact
/// date in ISO form. Values are written as-is, matching the on-screen
/// export (fields containing commas are not escaped there either).
///
/// # Errors
///
/// An empty roster yields no artifact.
pub fn export_phi(registry: &PatientRegistry, today: NaiveDate) -> DashboardResult<CsvReport> {
    if registry.is_empty() {
        warn!("PHI export requested with an empty roster");
        return Err(DashboardError::EmptyExport);
    }

    let mut lines = vec![PHI_EXPORT_HEADERS.join(",")];
    for p in registry.iter() {
        lines.push(
            [
                p.id.clone(),
                p.name.clone(),
                p.age.to_string(),
                p.condition.clone(),
                p.phone.clone(),
                p.adherence_rate.to_string(),
                p.status.label().to_string(),
                p.last_contact.to_string(),
            ]
            .join(","),
        );
    }

    Ok(CsvReport {
        filename: format!("PHI_Report_{today}.csv"),
        content: lines.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date")
    }

    #[test]
    fn report_has_a_header_and_one_row_per_patient() {
        let registry = PatientRegistry::seeded();
        let report = export_phi(&registry, today()).expect("nonempty roster");

        assert_eq!(report.filename, "PHI_Report_2024-07-01.csv");
        let mut lines = report.content.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Name,Age,Condition,Phone,Adherence Rate,Status,Last Contact")
        );
        assert_eq!(lines.count(), registry.len());
    }

    #[test]
    fn rows_render_adherence_as_a_percentage() {
        let registry = PatientRegistry::seeded();
        let report = export_phi(&registry, today()).expect("nonempty roster");

        let row = report
            .content
            .lines()
            .find(|l| l.starts_with("P001,"))
            .expect("seed patient row");
        assert!(row.contains(",92%,"));
        assert!(row.contains(",Excellent,"));
        assert!(row.ends_with("2023-10-24"));
    }

    #[test]
    fn empty_roster_is_refused() {
        let registry = PatientRegistry::new(Vec::new());
        let err = export_phi(&registry, today()).expect_err("nothing to export");
        assert_eq!(err.to_string(), "No patient data available to export.");
    }
}
