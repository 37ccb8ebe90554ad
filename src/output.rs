//! GPA report formatting and persistence.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info};

use crate::credit::Credit;
use crate::error::LedgerError;
use crate::gpa::{gpa, total_weight};

/// Summary of one GPA computation.
#[derive(Debug, Serialize)]
pub struct GpaReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub courses: usize,
    pub total_credits: f64,
    pub gpa: f64,
}

impl GpaReport {
    /// Computes the GPA of `credits` and records it with its inputs' totals.
    pub fn from_credits(source: &str, credits: &[Credit]) -> Result<Self, LedgerError> {
        Ok(GpaReport {
            generated_at: Utc::now(),
            source: source.to_string(),
            courses: credits.len(),
            total_credits: total_weight(credits),
            gpa: gpa(credits)?,
        })
    }

    /// Builds a report for a GPA computed elsewhere, e.g. by a merge or exclusion.
    pub fn with_gpa(source: &str, credits: &[Credit], gpa: f64) -> Self {
        GpaReport {
            generated_at: Utc::now(),
            source: source.to_string(),
            courses: credits.len(),
            total_credits: total_weight(credits),
            gpa,
        }
    }
}

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &GpaReport) {
    debug!("{:#?}", report);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &GpaReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends a [`GpaReport`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, report: &GpaReport) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(report)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_report() -> GpaReport {
        let credits = vec![Credit::new("Math", 90.0, 4.0), Credit::new("PE", 85.0, 2.0)];
        GpaReport::from_credits("sample", &credits).unwrap()
    }

    #[test]
    fn test_report_from_credits() {
        let report = sample_report();

        assert_eq!(report.source, "sample");
        assert_eq!(report.courses, 2);
        assert_eq!(report.total_credits, 6.0);
        assert!((report.gpa - 530.0 / 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_from_empty_credits_fails() {
        assert!(matches!(
            GpaReport::from_credits("empty", &[]),
            Err(LedgerError::DivisionByZero)
        ));
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_report());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_report()).unwrap();
    }

    #[test]
    fn test_append_record_writes_header_once() {
        let path = temp_path("ngpa_test_header.csv");
        let _ = fs::remove_file(&path);

        let report = sample_report();
        append_record(&path, &report).unwrap();
        append_record(&path, &report).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content
            .lines()
            .filter(|l| l.starts_with("generated_at"))
            .count();
        assert_eq!(header_count, 1);

        // 1 header + 2 data rows
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }
}
