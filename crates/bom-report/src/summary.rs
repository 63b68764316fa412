//! Report-level summary figures.

use std::path::Path;

use bom_enrich::EnrichedRow;
use bom_validate::{CheckedField, CompletenessSummary};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::frame::total_base_failure_rate;

/// Figures written to the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub source_file: String,
    pub generated_at: String,
    pub kept_rows: usize,
    pub dropped_rows: usize,
    pub complete_rows: usize,
    pub incomplete_rows: usize,
    pub total_base_failure_rate: f64,
    pub missing_counts: Vec<(CheckedField, usize)>,
}

impl ReportSummary {
    pub fn new(
        source_file: &Path,
        rows: &[EnrichedRow],
        dropped_rows: usize,
        completeness: &CompletenessSummary,
    ) -> Self {
        Self {
            source_file: source_file.display().to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            kept_rows: rows.len(),
            dropped_rows,
            complete_rows: completeness.complete_rows,
            incomplete_rows: completeness.incomplete_rows(),
            total_base_failure_rate: total_base_failure_rate(rows),
            missing_counts: completeness.missing_counts.clone(),
        }
    }

    /// `(metric, value)` pairs in the order they appear in the summary table.
    pub fn metrics(&self) -> Vec<(String, String)> {
        let mut metrics = vec![
            (
                "Total Base Failure Rate".to_string(),
                self.total_base_failure_rate.to_string(),
            ),
            ("Rows Kept".to_string(), self.kept_rows.to_string()),
            ("Rows Dropped".to_string(), self.dropped_rows.to_string()),
            ("Rows Complete".to_string(), self.complete_rows.to_string()),
            ("Rows Incomplete".to_string(), self.incomplete_rows.to_string()),
        ];
        metrics.extend(
            self.missing_counts
                .iter()
                .map(|(field, count)| (format!("Missing {field}"), count.to_string())),
        );
        metrics.push(("Source File".to_string(), self.source_file.clone()));
        metrics.push(("Generated At".to_string(), self.generated_at.clone()));
        metrics
    }
}
