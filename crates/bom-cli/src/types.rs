use std::path::PathBuf;

use bom_enrich::EnrichedRow;
use bom_model::{Diagnostic, DroppedRow};
use bom_report::ReportPaths;
use bom_validate::CompletenessSummary;

#[derive(Debug)]
pub struct ProcessResult {
    pub source: PathBuf,
    pub rows: Vec<EnrichedRow>,
    pub dropped: Vec<DroppedRow>,
    pub completeness: CompletenessSummary,
    pub diagnostics: Vec<Diagnostic>,
    pub total_base_failure_rate: f64,
    /// `None` on a dry run.
    pub report: Option<ReportPaths>,
    pub enriched: bool,
}

impl ProcessResult {
    /// Any dropped or incomplete row; `--strict` turns this into a failure.
    pub fn has_issues(&self) -> bool {
        !self.dropped.is_empty() || self.completeness.incomplete_rows() > 0
    }
}
