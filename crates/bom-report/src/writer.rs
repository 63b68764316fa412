//! Writes report files to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bom_enrich::EnrichedRow;
use polars::prelude::*;
use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::frame::to_dataframe;
use crate::options::ReportOptions;
use crate::summary::ReportSummary;

/// Files produced by [`write_report`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPaths {
    pub data_csv: Option<PathBuf>,
    pub summary_csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl ReportPaths {
    pub fn written(&self) -> Vec<&Path> {
        [&self.data_csv, &self.summary_csv, &self.json]
            .into_iter()
            .filter_map(Option::as_deref)
            .collect()
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    summary: &'a ReportSummary,
    rows: &'a [EnrichedRow],
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes the files selected by `options.format` into `options.output_dir`.
pub fn write_report(
    rows: &[EnrichedRow],
    summary: &ReportSummary,
    options: &ReportOptions,
) -> Result<ReportPaths> {
    fs::create_dir_all(&options.output_dir).map_err(|e| io_error(&options.output_dir, e))?;
    let mut paths = ReportPaths::default();

    if options.format.writes_csv() {
        let data_path = options.data_path();
        write_data_csv(rows, &data_path)?;
        paths.data_csv = Some(data_path);

        let summary_path = options.summary_path();
        write_summary_csv(summary, &summary_path)?;
        paths.summary_csv = Some(summary_path);
    }
    if options.format.writes_json() {
        let json_path = options.json_path();
        write_json(rows, summary, &json_path)?;
        paths.json = Some(json_path);
    }

    tracing::info!(
        output_dir = %options.output_dir.display(),
        files = paths.written().len(),
        "report written"
    );
    Ok(paths)
}

/// Writes the data table with polars' CSV writer.
pub fn write_data_csv(rows: &[EnrichedRow], path: &Path) -> Result<()> {
    let polars_error = |source| ReportError::Polars {
        path: path.to_path_buf(),
        source,
    };
    let mut df = to_dataframe(rows).map_err(polars_error)?;
    let mut file = File::create(path).map_err(|e| io_error(path, e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .map_err(polars_error)?;
    tracing::debug!(path = %path.display(), rows = df.height(), "data table written");
    Ok(())
}

/// Writes the two-column `Metric,Value` summary table.
pub fn write_summary_csv(summary: &ReportSummary, path: &Path) -> Result<()> {
    let csv_error = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(["Metric", "Value"]).map_err(csv_error)?;
    for (metric, value) in summary.metrics() {
        writer.write_record([metric, value]).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| io_error(path, e))
}

/// Writes `{ "summary": ..., "rows": [...] }`.
pub fn write_json(rows: &[EnrichedRow], summary: &ReportSummary, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &ReportDocument { summary, rows }).map_err(
        |source| ReportError::Json {
            path: path.to_path_buf(),
            source,
        },
    )?;
    writer.write_all(b"\n").map_err(|e| io_error(path, e))?;
    writer.flush().map_err(|e| io_error(path, e))
}
