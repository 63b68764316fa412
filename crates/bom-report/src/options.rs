//! Report output settings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Which report files to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Data table and summary table as CSV.
    #[default]
    Csv,
    /// One JSON document with the summary and all rows.
    Json,
    Both,
}

impl ReportFormat {
    pub fn writes_csv(self) -> bool {
        matches!(self, ReportFormat::Csv | ReportFormat::Both)
    }

    pub fn writes_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Both => "both",
        })
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "both" => Ok(ReportFormat::Both),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Where and how the report is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
    pub format: ReportFormat,
    /// File name stem; files are `<stem>.csv`, `<stem>_summary.csv`, `<stem>.json`.
    pub file_stem: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            format: ReportFormat::default(),
            file_stem: "processed_bom".to_string(),
        }
    }
}

impl ReportOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.csv", self.file_stem))
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_summary.csv", self.file_stem))
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.file_stem))
    }
}
