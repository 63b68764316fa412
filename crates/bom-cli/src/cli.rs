//! CLI argument definitions for the BOM preprocessor.

use std::path::PathBuf;

use bom_model::SheetSelector;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bom",
    version,
    about = "BOM preprocessor - normalize engineering BOMs for reliability analysis",
    long_about = "Normalize engineering bills of materials for reliability analysis.\n\n\
                  Maps BOM headers to canonical columns, parses part descriptions into\n\
                  type, value, tolerance and voltage, flags incomplete rows and writes\n\
                  a data table plus a summary with the total base failure rate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a BOM spreadsheet and write the report.
    Process(ProcessArgs),

    /// List canonical columns and the headers accepted for each.
    Columns,

    /// List MIL-HDBK-217 chapters and sections.
    Sections(SectionsArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// BOM file (.xlsx, .xlsm, .xls, .xlsb, .ods or .csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sheet to read, by name or 0-based index (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME|INDEX")]
    pub sheet: Option<SheetSelector>,

    /// Rows above the header row to skip (default: 1).
    #[arg(long = "indicator-rows", value_name = "N")]
    pub indicator_rows: Option<usize>,

    /// Output directory for report files (default: output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format to write (default: csv).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Process and summarize without writing report files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the reliability lookup; MIL-HDBK-217 sections are still attached.
    #[arg(long = "no-enrich")]
    pub no_enrich: bool,

    /// Exit with status 1 when any row was dropped or is incomplete.
    #[arg(long = "strict")]
    pub strict: bool,

    /// TOML configuration file; flags given here override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SectionsArgs {
    /// Only show chapters and sections whose title contains TEXT.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
