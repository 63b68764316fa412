//! Structured diagnostics emitted while processing a BOM.
//!
//! Components take a `&mut Diagnostics` and record what they observed; the
//! sink keeps every event for the caller and forwards it to `tracing`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::InputColumn;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Debug,
    Info,
    Warning,
}

/// One observation made while processing a BOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Raw headers resolved to canonical columns.
    ColumnsMapped { mapping: Vec<(String, InputColumn)> },
    /// A second header resolved to an already mapped canonical column.
    DuplicateColumn {
        header: String,
        column: InputColumn,
        kept: String,
    },
    /// No part type or value could be derived from the description.
    UnrecognizedDescription {
        row_number: usize,
        description: String,
    },
    /// A Quantity cell held something that is not a number.
    InvalidQuantity { row_number: usize, value: String },
    /// A row was excluded because required inputs were null.
    RowDropped {
        row_number: usize,
        missing: Vec<InputColumn>,
    },
}

impl Diagnostic {
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Diagnostic::ColumnsMapped { .. } => DiagnosticLevel::Info,
            Diagnostic::UnrecognizedDescription { .. } => DiagnosticLevel::Debug,
            Diagnostic::DuplicateColumn { .. }
            | Diagnostic::InvalidQuantity { .. }
            | Diagnostic::RowDropped { .. } => DiagnosticLevel::Warning,
        }
    }

    /// Source row the diagnostic refers to, if any.
    pub fn row_number(&self) -> Option<usize> {
        match self {
            Diagnostic::UnrecognizedDescription { row_number, .. }
            | Diagnostic::InvalidQuantity { row_number, .. }
            | Diagnostic::RowDropped { row_number, .. } => Some(*row_number),
            Diagnostic::ColumnsMapped { .. } | Diagnostic::DuplicateColumn { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ColumnsMapped { mapping } => {
                let pairs: Vec<String> = mapping
                    .iter()
                    .map(|(header, column)| format!("{header:?} -> {column}"))
                    .collect();
                write!(f, "column mapping: {}", pairs.join(", "))
            }
            Diagnostic::DuplicateColumn {
                header,
                column,
                kept,
            } => write!(
                f,
                "header {header:?} also matches {column}; keeping {kept:?}"
            ),
            Diagnostic::UnrecognizedDescription {
                row_number,
                description,
            } => write!(
                f,
                "row {row_number} might have an unrecognized description: {description:?}"
            ),
            Diagnostic::InvalidQuantity { row_number, value } => {
                write!(f, "row {row_number} has a non-numeric quantity: {value:?}")
            }
            Diagnostic::RowDropped {
                row_number,
                missing,
            } => {
                let keys: Vec<&str> = missing.iter().map(InputColumn::key).collect();
                write!(f, "row {row_number} dropped, missing {}", keys.join(", "))
            }
        }
    }
}

/// Collects diagnostics and mirrors them to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    events: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level() {
            DiagnosticLevel::Debug => tracing::debug!(row = ?diagnostic.row_number(), "{diagnostic}"),
            DiagnosticLevel::Info => tracing::info!("{diagnostic}"),
            DiagnosticLevel::Warning => tracing::warn!(row = ?diagnostic.row_number(), "{diagnostic}"),
        }
        self.events.push(diagnostic);
    }

    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Diagnostic> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn count_at(&self, level: DiagnosticLevel) -> usize {
        self.events.iter().filter(|d| d.level() == level).count()
    }

    /// Events matching a predicate, e.g. `|d| matches!(d, Diagnostic::RowDropped { .. })`.
    pub fn filter<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Diagnostic>
    where
        P: Fn(&Diagnostic) -> bool + 'a,
    {
        self.events.iter().filter(move |d| predicate(d))
    }
}
