//! Raw spreadsheet cells and tables as read from a BOM source.

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell with no type guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Returns true for empty cells and text cells that are blank after trimming.
    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(value) => value.is_nan(),
            CellValue::Bool(_) => false,
        }
    }

    /// Returns the trimmed text of a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text.trim()),
            _ => None,
        }
    }

    /// Renders the cell as display text, or `None` when the cell is null.
    ///
    /// Whole numbers drop their fractional part so a find number stored as
    /// `1.0` renders as `"1"`.
    pub fn to_display(&self) -> Option<String> {
        if self.is_null() {
            return None;
        }
        match self {
            CellValue::Text(text) => Some(text.trim().to_string()),
            CellValue::Number(value) => Some(format_number(*value)),
            CellValue::Bool(value) => Some(value.to_string()),
            CellValue::Empty => None,
        }
    }

    /// Interprets the cell as a number.
    ///
    /// Text is accepted when it parses after removing thousands separators
    /// and whitespace.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) if value.is_finite() => Some(*value),
            CellValue::Text(text) => {
                let cleaned: String = text
                    .trim()
                    .chars()
                    .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
                    .collect();
                if cleaned.is_empty() {
                    return None;
                }
                cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
            }
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// One data row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based row number in the source spreadsheet.
    pub row_number: usize,
    pub cells: Vec<CellValue>,
}

impl RawRow {
    pub fn new(row_number: usize, cells: Vec<CellValue>) -> Self {
        Self { row_number, cells }
    }

    /// Cell at `index`, or `Empty` for short rows.
    pub fn cell(&self, index: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.cells.get(index).unwrap_or(EMPTY)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_null)
    }
}

/// A raw table: the header row plus the data rows below it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Position of a header by exact name.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_null() {
        assert!(CellValue::Text("   ".to_string()).is_null());
        assert!(CellValue::Empty.is_null());
        assert!(!CellValue::Number(0.0).is_null());
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(1.0).to_display(), Some("1".to_string()));
        assert_eq!(CellValue::Number(2.5).to_display(), Some("2.5".to_string()));
        assert_eq!(
            CellValue::Text("  R1, R2 ".to_string()).to_display(),
            Some("R1, R2".to_string())
        );
        assert_eq!(CellValue::Empty.to_display(), None);
    }

    #[test]
    fn numbers_parse_from_text() {
        assert_eq!(CellValue::from("1,200").to_number(), Some(1200.0));
        assert_eq!(CellValue::from(" 10 ").to_number(), Some(10.0));
        assert_eq!(CellValue::from("ten").to_number(), None);
        assert_eq!(CellValue::Number(3.0).to_number(), Some(3.0));
        assert_eq!(CellValue::Empty.to_number(), None);
    }

    #[test]
    fn short_rows_pad_with_empty() {
        let row = RawRow::new(3, vec![CellValue::from("a")]);
        assert_eq!(row.cell(5), &CellValue::Empty);
        assert!(!row.is_blank());
        assert!(RawRow::new(4, vec![CellValue::Empty, CellValue::from(" ")]).is_blank());
    }
}
