//! Canonical row assembly.

use bom_map::ColumnMapping;
use bom_model::{
    BomTable, CanonicalRow, CellValue, Diagnostic, Diagnostics, DroppedRow, InputColumn,
    PipelineOptions, RawRow, RawTable, RequiredInputs,
};

use crate::description::parse_description_cell;

/// Projects every raw row onto the canonical schema.
///
/// Fully blank rows are skipped. Rows with a null required input are dropped
/// and reported. Kept rows stay in source order.
pub fn build_canonical_rows(
    table: &RawTable,
    mapping: &ColumnMapping,
    options: &PipelineOptions,
    diagnostics: &mut Diagnostics,
) -> BomTable {
    let mut output = BomTable::default();
    let mut blank = 0usize;

    for raw in &table.rows {
        if raw.is_blank() {
            blank += 1;
            continue;
        }
        let inputs = match required_inputs(raw, mapping, diagnostics) {
            Ok(inputs) => inputs,
            Err(missing) => {
                diagnostics.record(Diagnostic::RowDropped {
                    row_number: raw.row_number,
                    missing: missing.clone(),
                });
                output.dropped.push(DroppedRow {
                    row_number: raw.row_number,
                    missing,
                });
                continue;
            }
        };

        let description = raw.cell(mapping.index_of(InputColumn::Description));
        let parsed = parse_description_cell(description, options.significant_digits);
        if parsed.is_unrecognized() {
            diagnostics.record(Diagnostic::UnrecognizedDescription {
                row_number: raw.row_number,
                description: inputs.description.clone(),
            });
        }
        output.rows.push(CanonicalRow::new(inputs, parsed));
    }

    tracing::debug!(
        kept = output.rows.len(),
        dropped = output.dropped.len(),
        blank,
        "canonical rows built"
    );
    output
}

/// Reads the five required inputs, or the columns that are null.
fn required_inputs(
    raw: &RawRow,
    mapping: &ColumnMapping,
    diagnostics: &mut Diagnostics,
) -> Result<RequiredInputs, Vec<InputColumn>> {
    let cell = |column: InputColumn| raw.cell(mapping.index_of(column));
    let text = |column: InputColumn| cell(column).to_display();

    let find_number = text(InputColumn::FindNumber);
    let manufacturer_part_number = text(InputColumn::ManufacturerPartNumber);
    let quantity = quantity_value(raw.row_number, cell(InputColumn::Quantity), diagnostics);
    let description = text(InputColumn::Description);
    let drawing_ref = text(InputColumn::DrawingRef);

    match (
        find_number,
        manufacturer_part_number,
        quantity,
        description,
        drawing_ref,
    ) {
        (Some(find_number), Some(mpn), Some(quantity), Some(description), Some(drawing_ref)) => {
            Ok(RequiredInputs {
                source_row: raw.row_number,
                find_number,
                manufacturer_part_number: mpn,
                quantity,
                description,
                drawing_ref,
            })
        }
        (find_number, mpn, quantity, description, drawing_ref) => {
            let present = [
                find_number.is_some(),
                mpn.is_some(),
                quantity.is_some(),
                description.is_some(),
                drawing_ref.is_some(),
            ];
            Err(InputColumn::ALL
                .into_iter()
                .filter(|column| !present[column.index()])
                .collect())
        }
    }
}

/// Numeric quantity, or `None` when the cell is null or not a number.
fn quantity_value(
    row_number: usize,
    cell: &CellValue,
    diagnostics: &mut Diagnostics,
) -> Option<f64> {
    if cell.is_null() {
        return None;
    }
    let quantity = cell.to_number();
    if quantity.is_none() {
        diagnostics.record(Diagnostic::InvalidQuantity {
            row_number,
            value: cell.to_display().unwrap_or_default(),
        });
    }
    quantity
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_map::ColumnNormalizer;
    use bom_model::{DiagnosticLevel, PartType};

    fn table(rows: Vec<Vec<CellValue>>) -> RawTable {
        let headers = ["FN", "MPN", "Qty", "Description", "DrawingRef"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let mut table = RawTable::new(headers);
        for (idx, cells) in rows.into_iter().enumerate() {
            table.push_row(RawRow::new(idx + 3, cells));
        }
        table
    }

    fn build(table: &RawTable) -> (BomTable, Diagnostics) {
        let options = PipelineOptions::default();
        let mut diagnostics = Diagnostics::new();
        let mapping = ColumnNormalizer::from_options(&options)
            .unwrap()
            .normalize(&table.headers, &mut diagnostics)
            .unwrap();
        let bom = build_canonical_rows(table, &mapping, &options, &mut diagnostics);
        (bom, diagnostics)
    }

    #[test]
    fn test_numeric_find_number_and_quantity() {
        let table = table(vec![vec![
            CellValue::Number(1.0),
            CellValue::from("RC0603FR-0710KL"),
            CellValue::from("1,200"),
            CellValue::from("10k resistor ±1% 50V"),
            CellValue::from("R1"),
        ]]);
        let (bom, _) = build(&table);
        let row = &bom.rows[0];
        assert_eq!(row.find_number, "1");
        assert_eq!(row.quantity, 1200.0);
        assert_eq!(row.part_type, PartType::Resistor);
        assert_eq!(row.value, Some(10000.0));
        assert_eq!(row.source_row, 3);
        assert_eq!(row.additional_info, "");
    }

    #[test]
    fn test_null_inputs_drop_row() {
        let table = table(vec![
            vec![
                CellValue::from("1"),
                CellValue::Empty,
                CellValue::from("2"),
                CellValue::from("Connector"),
                CellValue::from("  "),
            ],
            vec![
                CellValue::from("2"),
                CellValue::from("X"),
                CellValue::from("2"),
                CellValue::from("Connector 9 pin"),
                CellValue::from("J1"),
            ],
        ]);
        let (bom, diagnostics) = build(&table);
        assert_eq!(bom.len(), 1);
        assert_eq!(bom.rows[0].find_number, "2");
        assert_eq!(
            bom.dropped,
            vec![DroppedRow {
                row_number: 3,
                missing: vec![InputColumn::ManufacturerPartNumber, InputColumn::DrawingRef],
            }]
        );
        assert_eq!(diagnostics.count_at(DiagnosticLevel::Warning), 1);
    }

    #[test]
    fn test_invalid_quantity_is_reported_and_dropped() {
        let table = table(vec![vec![
            CellValue::from("1"),
            CellValue::from("X"),
            CellValue::from("two"),
            CellValue::from("1k resistor"),
            CellValue::from("R1"),
        ]]);
        let (bom, diagnostics) = build(&table);
        assert!(bom.is_empty());
        assert_eq!(bom.dropped[0].missing, vec![InputColumn::Quantity]);
        assert!(diagnostics.events().iter().any(
            |d| matches!(d, Diagnostic::InvalidQuantity { value, .. } if value == "two")
        ));
    }

    #[test]
    fn test_blank_rows_are_skipped_silently() {
        let table = table(vec![
            vec![CellValue::Empty; 5],
            vec![CellValue::from(""), CellValue::Empty],
        ]);
        let (bom, diagnostics) = build(&table);
        assert!(bom.is_empty());
        assert!(bom.dropped.is_empty());
        assert_eq!(diagnostics.count_at(DiagnosticLevel::Warning), 0);
    }

    #[test]
    fn test_unrecognized_description_is_kept() {
        let table = table(vec![vec![
            CellValue::from("7"),
            CellValue::from("BRK-1"),
            CellValue::Number(1.0),
            CellValue::from("Mounting bracket"),
            CellValue::from("MP1"),
        ]]);
        let (bom, diagnostics) = build(&table);
        assert_eq!(bom.rows[0].part_type, PartType::Other);
        assert_eq!(diagnostics.count_at(DiagnosticLevel::Debug), 1);
    }

    #[test]
    fn test_numeric_description_parses_as_unknown() {
        let table = table(vec![vec![
            CellValue::from("8"),
            CellValue::from("P-8"),
            CellValue::Number(1.0),
            CellValue::Number(220.0),
            CellValue::from("X1"),
        ]]);
        let (bom, _) = build(&table);
        assert_eq!(bom.rows[0].description, "220");
        assert_eq!(bom.rows[0].part_type, PartType::Unknown);
        assert_eq!(bom.rows[0].value, None);
    }
}
