use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bom_model::{DiagnosticLevel, PartType};

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    println!("Source: {}", result.source.display());
    print_part_type_table(result);
    print_missing_table(result);
    print_dropped_table(result);

    println!(
        "Rows: {} kept, {} dropped, {} incomplete",
        result.rows.len(),
        result.dropped.len(),
        result.completeness.incomplete_rows()
    );
    if result.enriched {
        println!("Total base failure rate: {}", result.total_base_failure_rate);
    } else {
        println!("Total base failure rate: 0 (reliability lookup skipped)");
    }
    let warnings = result
        .diagnostics
        .iter()
        .filter(|d| d.level() == DiagnosticLevel::Warning)
        .count();
    if warnings > 0 {
        eprintln!("{warnings} warning(s) recorded; rerun with -v for details");
    }
    match &result.report {
        Some(paths) => {
            for path in paths.written() {
                println!("Wrote: {}", path.display());
            }
        }
        None => println!("Dry run: no files written"),
    }
}

fn print_part_type_table(result: &ProcessResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Part Type"),
        header_cell("Rows"),
        header_cell("Section"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (part_type, count) in &result.completeness.part_types {
        let section = result
            .rows
            .iter()
            .find(|row| row.row.part_type == *part_type)
            .and_then(|row| row.section.as_deref());
        table.add_row(vec![
            part_type_cell(*part_type),
            Cell::new(count),
            section.map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table.add_row(vec![
        title_cell("TOTAL"),
        Cell::new(result.completeness.total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn print_missing_table(result: &ProcessResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Rows Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, count) in &result.completeness.missing_counts {
        table.add_row(vec![Cell::new(field), count_cell(*count, Color::Yellow)]);
    }
    table.add_row(vec![
        title_cell("Incomplete rows"),
        count_cell(result.completeness.incomplete_rows(), Color::Yellow)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_dropped_table(result: &ProcessResult) {
    if result.dropped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dropped Row"), header_cell("Null Inputs")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for dropped in &result.dropped {
        table.add_row(vec![
            Cell::new(dropped.row_number).fg(Color::Red),
            Cell::new(dropped.missing_keys()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn part_type_cell(part_type: PartType) -> Cell {
    if part_type.is_known() {
        Cell::new(part_type)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(part_type).fg(Color::DarkGrey)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn title_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
