use std::collections::BTreeMap;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_clean::Schema;
use roster_model::{Employee, RecordStatus, Severity};

/// Prints record counts and a per-field problem table.
pub fn print_summary(employees: &[Employee]) {
    let ok = count_status(employees, RecordStatus::Ok);
    let warn = count_status(employees, RecordStatus::Warn);
    let error = count_status(employees, RecordStatus::Error);
    println!(
        "Records: {} ({ok} ok, {warn} warn, {error} error)",
        employees.len()
    );

    let counts = field_counts(employees);
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Warnings"),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (field, count) in counts {
        table.add_row(vec![
            Cell::new(field),
            count_cell(count.warnings, Color::Yellow),
            count_cell(count.errors, Color::Red),
        ]);
    }
    println!("{table}");
}

/// Prints the schema's field layout.
pub fn print_fields(schema: &Schema) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Source"),
        header_cell("Coercion"),
    ]);
    apply_table_style(&mut table);
    for rule in schema.rules() {
        table.add_row(vec![
            rule.target.clone(),
            rule.source.clone(),
            rule.coercion.display_name().to_string(),
        ]);
    }
    println!("{table}");
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldCounts {
    warnings: usize,
    errors: usize,
}

fn field_counts(employees: &[Employee]) -> BTreeMap<String, FieldCounts> {
    let mut counts: BTreeMap<String, FieldCounts> = BTreeMap::new();
    for employee in employees {
        for (field, diagnostics) in &employee.problems {
            let entry = counts.entry(field.clone()).or_default();
            for diagnostic in diagnostics {
                match diagnostic.severity {
                    Severity::Warn => entry.warnings += 1,
                    Severity::Error => entry.errors += 1,
                }
            }
        }
    }
    counts
}

fn count_status(employees: &[Employee], status: RecordStatus) -> usize {
    employees.iter().filter(|e| e.status == status).count()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}
