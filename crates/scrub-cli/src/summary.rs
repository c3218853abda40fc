use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Base: {}", result.base_path.display());
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None if result.dry_run => println!("Output: (dry run, nothing written)"),
        None => {}
    }
    println!("Key column: {}", result.key_column);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(result.summary.input_rows),
    ]);
    table.add_row(vec![
        Cell::new("Removed"),
        count_cell(result.summary.removed_rows, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Kept"),
        count_cell(result.summary.output_rows, Color::Green),
    ]);
    println!("{table}");
}

/// Machine-readable variant for `--json`.
pub fn print_summary_json(result: &CleanResult) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(&result.summary)?;
    println!("{json}");
    Ok(())
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(40);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
