//! Human-readable pass summary printed after a run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{FetchOutcome, PassResult};

pub fn print_summary(result: &PassResult) {
    println!("Pass date: {}", result.as_of);
    println!("Window: {}", result.window);
    match &result.fetch {
        FetchOutcome::Skipped => {}
        FetchOutcome::Fetched(path) => println!("Fetched: {}", path.display()),
        FetchOutcome::FailedUsingLocal => {
            println!("Fetch failed; processed the existing local export");
        }
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Count")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![Cell::new("New hires (A)"), Cell::new(result.counts.adds)]);
    table.add_row(vec![
        Cell::new("Terminations (T)"),
        Cell::new(result.counts.terminations),
    ]);
    table.add_row(vec![
        Cell::new("Updates (U)"),
        Cell::new(result.counts.updates),
    ]);
    table.add_row(vec![
        Cell::new("Unchanged"),
        Cell::new(result.counts.unchanged),
    ]);
    table.add_row(vec![
        Cell::new("Change-set rows").add_attribute(Attribute::Bold),
        Cell::new(result.change_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Field changes"),
        Cell::new(result.field_changes),
    ]);
    table.add_row(vec![
        Cell::new("Credential warnings"),
        warning_cell(result.anomalies.len()),
    ]);
    println!("{table}");

    if result.dry_run {
        println!("Dry run: no artifacts written");
        return;
    }
    if let Some(path) = &result.change_set_path {
        println!("Change-set: {}", path.display());
    }
    println!("Baseline: {}", result.baseline_path.display());
    if let Some(path) = &result.backup_path {
        println!("Backup: {}", path.display());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn warning_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}
