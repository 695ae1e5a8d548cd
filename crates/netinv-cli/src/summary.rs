use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    if let Some(paths) = &result.paths {
        println!("Cleaned table: {}", paths.table.display());
        println!("Anomaly report: {}", paths.report.display());
    } else {
        println!("Output: skipped (dry run)");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Valid"),
        header_cell("Invalid"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (field, valid) in [
        ("ip", result.valid_ip),
        ("mac", result.valid_mac),
        ("hostname", result.valid_hostname),
    ] {
        let invalid = result.records - valid;
        table.add_row(vec![
            Cell::new(field).fg(Color::Blue),
            Cell::new(valid),
            count_cell(invalid, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("records").add_attribute(Attribute::Bold),
        Cell::new(result.records).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    print_issue_table(result);
}

fn print_issue_table(result: &CleanResult) {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for anomaly in &result.anomalies {
        for issue in &anomaly.issues {
            *counts
                .entry((issue.issue_type.clone(), issue.field.clone()))
                .or_insert(0) += 1;
        }
    }
    if counts.is_empty() {
        println!("No anomalies found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Issue"),
        header_cell("Field"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut ordered: Vec<((String, String), usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for ((issue_type, field), count) in ordered {
        table.add_row(vec![
            Cell::new(issue_type),
            Cell::new(field),
            count_cell(count, Color::Yellow),
        ]);
    }
    println!();
    println!(
        "Anomalies ({} affected record{}):",
        result.anomalies.len(),
        if result.anomalies.len() == 1 { "" } else { "s" }
    );
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
