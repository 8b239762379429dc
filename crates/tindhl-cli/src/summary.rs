use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tindhl_cli::pipeline::ConvertResult;
use tindhl_model::SenderProfile;

pub fn print_summary(result: &ConvertResult) {
    println!("---");
    match &result.output_file {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Read"), count_cell(result.input_count, None)]);
    table.add_row(vec![
        Cell::new("Labels written"),
        count_cell(result.written, None).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Skipped (no first name)"),
        count_cell(result.skipped, None),
    ]);
    table.add_row(vec![
        Cell::new("Countries without code"),
        count_cell(result.unmapped_countries.len(), Some(Color::Yellow)),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    println!("{table}");
    if !result.unmapped_countries.is_empty() {
        eprintln!("Warnings:");
        for country in &result.unmapped_countries {
            eprintln!("- no carrier code for '{country}', RECV_COUNTRY left blank");
        }
    }
    println!("Conversion done");
}

pub fn print_sender(path: &Path, sender: &SenderProfile) {
    println!("Config: {}", path.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (key, value) in [
        ("name", &sender.name),
        ("name2", &sender.name2),
        ("street", &sender.street),
        ("house number", &sender.house_number),
        ("zipcode", &sender.postal_code),
        ("city", &sender.city),
        ("country", &sender.country),
        ("email", &sender.email),
    ] {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    println!("{table}");
}

pub fn print_config_created(path: &Path) {
    println!("Default config file did not exist.");
    println!("Please manually enter your default values in the following file:");
    println!("{}", path.display());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .add_attribute(Attribute::Bold)
        .fg(Color::Cyan)
}

fn count_cell(count: usize, highlight: Option<Color>) -> Cell {
    match highlight {
        Some(color) if count > 0 => Cell::new(count).fg(color),
        _ => Cell::new(count),
    }
}
