//! Terminal rendering of the selectors.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use cl_model::{Level, LocationSelection, OptionRecord};
use cl_widget::CascadingFilter;

use crate::commands::LevelSummary;

/// JSON shape of the `--json` output.
#[derive(Debug, Serialize)]
pub struct SelectorsReport {
    pub selection: LocationSelection,
    pub value: Option<String>,
    pub regions: Vec<OptionRecord>,
    pub provinces: Vec<OptionRecord>,
    pub communes: Vec<OptionRecord>,
}

impl SelectorsReport {
    pub fn from_filter(filter: &CascadingFilter) -> Self {
        let selection = filter.selection();
        Self {
            value: selection.compress().map(str::to_string),
            selection,
            regions: filter.regions().visible().to_vec(),
            provinces: filter.provinces().visible().to_vec(),
            communes: filter.communes().visible().to_vec(),
        }
    }
}

/// Plain one-line-per-level summary of the current selection.
pub fn selection_summary(filter: &CascadingFilter) -> String {
    let mut lines = Vec::with_capacity(Level::ALL.len() + 1);
    for level in Level::ALL {
        let shown = match filter.selector(level).selected_record() {
            Some(record) => format!("{} {}", record.value, record.label),
            None => filter
                .selector(level)
                .selected()
                .map_or_else(|| "-".to_string(), str::to_string),
        };
        lines.push(format!("{:<10}{shown}", format!("{level}:")));
    }
    let value = filter.selection().compress().unwrap_or("-").to_string();
    lines.push(format!("{:<10}{value}", "value:"));
    lines.join("\n")
}

pub fn selectors_table(filter: &CascadingFilter) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Level"),
        header_cell("Value"),
        header_cell("Label"),
        header_cell("Selected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for level in Level::ALL {
        let state = filter.selector(level);
        if state.visible().is_empty() {
            table.add_row(vec![
                level_cell(level),
                dim_cell("-"),
                dim_cell("(no options)"),
                dim_cell("-"),
            ]);
            continue;
        }
        for (idx, record) in state.visible().iter().enumerate() {
            let selected = state.selected() == Some(record.value.as_str());
            table.add_row(vec![
                if idx == 0 { level_cell(level) } else { Cell::new("") },
                Cell::new(&record.value),
                label_cell(&record.label, selected),
                selected_cell(selected),
            ]);
        }
    }
    table
}

pub fn print_selectors(filter: &CascadingFilter, json: bool) -> anyhow::Result<()> {
    if json {
        let report = SelectorsReport::from_filter(filter);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("{}", selectors_table(filter));
    println!("{}", selection_summary(filter));
    Ok(())
}

pub fn print_levels(levels: &[LevelSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Level"),
        header_cell("Control"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for summary in levels {
        table.add_row(vec![
            level_cell(summary.level),
            Cell::new(&summary.control_id),
            Cell::new(summary.options),
        ]);
    }
    println!("{table}");
}

pub fn print_options(level: Level, options: &[OptionRecord]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Value"), header_cell("Label")]);
    apply_table_style(&mut table);
    for record in options {
        table.add_row(vec![Cell::new(&record.value), Cell::new(&record.label)]);
    }
    println!("{table}");
    println!("{} {level} option(s)", options.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn level_cell(level: Level) -> Cell {
    Cell::new(level).add_attribute(Attribute::Bold)
}

fn label_cell(label: &str, selected: bool) -> Cell {
    if selected {
        Cell::new(label).add_attribute(Attribute::Bold)
    } else {
        Cell::new(label)
    }
}

fn selected_cell(selected: bool) -> Cell {
    if selected {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
