use std::path::Path;

use comfy_table::{presets::ASCII_FULL, ContentArrangement, Table as TextTable};
use csv::{QuoteStyle, WriterBuilder};

use crate::{error::RuntimeError, report::Table};

/// Render the table with ASCII borders.
pub fn render_table(table: &Table) -> String {
    let mut text = TextTable::new();
    text.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(table.headers.clone());
    for row in &table.rows {
        text.add_row(row.clone());
    }
    text.to_string()
}

/// Print the table to standard output.
pub fn print_table(table: &Table) {
    println!("{}", render_table(table));
}

/// Write the table to `path` as comma joined rows, header first,
/// replacing any existing file. Fields are written verbatim.
#[tracing::instrument(skip(table))]
pub fn write_csv(path: &Path, table: &Table) -> Result<(), RuntimeError> {
    tracing::info!(rows = table.rows.len(), "writing csv report");

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}
