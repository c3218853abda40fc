use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use scrub_model::Table;

/// Delimiter the operator spreadsheets use.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Read options for [`read_table`] / [`write_table`].
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// Single-byte field delimiter.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

fn strip_bom(raw: &str) -> &str {
    raw.strip_prefix('\u{feff}').unwrap_or(raw)
}

/// Read a delimited UTF-8 file into a [`Table`].
///
/// The first record is the header. Every cell is kept as text exactly
/// as written: no trimming, no type inference, and an empty cell stays
/// the empty string. Records shorter than the header are padded with
/// empty cells and longer ones are cut at the header width, so every
/// row has one cell per column.
///
/// # Errors
///
/// Fails when the file cannot be opened or a record cannot be parsed;
/// the path is attached as context.
pub fn read_table(path: &Path, options: CsvOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut records = reader.records();
    let Some(header_record) = records.next() else {
        return Ok(Table::new(Vec::new()));
    };
    let header_record =
        header_record.with_context(|| format!("read header: {}", path.display()))?;
    let mut headers: Vec<String> = header_record.iter().map(str::to_string).collect();
    if let Some(first) = headers.first_mut() {
        *first = strip_bom(first).to_string();
    }

    let mut table = Table::new(headers);
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut row = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            row.push(record.get(idx).unwrap_or("").to_string());
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded table"
    );
    Ok(table)
}

/// Write a [`Table`] as a delimited UTF-8 file, header row first.
///
/// # Errors
///
/// Fails when the file cannot be created or written; the path is
/// attached as context.
pub fn write_table(table: &Table, path: &Path, options: CsvOptions) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(path = %path.display(), rows = table.row_count(), "wrote table");
    Ok(())
}

/// Values of the table's first column, in row order.
///
/// The exclusion table's relevant column is positional: whatever comes
/// first, regardless of its name. An empty table yields no values.
#[must_use]
pub fn first_column_values(table: &Table) -> Vec<String> {
    if table.headers.is_empty() {
        return Vec::new();
    }
    table
        .rows
        .iter()
        .map(|row| row.first().cloned().unwrap_or_default())
        .collect()
}
