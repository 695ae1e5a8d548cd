use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use netinv_model::RawRecord;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read an inventory CSV into raw records.
///
/// Headers are trimmed and BOM-stripped; cells are trimmed. Columns the
/// pipeline does not know are carried along and ignored downstream; columns
/// the pipeline expects but the file lacks simply read as empty. Rows whose
/// cells are all empty are skipped. The only failure here is the single
/// fatal case of the whole run: an unreadable source.
pub fn read_inventory(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read inventory csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header row: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for entry in reader.records() {
        let entry = entry.with_context(|| format!("read record: {}", path.display()))?;
        let mut record = RawRecord::new();
        let mut any_value = false;
        for (index, header) in headers.iter().enumerate() {
            let value = normalize_cell(entry.get(index).unwrap_or(""));
            if !value.is_empty() {
                any_value = true;
            }
            record.insert(header.clone(), value);
        }
        if any_value {
            records.push(record);
        }
    }
    debug!(path = %path.display(), record_count = records.len(), "inventory read");
    Ok(records)
}
