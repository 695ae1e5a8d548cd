//! Cleaned-table rendering: one CSV row per processed record, columns in
//! the fixed output order, nulls as empty cells.

use anyhow::{Context, Result};
use csv::WriterBuilder;

use netinv_model::{OUTPUT_COLUMNS, ProcessedRecord};

fn bool_cell(value: bool) -> String {
    value.to_string()
}

fn opt_bool_cell(value: Option<bool>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn opt_cell(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

/// Cells for one output row, aligned with [`OUTPUT_COLUMNS`].
pub fn row_cells(record: &ProcessedRecord) -> Vec<String> {
    vec![
        opt_cell(record.ip.as_deref()),
        bool_cell(record.ip_valid),
        record
            .ip_version
            .map(|version| version.to_string())
            .unwrap_or_default(),
        opt_cell(record.subnet_cidr.as_deref()),
        opt_cell(record.reverse_ptr.as_deref()),
        record.hostname.clone(),
        bool_cell(record.hostname_valid),
        record.fqdn.clone(),
        opt_bool_cell(record.fqdn_consistent),
        opt_cell(record.mac.as_deref()),
        bool_cell(record.mac_valid),
        record.owner.clone(),
        opt_cell(record.owner_email.as_deref()),
        opt_cell(record.owner_team.as_deref()),
        record.device_type.clone(),
        record
            .device_type_confidence
            .map(|confidence| confidence.to_string())
            .unwrap_or_default(),
        record.site.clone(),
        opt_cell(record.site_normalized.as_deref()),
        record.source_row_id.clone(),
        record.normalization_steps.clone(),
    ]
}

/// Render the full cleaned table, header included, into a byte buffer.
pub fn render_clean_table(records: &[ProcessedRecord]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(OUTPUT_COLUMNS)
        .context("write table header")?;
    for record in records {
        writer
            .write_record(row_cells(record))
            .with_context(|| format!("write row for {}", record.source_row_id))?;
    }
    writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("flush cleaned table: {error}"))
}
