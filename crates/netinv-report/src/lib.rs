//! Output generation for the inventory cleaner.
//!
//! Two artifacts per run: the cleaned CSV table (fixed column order) and
//! the anomaly report JSON. A completed run produces both together or
//! neither; both are rendered in memory before anything touches disk.

mod table;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use netinv_model::{Anomaly, ProcessedRecord};

pub use table::{render_clean_table, row_cells};

/// Final artifact locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub table: PathBuf,
    pub report: PathBuf,
}

/// Render the anomaly report as pretty-printed JSON.
pub fn render_anomaly_report(anomalies: &[Anomaly]) -> Result<Vec<u8>> {
    let mut payload = serde_json::to_vec_pretty(anomalies).context("serialize anomaly report")?;
    payload.push(b'\n');
    Ok(payload)
}

/// Write the cleaned table and anomaly report under `output_dir`.
///
/// Both artifacts are rendered before either file is written; if the second
/// write fails the first artifact is removed so a failed run leaves no
/// partial output pair behind.
pub fn write_outputs(
    output_dir: &Path,
    records: &[ProcessedRecord],
    anomalies: &[Anomaly],
) -> Result<ReportPaths> {
    let table_bytes = render_clean_table(records)?;
    let report_bytes = render_anomaly_report(anomalies)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let paths = ReportPaths {
        table: output_dir.join("inventory_clean.csv"),
        report: output_dir.join("anomalies.json"),
    };

    std::fs::write(&paths.table, table_bytes)
        .with_context(|| format!("write cleaned table: {}", paths.table.display()))?;
    if let Err(error) = std::fs::write(&paths.report, report_bytes) {
        let _ = std::fs::remove_file(&paths.table);
        return Err(error)
            .with_context(|| format!("write anomaly report: {}", paths.report.display()));
    }

    info!(
        table = %paths.table.display(),
        report = %paths.report.display(),
        record_count = records.len(),
        anomaly_count = anomalies.len(),
        "outputs written"
    );
    Ok(paths)
}
