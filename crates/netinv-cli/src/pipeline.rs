//! Inventory cleaning pipeline with explicit stages.
//!
//! 1. **Ingest**: read the raw CSV into records
//! 2. **Process**: run validators, classifier, and consistency rules per record
//! 3. **Post-pass**: scan all records for duplicates, group anomalies by record
//! 4. **Output**: write the cleaned table and the anomaly report together
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Per-record processing has no cross-record dependency; the
//! post-pass reads every record's final fields and must run after all of
//! them.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use netinv_ingest::read_inventory;
use netinv_model::{Anomaly, PipelineConfig, ProcessedRecord, RawRecord};
use netinv_report::{ReportPaths, write_outputs};
use netinv_validate::{detect_duplicates, group_anomalies, process_record};

/// Read and materialize the raw inventory. The one fatal failure path of
/// the run: nothing has been written yet when this errors.
pub fn ingest(input: &Path) -> Result<Vec<RawRecord>> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records = read_inventory(input).context("read inventory")?;
    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(records)
}

/// Result of the per-record processing stage.
#[derive(Debug)]
pub struct ProcessResult {
    /// Cleaned rows, in input order.
    pub records: Vec<ProcessedRecord>,
    /// Per-record anomalies in raise order, not yet grouped.
    pub anomalies: Vec<Anomaly>,
}

/// Run the per-record pipeline over every raw record, in input order.
pub fn process(raw_records: &[RawRecord], config: &PipelineConfig) -> ProcessResult {
    let span = info_span!("process");
    let _guard = span.enter();
    let start = Instant::now();

    let mut records = Vec::with_capacity(raw_records.len());
    let mut anomalies = Vec::new();
    for raw in raw_records {
        let (processed, record_anomalies) = process_record(raw, config);
        records.push(processed);
        anomalies.extend(record_anomalies);
    }

    info!(
        record_count = records.len(),
        anomaly_count = anomalies.len(),
        duration_ms = start.elapsed().as_millis(),
        "processing complete"
    );
    ProcessResult { records, anomalies }
}

/// Dataset-level post-pass: duplicate scan, then merge of all anomalies by
/// record id. Consumes the per-record anomaly list and returns the final
/// grouped report.
pub fn post_pass(records: &[ProcessedRecord], per_record: Vec<Anomaly>) -> Vec<Anomaly> {
    let span = info_span!("postpass");
    let _guard = span.enter();
    let start = Instant::now();

    let mut anomalies = per_record;
    let duplicates = detect_duplicates(records);
    let duplicate_count = duplicates.len();
    anomalies.extend(duplicates);
    let grouped = group_anomalies(anomalies);

    info!(
        duplicate_count,
        affected_records = grouped.len(),
        duration_ms = start.elapsed().as_millis(),
        "post-pass complete"
    );
    grouped
}

/// Write both output artifacts, or skip entirely on a dry run.
pub fn output(
    output_dir: &Path,
    records: &[ProcessedRecord],
    anomalies: &[Anomaly],
    dry_run: bool,
) -> Result<Option<ReportPaths>> {
    let span = info_span!("output", output_dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    if dry_run {
        info!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(None);
    }

    let paths = write_outputs(output_dir, records, anomalies)?;
    info!(
        record_count = records.len(),
        anomaly_count = anomalies.len(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(Some(paths))
}
