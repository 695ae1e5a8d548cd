use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use netinv_cli::pipeline::{ingest, output, post_pass, process};
use netinv_model::PipelineConfig;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;
use crate::types::CleanResult;

pub fn run_categories() -> Result<()> {
    let config = PipelineConfig::default();
    let mut table = Table::new();
    table.set_header(vec!["Category", "Keywords"]);
    apply_table_style(&mut table);
    for category in &config.device_keywords {
        table.add_row(vec![
            category.category.clone(),
            category.keywords.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let input = &args.input;
    let run_span = info_span!("clean", input = %input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("output")
    });
    let config = load_pipeline_config(args.config.as_deref())?;

    let raw_records = ingest(input)?;
    let processed = process(&raw_records, &config);
    let anomalies = post_pass(&processed.records, processed.anomalies);
    let paths = output(&output_dir, &processed.records, &anomalies, args.dry_run)?;

    let valid_ip = processed.records.iter().filter(|r| r.ip_valid).count();
    let valid_mac = processed.records.iter().filter(|r| r.mac_valid).count();
    let valid_hostname = processed
        .records
        .iter()
        .filter(|r| r.hostname_valid)
        .count();

    info!(
        record_count = processed.records.len(),
        affected_records = anomalies.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "clean complete"
    );

    Ok(CleanResult {
        input: input.clone(),
        output_dir,
        records: processed.records.len(),
        valid_ip,
        valid_mac,
        valid_hostname,
        anomalies,
        paths,
    })
}

/// Load the pipeline configuration from a JSON file, or fall back to the
/// built-in tables.
fn load_pipeline_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("load config: {}", path.display())),
        None => Ok(PipelineConfig::default()),
    }
}
