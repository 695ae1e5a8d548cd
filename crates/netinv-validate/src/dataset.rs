//! Dataset-level post-pass: duplicate detection across the whole output
//! set, then grouping of every anomaly by source record.
//!
//! Runs strictly after all per-record processing; it reads each record's
//! final ip/mac/hostname fields and validity flags. Pure reductions over
//! the in-memory record list, deterministic across runs.

use std::collections::BTreeMap;
use std::net::IpAddr;

use netinv_model::{Anomaly, AnomalyIssue, PipelineConfig, ProcessedRecord, RawRecord};
use tracing::debug;

use crate::processor::process_record;

/// Scan processed records for duplicate IPs, MACs, and hostnames.
///
/// Only validated values participate; IPs additionally skip
/// loopback/link-local/multicast/unspecified addresses, which legitimately
/// repeat across records. Every contributing record receives its own
/// `duplicate_value` anomaly carrying the complete conflicting id set.
pub fn detect_duplicates(records: &[ProcessedRecord]) -> Vec<Anomaly> {
    let mut ip_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut mac_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut hostname_map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for record in records {
        if record.ip_valid {
            if let Some(ip) = record.ip.as_deref() {
                if !is_special_address(ip) {
                    ip_map
                        .entry(ip.to_string())
                        .or_default()
                        .push(record.source_row_id.clone());
                }
            }
        }
        if record.mac_valid {
            if let Some(mac) = record.mac.as_deref() {
                mac_map
                    .entry(mac.to_string())
                    .or_default()
                    .push(record.source_row_id.clone());
            }
        }
        if record.hostname_valid {
            hostname_map
                .entry(record.hostname.to_lowercase())
                .or_default()
                .push(record.source_row_id.clone());
        }
    }

    let mut anomalies = Vec::new();
    for (field, map) in [
        ("ip", &ip_map),
        ("mac", &mac_map),
        ("hostname", &hostname_map),
    ] {
        for (value, row_ids) in map {
            if row_ids.len() < 2 {
                continue;
            }
            debug!(field, value = %value, count = row_ids.len(), "duplicate value");
            for row_id in row_ids {
                anomalies.push(Anomaly::single(
                    row_id,
                    AnomalyIssue::new(field, "duplicate_value", value)
                        .with_duplicates(row_ids.clone()),
                    "Investigate records sharing this value and retire stale entries.",
                ));
            }
        }
    }
    anomalies
}

/// Addresses excluded from duplicate detection: loopback, link-local,
/// multicast, and unspecified.
fn is_special_address(value: &str) -> bool {
    match value.parse::<IpAddr>() {
        Ok(IpAddr::V4(address)) => {
            address.is_loopback()
                || address.is_link_local()
                || address.is_multicast()
                || address.is_unspecified()
        }
        Ok(IpAddr::V6(address)) => {
            // fe80::/10
            let link_local = (address.segments()[0] & 0xffc0) == 0xfe80;
            address.is_loopback() || link_local || address.is_multicast() || address.is_unspecified()
        }
        Err(_) => false,
    }
}

/// Merge all anomalies by record id: one `Anomaly` per id, issues
/// concatenated in original raise order, actions concatenated without
/// deduplication. Report order follows each id's first raise.
pub fn group_anomalies(anomalies: Vec<Anomaly>) -> Vec<Anomaly> {
    let mut grouped: Vec<Anomaly> = Vec::new();
    let mut index_by_id: BTreeMap<String, usize> = BTreeMap::new();
    for anomaly in anomalies {
        match index_by_id.get(&anomaly.source_row_id) {
            Some(&index) => grouped[index].merge(anomaly),
            None => {
                index_by_id.insert(anomaly.source_row_id.clone(), grouped.len());
                grouped.push(anomaly);
            }
        }
    }
    grouped
}

/// Full pipeline output: cleaned rows in input order plus the grouped
/// anomaly report.
#[derive(Debug, Clone, Default)]
pub struct CleanOutput {
    pub records: Vec<ProcessedRecord>,
    pub anomalies: Vec<Anomaly>,
}

/// Run the whole pipeline over an in-memory dataset: per-record processing
/// in input order, duplicate scan, anomaly grouping.
pub fn clean_inventory(raw_records: &[RawRecord], config: &PipelineConfig) -> CleanOutput {
    let mut records = Vec::with_capacity(raw_records.len());
    let mut anomalies = Vec::new();
    for raw in raw_records {
        let (processed, record_anomalies) = process_record(raw, config);
        records.push(processed);
        anomalies.extend(record_anomalies);
    }
    anomalies.extend(detect_duplicates(&records));
    let anomalies = group_anomalies(anomalies);
    debug!(
        record_count = records.len(),
        anomaly_count = anomalies.len(),
        "inventory cleaned"
    );
    CleanOutput { records, anomalies }
}
