//! End-to-end tests over the in-memory pipeline.

use netinv_model::{PipelineConfig, RawRecord};
use netinv_validate::clean_inventory;

fn record(fields: &[(&str, &str)]) -> RawRecord {
    fields
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

#[test]
fn output_rows_follow_input_order() {
    let config = PipelineConfig::default();
    let raws = vec![
        record(&[("source_row_id", "r3"), ("ip", "10.0.0.3")]),
        record(&[("source_row_id", "r1"), ("ip", "10.0.0.1")]),
        record(&[("source_row_id", "r2"), ("ip", "10.0.0.2")]),
    ];
    let output = clean_inventory(&raws, &config);
    let ids: Vec<&str> = output
        .records
        .iter()
        .map(|row| row.source_row_id.as_str())
        .collect();
    assert_eq!(ids, vec!["r3", "r1", "r2"]);
}

#[test]
fn duplicate_ips_flag_both_records_but_loopback_does_not() {
    let config = PipelineConfig::default();
    let raws = vec![
        record(&[("source_row_id", "a"), ("ip", "10.0.0.5")]),
        record(&[("source_row_id", "b"), ("ip", "10.0.0.5")]),
        record(&[("source_row_id", "c"), ("ip", "127.0.0.1")]),
        record(&[("source_row_id", "d"), ("ip", "127.0.0.1")]),
    ];
    let output = clean_inventory(&raws, &config);

    for id in ["a", "b"] {
        let anomaly = output
            .anomalies
            .iter()
            .find(|anomaly| anomaly.source_row_id == id)
            .expect("anomaly for duplicate record");
        let duplicate = anomaly
            .issues
            .iter()
            .find(|issue| issue.issue_type == "duplicate_value")
            .expect("duplicate issue");
        assert_eq!(duplicate.field, "ip");
        assert_eq!(
            duplicate.duplicated_in_rows,
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    for id in ["c", "d"] {
        let loopback_duplicates = output
            .anomalies
            .iter()
            .filter(|anomaly| anomaly.source_row_id == id)
            .flat_map(|anomaly| &anomaly.issues)
            .filter(|issue| issue.issue_type == "duplicate_value")
            .count();
        assert_eq!(loopback_duplicates, 0, "loopback must not count as duplicate");
    }
}

#[test]
fn report_has_at_most_one_anomaly_per_record() {
    let config = PipelineConfig::default();
    // Each raw record raises several issues (bad mac, missing fqdn/site/owner,
    // unknown device) plus a shared duplicate hostname.
    let raws = vec![
        record(&[
            ("source_row_id", "r1"),
            ("hostname", "db01"),
            ("mac", "nope"),
        ]),
        record(&[("source_row_id", "r2"), ("hostname", "db01")]),
    ];
    let output = clean_inventory(&raws, &config);

    let mut seen = std::collections::BTreeSet::new();
    for anomaly in &output.anomalies {
        assert!(
            seen.insert(anomaly.source_row_id.clone()),
            "record {} appears twice in the report",
            anomaly.source_row_id
        );
        assert!(!anomaly.issues.is_empty());
        assert_eq!(anomaly.issues.len(), anomaly.recommended_actions.len());
    }
    // Duplicate hostname issue is appended after the per-record issues.
    let r1 = &output.anomalies[0];
    assert_eq!(r1.source_row_id, "r1");
    let last = r1.issues.last().expect("issues");
    assert_eq!(last.issue_type, "duplicate_value");
    assert_eq!(last.field, "hostname");
}

#[test]
fn pipeline_is_idempotent() {
    let config = PipelineConfig::default();
    let raws = vec![
        record(&[
            ("source_row_id", "r1"),
            ("ip", "010.000.000.001"),
            ("mac", "aa-bb-cc-00-11-22"),
            ("hostname", "web01"),
            ("fqdn", "web01.example.com"),
            ("owner", "Ops (Infra)"),
            ("site", "Berlin DC"),
            ("device_type", ""),
            ("notes", "edge router"),
        ]),
        record(&[("source_row_id", "r2"), ("ip", "10.0.0.1")]),
        record(&[("source_row_id", "r3"), ("ip", "10.0.0.1")]),
    ];
    let first = clean_inventory(&raws, &config);
    let second = clean_inventory(&raws, &config);
    assert_eq!(first.records, second.records);
    assert_eq!(first.anomalies, second.anomalies);
}

#[test]
fn ipv4_decimal_variants_normalize_to_canonical_form() {
    let config = PipelineConfig::default();
    let raws = vec![record(&[("source_row_id", "r1"), ("ip", "010.000.000.001")])];
    let output = clean_inventory(&raws, &config);
    assert_eq!(output.records[0].ip.as_deref(), Some("10.0.0.1"));
    assert_eq!(output.records[0].ip_version, Some(4));
}
