//! Per-record processing: runs every field validator and the device
//! classifier, assembles the output row, and applies the cross-field
//! consistency rules in fixed order.
//!
//! Each call yields the processed record plus the anomalies it raised, so
//! callers own concatenation and the later grouping pass. Records share no
//! state and may be processed in any order.

use netinv_model::{Anomaly, AnomalyIssue, PipelineConfig, ProcessedRecord, RawRecord};
use tracing::trace;

use crate::classifier::{
    ClassificationSource, UNKNOWN_DEVICE_TYPE, classify_device, infer_type_from_hostname,
};
use crate::validators::{
    HostnameReason, IpReason, MacReason, fqdn_consistent, normalize_site, parse_owner,
    validate_hostname, validate_ip, validate_mac,
};

/// Collects the anomalies and step labels raised while processing one
/// record, keeping the two in lockstep.
struct RecordTrail {
    source_row_id: String,
    anomalies: Vec<Anomaly>,
    steps: Vec<String>,
}

impl RecordTrail {
    fn new(source_row_id: &str) -> Self {
        Self {
            source_row_id: source_row_id.to_string(),
            anomalies: Vec::new(),
            steps: Vec::new(),
        }
    }

    fn step(&mut self, label: impl Into<String>) {
        self.steps.push(label.into());
    }

    fn raise(&mut self, issue: AnomalyIssue, action: &str, step: impl Into<String>) {
        self.anomalies
            .push(Anomaly::single(&self.source_row_id, issue, action));
        self.steps.push(step.into());
    }
}

/// Process one raw record into a cleaned output row plus its anomalies.
pub fn process_record(raw: &RawRecord, config: &PipelineConfig) -> (ProcessedRecord, Vec<Anomaly>) {
    let source_row_id = raw.source_row_id().to_string();
    let mut trail = RecordTrail::new(&source_row_id);
    let mut processed = ProcessedRecord {
        source_row_id: source_row_id.clone(),
        ..ProcessedRecord::default()
    };

    // IP
    let raw_ip = raw.ip();
    let ip_result = validate_ip(raw_ip);
    processed.ip = ip_result.normalized;
    processed.ip_valid = ip_result.valid;
    if ip_result.valid {
        processed.ip_version = ip_result.version;
        processed.subnet_cidr = ip_result.subnet_cidr;
        processed.reverse_ptr = ip_result.reverse_ptr;
        trail.step("ip_normalized");
    } else if ip_result.reason != IpReason::Missing {
        let reason = ip_result.reason.label().to_string();
        trail.raise(
            AnomalyIssue::new("ip", &reason, raw_ip),
            "Correct IP or mark record for review",
            format!("ip_invalid_{reason}"),
        );
    }

    // MAC
    let raw_mac = raw.mac();
    let mac_result = validate_mac(raw_mac);
    processed.mac = mac_result.normalized;
    processed.mac_valid = mac_result.valid;
    if mac_result.valid {
        trail.step("mac_normalized");
    } else if mac_result.reason == MacReason::InvalidFormat {
        trail.raise(
            AnomalyIssue::new("mac", "invalid_format", raw_mac),
            "Correct MAC address to a standard format.",
            "mac_invalid_format",
        );
    }

    // Hostname and FQDN
    let hostname = raw.hostname().trim().to_string();
    let fqdn = raw.fqdn().trim().to_string();
    let hostname_result = validate_hostname(&hostname);
    processed.hostname_valid = hostname_result.valid;
    if !hostname_result.valid && hostname_result.reason != HostnameReason::Missing {
        let reason = hostname_result.reason.label();
        trail.raise(
            AnomalyIssue::new("hostname", reason, &hostname),
            "Ensure hostname follows RFC1123 standards.",
            format!("hostname_invalid_{reason}"),
        );
    }

    processed.fqdn_consistent = fqdn_consistent(&hostname, &fqdn);
    if processed.fqdn_consistent == Some(false) {
        trail.raise(
            AnomalyIssue::new(
                "fqdn",
                "inconsistent_with_hostname",
                format!("hostname: {hostname}, fqdn: {fqdn}"),
            ),
            "Verify FQDN corresponds to hostname.",
            "fqdn_inconsistent",
        );
    }
    processed.hostname = hostname;
    processed.fqdn = fqdn;

    // Owner: an override table entry supersedes parsing entirely.
    let raw_owner = raw.owner().trim().to_string();
    if let Some(override_entry) = config.owner_overrides.get(&source_row_id) {
        processed.owner_email = override_entry.email.clone();
        processed.owner_team = override_entry.team.clone();
        trail.step("owner_override_applied");
    } else {
        let (email, team) = parse_owner(&raw_owner);
        if !raw_owner.is_empty() && (email.is_some() || team.is_some()) {
            trail.step("owner_parsed");
        }
        processed.owner_email = email;
        processed.owner_team = team;
    }
    processed.owner = raw_owner.clone();

    // Site
    let raw_site = raw.site().trim().to_string();
    processed.site_normalized = normalize_site(&raw_site);
    if let Some(normalized) = &processed.site_normalized {
        if *normalized != raw_site {
            trail.step("site_normalized");
        }
    }
    processed.site = raw_site;

    // Device type
    let classification = classify_device(&source_row_id, raw.device_type(), raw.notes(), config);
    match classification.source {
        ClassificationSource::Override => trail.step("device_type_override"),
        ClassificationSource::Keyword => trail.step("device_type_classified"),
        ClassificationSource::Passthrough | ClassificationSource::Unresolved => {
            trail.step("device_type_needs_review");
        }
    }
    processed.device_type = classification.device_type;
    processed.device_type_confidence = Some(classification.confidence);

    // Cross-field consistency rules, fixed order.
    raise_missing_value_anomalies(&processed, &mut trail);
    raise_subnet_anomaly(&processed, &mut trail);
    raise_owner_anomalies(&processed, &raw_owner, &mut trail);
    raise_device_type_anomalies(&processed, raw.device_type(), &mut trail);
    raise_hostname_device_mismatch(&processed, config, &mut trail);

    processed.normalization_steps = trail.steps.join("|");
    trace!(
        source_row_id = %source_row_id,
        anomaly_count = trail.anomalies.len(),
        steps = %processed.normalization_steps,
        "record processed"
    );
    (processed, trail.anomalies)
}

/// Rule 2: FQDN, MAC, and normalized site that end up empty each raise a
/// missing_value anomaly with a field-specific remediation message.
fn raise_missing_value_anomalies(processed: &ProcessedRecord, trail: &mut RecordTrail) {
    if processed.fqdn.is_empty() {
        trail.raise(
            AnomalyIssue::new("fqdn", "missing_value", ""),
            "Provide the fully qualified domain name.",
            "fqdn_missing",
        );
    }
    if processed.mac.as_deref().unwrap_or("").is_empty() {
        trail.raise(
            AnomalyIssue::new("mac", "missing_value", ""),
            "Record the MAC address from the device or switch port.",
            "mac_missing",
        );
    }
    if processed.site_normalized.as_deref().unwrap_or("").is_empty() {
        trail.raise(
            AnomalyIssue::new("site", "missing_value", ""),
            "Record the site where the asset is located.",
            "site_missing",
        );
    }
}

/// Rule 3: valid IP with no derived subnet. Informational, not necessarily
/// an error (public, loopback, and link-local addresses all land here).
fn raise_subnet_anomaly(processed: &ProcessedRecord, trail: &mut RecordTrail) {
    if processed.ip_valid && processed.subnet_cidr.as_deref().unwrap_or("").is_empty() {
        trail.raise(
            AnomalyIssue::new(
                "subnet_cidr",
                "not_derived",
                processed.ip.as_deref().unwrap_or(""),
            ),
            "No private /24 derived; informational only.",
            "subnet_not_derived",
        );
    }
}

/// Rule 4: missing owner, or an owner that resolved to neither email nor
/// team after parsing and overrides.
fn raise_owner_anomalies(processed: &ProcessedRecord, raw_owner: &str, trail: &mut RecordTrail) {
    if raw_owner.is_empty() {
        trail.raise(
            AnomalyIssue::new("owner", "missing_value", ""),
            "Assign an owner for the asset.",
            "owner_missing",
        );
    } else if processed.owner_email.is_none() && processed.owner_team.is_none() {
        trail.raise(
            AnomalyIssue::new("owner", "unresolved_field", raw_owner),
            "Clarify owner contact details (email or team).",
            "owner_unresolved",
        );
    }
}

/// Rule 5: unknown or empty final classification.
fn raise_device_type_anomalies(
    processed: &ProcessedRecord,
    raw_device_type: &str,
    trail: &mut RecordTrail,
) {
    if processed.device_type == UNKNOWN_DEVICE_TYPE {
        trail.raise(
            AnomalyIssue::new("device_type", "classified_as_unknown", raw_device_type),
            "Classify the device type manually.",
            "device_type_unknown",
        );
    } else if processed.device_type.is_empty() {
        trail.raise(
            AnomalyIssue::new("device_type", "unresolved_field", raw_device_type),
            "Provide a device type.",
            "device_type_unresolved",
        );
    }
}

/// Rule 6: hostname keyword inference disagreeing with the final
/// classification.
fn raise_hostname_device_mismatch(
    processed: &ProcessedRecord,
    config: &PipelineConfig,
    trail: &mut RecordTrail,
) {
    let Some(inferred) = infer_type_from_hostname(&processed.hostname, config) else {
        return;
    };
    if inferred != processed.device_type {
        trail.raise(
            AnomalyIssue::new(
                "device_type",
                "inconsistent_hostname_devicetype",
                format!(
                    "hostname suggests: {inferred}, classified: {}",
                    processed.device_type
                ),
            ),
            "Reconcile hostname naming with the classified device type.",
            "device_type_inconsistent",
        );
    }
}
