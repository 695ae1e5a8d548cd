use std::collections::BTreeMap;

/// Column order of the cleaned output table. Every `ProcessedRecord`
/// renders exactly these columns, in this order.
pub const OUTPUT_COLUMNS: [&str; 20] = [
    "ip",
    "ip_valid",
    "ip_version",
    "subnet_cidr",
    "reverse_ptr",
    "hostname",
    "hostname_valid",
    "fqdn",
    "fqdn_consistent",
    "mac",
    "mac_valid",
    "owner",
    "owner_email",
    "owner_team",
    "device_type",
    "device_type_confidence",
    "site",
    "site_normalized",
    "source_row_id",
    "normalization_steps",
];

/// A single input row as read from the source table.
///
/// Field access is by name; a column that was absent from the input reads as
/// the empty string, so downstream code never distinguishes "missing column"
/// from "empty cell".
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw value for a field, empty string when absent.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn source_row_id(&self) -> &str {
        self.get("source_row_id")
    }

    pub fn ip(&self) -> &str {
        self.get("ip")
    }

    pub fn mac(&self) -> &str {
        self.get("mac")
    }

    pub fn hostname(&self) -> &str {
        self.get("hostname")
    }

    pub fn fqdn(&self) -> &str {
        self.get("fqdn")
    }

    pub fn owner(&self) -> &str {
        self.get("owner")
    }

    pub fn site(&self) -> &str {
        self.get("site")
    }

    pub fn device_type(&self) -> &str {
        self.get("device_type")
    }

    pub fn notes(&self) -> &str {
        self.get("notes")
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// One cleaned output row. Built field-by-field by the record processor,
/// then immutable. Every output column is always present (possibly null).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedRecord {
    /// Normalized IP on success, the original raw value otherwise.
    pub ip: Option<String>,
    pub ip_valid: bool,
    pub ip_version: Option<u8>,
    /// Heuristic `/24` for private IPv4; empty string for other valid
    /// addresses; null when the IP is invalid.
    pub subnet_cidr: Option<String>,
    pub reverse_ptr: Option<String>,
    pub hostname: String,
    pub hostname_valid: bool,
    pub fqdn: String,
    /// Computed only when both hostname and FQDN are non-empty.
    pub fqdn_consistent: Option<bool>,
    pub mac: Option<String>,
    pub mac_valid: bool,
    pub owner: String,
    pub owner_email: Option<String>,
    pub owner_team: Option<String>,
    pub device_type: String,
    pub device_type_confidence: Option<f64>,
    pub site: String,
    pub site_normalized: Option<String>,
    pub source_row_id: String,
    /// Pipe-joined audit trail of the normalization steps applied.
    pub normalization_steps: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_field_reads_as_empty() {
        let mut record = RawRecord::new();
        record.insert("ip", "10.0.0.1");
        assert_eq!(record.ip(), "10.0.0.1");
        assert_eq!(record.mac(), "");
        assert_eq!(record.source_row_id(), "");
    }

    #[test]
    fn output_columns_end_with_audit_trail() {
        assert_eq!(OUTPUT_COLUMNS[0], "ip");
        assert_eq!(OUTPUT_COLUMNS[19], "normalization_steps");
    }
}
