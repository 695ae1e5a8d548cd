use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One device category with its keyword substrings. Tables are ordered:
/// the first category with any matching keyword wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub category: String,
    pub keywords: Vec<String>,
}

impl KeywordCategory {
    pub fn new(category: &str, keywords: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// True when any keyword occurs as a substring of `context`.
    /// Both sides are expected to be case-folded already.
    pub fn matches(&self, context: &str) -> bool {
        self.keywords.iter().any(|keyword| context.contains(keyword))
    }
}

/// Authoritative device classification for one record, superseding keyword
/// matching entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceOverride {
    pub device_type: String,
    #[serde(default = "default_override_confidence")]
    pub confidence: f64,
}

fn default_override_confidence() -> f64 {
    1.0
}

/// Authoritative owner resolution for one record, superseding the automatic
/// email/team parser. Covers the cases the parser cannot resolve
/// (team-only owners, owners without an email).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerOverride {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// Lookup data consumed by the pipeline: keyword-to-category tables plus
/// per-record override tables keyed by `source_row_id`. All of it is data,
/// not logic; tests substitute their own tables and override tables may be
/// empty. Deserializes from JSON, with the built-in tables as defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Ordered categories matched against device-type text plus notes.
    pub device_keywords: Vec<KeywordCategory>,
    /// Ordered categories matched against the lowercased hostname. Kept
    /// separate from `device_keywords`: hostnames use abbreviations
    /// ("srv", "rtr", "fw") that would be far too loose in free text.
    pub hostname_keywords: Vec<KeywordCategory>,
    pub device_overrides: BTreeMap<String, DeviceOverride>,
    pub owner_overrides: BTreeMap<String, OwnerOverride>,
}

impl PipelineConfig {
    /// Load a configuration from a JSON file. Fields absent from the file
    /// fall back to the built-in tables.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            device_keywords: default_device_keywords(),
            hostname_keywords: default_hostname_keywords(),
            device_overrides: BTreeMap::new(),
            owner_overrides: BTreeMap::new(),
        }
    }
}

fn default_device_keywords() -> Vec<KeywordCategory> {
    vec![
        KeywordCategory::new("server", &["server", "vm", "hypervisor"]),
        KeywordCategory::new("switch", &["switch"]),
        KeywordCategory::new("router", &["router", "gateway"]),
        KeywordCategory::new("firewall", &["firewall"]),
        KeywordCategory::new("printer", &["printer", "mfp"]),
        KeywordCategory::new("iot", &["iot", "sensor", "camera", "thermostat"]),
        KeywordCategory::new("access-point", &["access point", "access-point", "wireless"]),
    ]
}

fn default_hostname_keywords() -> Vec<KeywordCategory> {
    vec![
        KeywordCategory::new("server", &["srv", "server", "db", "app", "web"]),
        KeywordCategory::new("switch", &["switch", "sw-"]),
        KeywordCategory::new("router", &["rtr", "router", "gw-"]),
        KeywordCategory::new("firewall", &["fw", "firewall"]),
        KeywordCategory::new("printer", &["prn", "printer"]),
        KeywordCategory::new("iot", &["iot", "cam-", "sensor"]),
        KeywordCategory::new("access-point", &["ap-", "wap"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_ordered_and_non_empty() {
        let config = PipelineConfig::default();
        assert_eq!(config.device_keywords[0].category, "server");
        assert!(config.hostname_keywords.len() >= 7);
        assert!(config.device_overrides.is_empty());
    }

    #[test]
    fn keyword_matching_is_substring_based() {
        let category = KeywordCategory::new("server", &["server", "vm"]);
        assert!(category.matches("rack server in dc2"));
        assert!(!category.matches("printer on floor 3"));
    }

    #[test]
    fn config_deserializes_with_partial_fields() {
        let json = r#"{
            "owner_overrides": {
                "row-7": {"team": "Platform"}
            }
        }"#;
        let config: PipelineConfig = serde_json::from_str(json).expect("parse config");
        // Unspecified tables fall back to the built-ins.
        assert!(!config.device_keywords.is_empty());
        let override_entry = config.owner_overrides.get("row-7").expect("override");
        assert_eq!(override_entry.team.as_deref(), Some("Platform"));
        assert!(override_entry.email.is_none());
    }
}
