//! Inventory record validation and anomaly detection.
//!
//! The core pipeline of the inventory cleaner: per-field validators feed
//! the record processor, whose outputs feed the dataset-level duplicate
//! scan and anomaly grouping. All stages are pure over in-memory data;
//! lookup tables and overrides arrive via [`netinv_model::PipelineConfig`].

pub mod classifier;
pub mod dataset;
pub mod processor;
pub mod validators;

pub use classifier::{
    Classification, ClassificationSource, UNKNOWN_DEVICE_TYPE, classify_device,
    infer_type_from_hostname,
};
pub use dataset::{CleanOutput, clean_inventory, detect_duplicates, group_anomalies};
pub use processor::process_record;
pub use validators::{
    HostnameReason, HostnameValidation, IpReason, IpValidation, MacReason, MacValidation,
    fqdn_consistent, normalize_site, parse_owner, validate_hostname, validate_ip, validate_mac,
};
