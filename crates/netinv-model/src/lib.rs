pub mod anomaly;
pub mod config;
pub mod error;
pub mod record;

pub use anomaly::{Anomaly, AnomalyIssue};
pub use config::{DeviceOverride, KeywordCategory, OwnerOverride, PipelineConfig};
pub use error::{InventoryError, Result};
pub use record::{OUTPUT_COLUMNS, ProcessedRecord, RawRecord};
