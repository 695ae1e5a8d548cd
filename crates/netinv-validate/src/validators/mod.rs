//! Per-field validators. Each is a total function from a raw string to a
//! structured result with a reason code; none of them raises anomalies
//! itself, that is the record processor's job.

pub mod hostname;
pub mod ip;
pub mod mac;
pub mod owner;
pub mod site;

pub use hostname::{HostnameReason, HostnameValidation, fqdn_consistent, validate_hostname};
pub use ip::{IpReason, IpValidation, validate_ip};
pub use mac::{MacReason, MacValidation, validate_mac};
pub use owner::parse_owner;
pub use site::normalize_site;
