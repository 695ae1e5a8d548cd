use std::path::PathBuf;

use netinv_model::Anomaly;
use netinv_report::ReportPaths;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub records: usize,
    pub valid_ip: usize,
    pub valid_mac: usize,
    pub valid_hostname: usize,
    /// Final grouped anomaly report.
    pub anomalies: Vec<Anomaly>,
    /// Written artifact paths; None on a dry run.
    pub paths: Option<ReportPaths>,
}

impl CleanResult {
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}
