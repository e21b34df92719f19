use crate::params::LoadTestParams;
use crate::record::ResultRecord;
use crate::service_time::ServiceTimeSummary;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const REPORT_FILE_NAME: &str = "report.json";

/// Aggregated, immutable outcome of one load-test run. All times are in milliseconds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoadTestReport<T, E> {
    /// Run unique identifier
    pub uuid: Uuid,

    /// Timestamp when the run was reduced
    pub timestamp: String,

    /// Parameters the run was started with
    pub params: LoadTestParams,

    /// Every record, in arrival order
    pub all_results: Vec<ResultRecord<T, E>>,

    /// Records with `success == true`, in arrival order
    pub successful_results: Vec<ResultRecord<T, E>>,

    #[serde(serialize_with = "round_float")]
    pub min_gap_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub max_gap_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub avg_gap_ms: f64,

    #[serde(serialize_with = "round_float")]
    pub min_latency_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub max_latency_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub avg_latency_ms: f64,

    /// Time of the last completion, equal to `max_latency_ms`
    #[serde(serialize_with = "round_float")]
    pub total_elapsed_ms: f64,

    #[serde(serialize_with = "round_float")]
    pub success_rate_percent: f64,
    #[serde(serialize_with = "round_float")]
    pub throughput_requests_per_second: f64,

    pub service_time: ServiceTimeSummary,
}

impl<T, E> LoadTestReport<T, E> {
    pub fn total_requests(&self) -> usize {
        self.all_results.len()
    }

    pub fn successful_requests(&self) -> usize {
        self.successful_results.len()
    }

    pub fn failed_requests(&self) -> usize {
        self.all_results.len() - self.successful_results.len()
    }
}

impl<T: Serialize, E: Serialize> LoadTestReport<T, E> {
    /// Writes `report.json` into `output_dir`, creating the directory when needed.
    pub fn dump_to_json(&self, output_dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;
        let report_path = output_dir.join(REPORT_FILE_NAME);
        let report_json = serde_json::to_string_pretty(self)?;
        std::fs::write(&report_path, report_json)?;
        Ok(report_path)
    }
}
