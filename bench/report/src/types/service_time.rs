use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Distribution of per-request service times (admission to completion), in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceTimeSummary {
    #[serde(serialize_with = "round_float")]
    pub avg_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub median_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub p50_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub p90_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub p95_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub p99_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub max_ms: f64,
}
