use crate::utils::{duration_to_ms, round_float};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single completed request, stamped at completion time.
///
/// Records are created exactly once, when the request's operation resolves, and are
/// never mutated afterwards. `request_id` is the dispatch index, so it does not have to
/// follow the order in which records were appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRecord<T, E> {
    pub request_id: u64,
    pub success: bool,
    pub payload: Result<T, E>,
    /// Time from test start to this completion.
    #[serde(serialize_with = "round_float")]
    pub time_since_start_ms: f64,
    /// Gap to the preceding completion in arrival order, or to test start for the first one.
    #[serde(serialize_with = "round_float")]
    pub time_since_last_completion_ms: f64,
    /// Time from admission of this request to its completion.
    #[serde(serialize_with = "round_float")]
    pub service_time_ms: f64,
}

impl<T, E> ResultRecord<T, E> {
    pub fn new(
        request_id: u64,
        payload: Result<T, E>,
        time_since_start: Duration,
        time_since_last_completion: Duration,
        service_time: Duration,
    ) -> Self {
        Self {
            request_id,
            success: payload.is_ok(),
            payload,
            time_since_start_ms: duration_to_ms(time_since_start),
            time_since_last_completion_ms: duration_to_ms(time_since_last_completion),
            service_time_ms: duration_to_ms(service_time),
        }
    }

    pub fn response(&self) -> Option<&T> {
        self.payload.as_ref().ok()
    }

    pub fn error(&self) -> Option<&E> {
        self.payload.as_ref().err()
    }
}
