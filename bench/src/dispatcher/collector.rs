use crate::error::LoadTestError;
use crate::timer::StepTimer;
use arete_report::record::ResultRecord;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

const MAX_PREALLOCATED_RESULTS: u64 = 1 << 16;

/// Shared sink of completed requests.
///
/// The timer is marked while the results lock is held, so arrival order and the order
/// in which gaps are measured are the same.
pub struct ResultCollector<T, E> {
    timer: Arc<StepTimer>,
    expected: u64,
    print_responses: bool,
    results: Mutex<Vec<ResultRecord<T, E>>>,
}

impl<T: Debug, E: Debug> ResultCollector<T, E> {
    pub fn new(timer: Arc<StepTimer>, expected: u64, print_responses: bool) -> Self {
        Self {
            timer,
            expected,
            print_responses,
            results: Mutex::new(Vec::with_capacity(
                expected.min(MAX_PREALLOCATED_RESULTS) as usize,
            )),
        }
    }

    /// Stamps and appends the outcome of `request_id`, returning how many results have
    /// been collected so far.
    pub async fn record(
        &self,
        request_id: u64,
        payload: Result<T, E>,
        admitted_at: Duration,
    ) -> Result<u64, LoadTestError> {
        let mut results = self.results.lock().await;
        let lap = self.timer.mark()?;
        if self.print_responses {
            match &payload {
                Ok(response) => info!("Request #{request_id} → {response:?}"),
                Err(error) => warn!("Request #{request_id} failed → {error:?}"),
            }
        }
        results.push(ResultRecord::new(
            request_id,
            payload,
            lap.since_start,
            lap.since_last_mark,
            lap.since_start.saturating_sub(admitted_at),
        ));
        let collected = results.len() as u64;
        drop(results);

        self.timer
            .step(format_args!("Received response for request #{request_id}"));
        if collected == self.expected {
            self.timer.step("All responses received");
        }
        Ok(collected)
    }

    /// Takes the collected results, failing unless exactly `expected` were recorded.
    pub async fn finish(&self) -> Result<Vec<ResultRecord<T, E>>, LoadTestError> {
        let results = std::mem::take(&mut *self.results.lock().await);
        let collected = results.len() as u64;
        if collected != self.expected {
            return Err(LoadTestError::IncompleteRun {
                expected: self.expected,
                collected,
            });
        }
        Ok(results)
    }
}
