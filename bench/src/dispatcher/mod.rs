mod collector;

pub use collector::ResultCollector;

use crate::error::LoadTestError;
use crate::operation::Operation;
use crate::timer::StepTimer;
use arete_report::record::ResultRecord;
use human_repr::HumanCount;
use std::fmt::Debug;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::info;

/// Issues requests against an operation while keeping at most `max_concurrency` of them
/// in flight.
///
/// Every request holds one semaphore permit from admission until its operation
/// resolves. Failed operations release their permit like successful ones and are
/// recorded with `success == false`. There is no timeout: an operation that never
/// resolves keeps `run` pending, wrap it in `tokio::time::timeout` to bound it.
pub struct Dispatcher {
    max_concurrency: NonZeroUsize,
    timer: Arc<StepTimer>,
    print_responses: bool,
}

impl Dispatcher {
    pub fn new(max_concurrency: NonZeroUsize, timer: Arc<StepTimer>) -> Self {
        Self {
            max_concurrency,
            timer,
            print_responses: false,
        }
    }

    pub fn with_response_printing(mut self, print_responses: bool) -> Self {
        self.print_responses = print_responses;
        self
    }

    pub fn max_concurrency(&self) -> NonZeroUsize {
        self.max_concurrency
    }

    /// Fires `total_requests` requests and returns their records in arrival order once
    /// every one of them has completed. Starts the timer unless it is already running.
    pub async fn run<O>(
        &self,
        total_requests: u64,
        operation: Arc<O>,
    ) -> Result<Vec<ResultRecord<O::Output, O::Error>>, LoadTestError>
    where
        O: Operation,
        O::Output: Debug,
        O::Error: Debug,
    {
        if !self.timer.is_started() {
            self.timer.start()?;
        }

        info!(
            "{} → sending {} requests, at most {} in flight...",
            self.timer.name(),
            total_requests.human_count_bare(),
            self.max_concurrency
        );

        let admission = Arc::new(Semaphore::new(self.max_concurrency.get()));
        let collector = Arc::new(ResultCollector::new(
            self.timer.clone(),
            total_requests,
            self.print_responses,
        ));
        let mut tasks = JoinSet::new();

        self.timer.step("Starting to make requests");
        for request_id in 0..total_requests {
            let permit = admission
                .clone()
                .acquire_owned()
                .await
                .map_err(|_| LoadTestError::AdmissionClosed)?;
            self.timer.step(format_args!("Sending request #{request_id}"));
            let admitted_at = self.timer.since_start()?;

            let operation = operation.clone();
            let collector = collector.clone();
            tasks.spawn(async move {
                let payload = operation.execute(request_id).await;
                drop(permit);
                collector.record(request_id, payload, admitted_at).await
            });

            while let Some(joined) = tasks.try_join_next() {
                Self::check_task(joined)?;
            }
        }
        self.timer.step("All requests fired off");

        while let Some(joined) = tasks.join_next().await {
            Self::check_task(joined)?;
        }

        let results = collector.finish().await?;
        info!(
            "{} → all {} requests completed",
            self.timer.name(),
            results.len()
        );
        Ok(results)
    }

    fn check_task(
        joined: Result<Result<u64, LoadTestError>, JoinError>,
    ) -> Result<(), LoadTestError> {
        joined.map_err(|e| LoadTestError::OperationPanicked(e.to_string()))??;
        Ok(())
    }
}
