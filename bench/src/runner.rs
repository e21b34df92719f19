use crate::args::common::AreteBenchArgs;
use crate::args::target::TargetCommand;
use crate::error::LoadTestError;
use crate::load_test::LoadTest;
use crate::operation::Operation;
use crate::targets::{HttpOperation, SimulatedOperation};
use arete_report::presenter::{JsonFilePresenter, ReportPresenter};
use serde::Serialize;
use std::fmt::Debug;
use std::time::Duration;
use tracing::info;

pub struct LoadTestRunner {
    args: AreteBenchArgs,
}

impl LoadTestRunner {
    pub fn new(args: AreteBenchArgs) -> Self {
        Self { args }
    }

    pub async fn run(self) -> Result<(), LoadTestError> {
        match &self.args.target {
            TargetCommand::Simulated(simulated) => {
                let operation = SimulatedOperation::new(
                    Duration::from_millis(simulated.min_delay_ms),
                    Duration::from_millis(simulated.max_delay_ms),
                    simulated.failure_rate,
                )?;
                self.execute(operation).await
            }
            TargetCommand::Http(http) => {
                let operation = HttpOperation::new(
                    &http.url,
                    self.args.concurrency,
                    Duration::from_millis(http.timeout_ms.get()),
                )?;
                self.execute(operation).await
            }
        }
    }

    async fn execute<O>(&self, operation: O) -> Result<(), LoadTestError>
    where
        O: Operation,
        O::Output: Debug + Clone + Serialize,
        O::Error: Debug + Clone + Serialize,
    {
        let report = LoadTest::new(self.args.config(), operation)?
            .with_identifier(self.args.identifier())
            .run()
            .await?;

        if let Some(output_dir) = self.args.output_dir() {
            JsonFilePresenter::new(output_dir).present(&report);
        } else {
            info!(
                "Load test '{}' finished: {}/{} successful in {:.2} ms",
                report.params.name,
                report.successful_requests(),
                report.total_requests(),
                report.total_elapsed_ms
            );
        }
        Ok(())
    }
}
