use super::defaults::*;
use super::output::OutputArgs;
use super::target::TargetCommand;
use crate::load_test::LoadTestConfig;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::num::{NonZeroU64, NonZeroUsize};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AreteBenchArgs {
    /// Operation to load test
    #[command(subcommand)]
    pub target: TargetCommand,

    /// Name of the test, used as a label in logs and the report
    #[arg(long, default_value_t = DEFAULT_TEST_NAME.to_owned())]
    pub name: String,

    /// Total number of requests to send
    #[arg(long, short = 'n', default_value_t = DEFAULT_REQUESTS)]
    pub requests: NonZeroU64,

    /// Maximum number of requests in flight at the same time
    #[arg(long, short = 'c', default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub concurrency: NonZeroUsize,

    /// Log a line for every request sent and every response received
    #[arg(long, default_value_t = DEFAULT_PRINT_STEPS)]
    pub print_steps: bool,

    /// Log every response (or error) as it arrives
    #[arg(long, default_value_t = DEFAULT_PRINT_RESPONSES)]
    pub print_responses: bool,

    /// Do not print the summary at the end of the run
    #[arg(long, default_value_t = DEFAULT_SKIP_REPORT)]
    pub no_report: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl AreteBenchArgs {
    pub fn validate(&self) {
        if let TargetCommand::Simulated(simulated) = &self.target {
            if simulated.min_delay_ms > simulated.max_delay_ms {
                AreteBenchArgs::command()
                    .error(
                        ErrorKind::ArgumentConflict,
                        format!(
                            "--min-delay-ms ({}) cannot be greater than --max-delay-ms ({})",
                            simulated.min_delay_ms, simulated.max_delay_ms
                        ),
                    )
                    .exit();
            }
        }
    }

    pub fn config(&self) -> LoadTestConfig {
        LoadTestConfig::new(self.name.clone(), self.requests.get())
            .with_max_concurrency(self.concurrency.get())
            .with_print_steps(self.print_steps)
            .with_print_responses(self.print_responses)
            .with_print_report(!self.no_report)
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output.output_dir.as_deref()
    }

    pub fn identifier(&self) -> &str {
        &self.output.identifier
    }
}
