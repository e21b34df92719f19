use crate::report::LoadTestReport;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

/// Consumer of a finished report. Presenters only observe the report, so any of them can
/// be swapped without touching the code that produced it.
pub trait ReportPresenter<T, E> {
    fn present(&self, report: &LoadTestReport<T, E>);
}

/// Prints the summary through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl<T, E> ReportPresenter<T, E> for ConsolePresenter {
    fn present(&self, report: &LoadTestReport<T, E>) {
        report.print_summary();
    }
}

/// Dumps the report as JSON into an output directory.
#[derive(Debug, Clone)]
pub struct JsonFilePresenter {
    output_dir: PathBuf,
}

impl JsonFilePresenter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl<T: Serialize, E: Serialize> ReportPresenter<T, E> for JsonFilePresenter {
    fn present(&self, report: &LoadTestReport<T, E>) {
        match report.dump_to_json(&self.output_dir) {
            Ok(path) => info!("Report saved to {}", path.display()),
            Err(e) => error!(
                "Failed to write report to {}: {e}",
                self.output_dir.display()
            ),
        }
    }
}
