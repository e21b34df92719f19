use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadTestError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot reduce an empty result set")]
    EmptyResults,
    #[error("Timer has already been started")]
    TimerAlreadyStarted,
    #[error("Timer has not been started")]
    TimerNotStarted,
    #[error("Admission semaphore closed")]
    AdmissionClosed,
    #[error("Operation task failed: {0}")]
    OperationPanicked(String),
    #[error("Run finished with {collected} results, expected {expected}")]
    IncompleteRun { expected: u64, collected: u64 },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP client error")]
    HttpClient(#[from] reqwest::Error),
    #[error("Cannot write report")]
    CannotWriteReport(#[from] std::io::Error),
}
