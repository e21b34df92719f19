use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output directory path for storing the JSON report and the log file
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Identifier for the run (defaults to hostname if not provided)
    #[arg(long, default_value_t = default_identifier())]
    pub identifier: String,
}

fn default_identifier() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_owned())
}
