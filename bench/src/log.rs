use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

pub const LOG_FILE_NAME: &str = "arete-bench.log";

/// Installs the global subscriber: stdout always, plus a plain-text log file in
/// `output_dir` when one is given. Keep the returned guard alive until the end of the
/// run, dropping it flushes the file writer.
pub fn init(output_dir: Option<&Path>) -> std::io::Result<Option<WorkerGuard>> {
    let mut layers = vec![fmt::Layer::default().boxed()];

    let guard = match output_dir {
        Some(output_dir) => {
            std::fs::create_dir_all(output_dir)?;
            let file_appender = tracing_appender::rolling::never(output_dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            layers.push(
                fmt::Layer::default()
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    Registry::default()
        .with(layers)
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();
    Ok(guard)
}
