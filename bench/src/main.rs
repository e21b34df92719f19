use arete::args::common::AreteBenchArgs;
use arete::runner::LoadTestRunner;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = AreteBenchArgs::parse();
    args.validate();
    let _log_guard = arete::log::init(args.output_dir())?;

    info!("Starting the load test...");
    LoadTestRunner::new(args).run().await?;
    info!("Finished the load test.");
    Ok(())
}
