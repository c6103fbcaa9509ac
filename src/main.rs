use anyhow::Result;
use clap::Parser;
use sheetsplit::cli::Cli;
use sheetsplit::splitter::{self, SplitConfig};
use tracing::info;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_logging();

    let config = SplitConfig {
        rows_per_file: splitter::clamp_rows_per_file(args.rows),
        ..SplitConfig::default()
    };
    let prefix = args.effective_prefix();

    info!(
        input = %args.input_csv.display(),
        rows_per_file = config.rows_per_file,
        "splitting"
    );
    let summary = splitter::split(&args.input_csv, &prefix, &config)?;
    info!(
        artifacts = summary.artifacts,
        rows = summary.total_rows,
        "all conversions finished"
    );
    Ok(())
}
