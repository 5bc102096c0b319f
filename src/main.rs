use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use letterbeam::{IngestConfig, RunSummary, run_config};

#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Fetch records, drop duplicates, and write one JSON file per initial", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint returning `{"results": [...]}`
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Number of records to collect before deduplication
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Directory that receives the `<KEY>.json` files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Give up after this many page requests
    #[arg(long)]
    max_pages: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<IngestConfig> {
        let mut config = match &self.config {
            Some(path) => IngestConfig::from_json_file(path)?,
            None => IngestConfig::default(),
        };
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(count) = self.count {
            config.target_count = count;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        Ok(config)
    }
}

fn run(args: Args) -> Result<RunSummary> {
    let config = args.into_config()?;
    run_config(&config).with_context(|| format!("ingest from {}", config.endpoint))
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match run(Args::parse()) {
        Ok(summary) => {
            info!(
                pages = summary.pages,
                fetched = summary.fetched,
                unique = summary.unique,
                files = summary.groups,
                "run complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
