//! `cinedex` entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cinedex_axum::cli::Cli;
use cinedex_axum::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    start_server(cli.into_config()).await
}
