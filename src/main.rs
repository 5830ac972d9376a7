use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    // Keys may live in a local .env; clap reads them from the environment below.
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = cli::Cli::parse();
    commands::handle_runtime_commands(&cli)
}
