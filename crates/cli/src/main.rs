use anyhow::Result;
use clap::Parser;

use drills_cli::Drills;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for the dialogue
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Drills::parse().execute()
}
