use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use envject::inject;
use envject::paths::ProjectPaths;

/// No flags, no subcommands: the run is driven entirely by the app root's
/// manifest and the process environment.
#[derive(Parser, Debug)]
#[command(
    name = "envject",
    version,
    about = "Inject runtime environment variables into a built single-page app"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ENVJECT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let root = std::env::current_dir().context("determine app root")?;
    inject::run(&ProjectPaths::new(root))
}
