//! CLI entry point for building and replaying a tile field scene

use clap::Parser;
use tilefield::io::cli::{Cli, SceneRunner};
use tracing_subscriber::EnvFilter;

fn main() -> tilefield::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    SceneRunner::new(cli).run()?;
    Ok(())
}
