use std::io;

use anyhow::{Context, Result};
use chessai::{Cli, GameRunner, PlayConfig};
use chessai_classical::ClassicalEngine;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PlayConfig::resolve(&cli)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        players = ?config.players,
        depth = config.depth,
        reduced_board = config.reduced_board,
        "starting game"
    );

    let runner = GameRunner::new(config).context("invalid start position")?;
    let mut engine = ClassicalEngine::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    runner
        .play(&mut engine, &mut input, &mut output)
        .context("console I/O failed")?;
    Ok(())
}
