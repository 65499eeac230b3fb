//! Noughts - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use noughts::GameConfig;
use noughts::cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::Replay { moves } => run_replay(&moves, &config),
    }
}

/// Reads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if cli.zero_based {
        config = config.with_one_based(false);
    }
    if let Some(delimiter) = &cli.delimiter {
        config = config.with_delimiter(delimiter.clone());
    }
    Ok(config)
}

/// Run the interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    let summary = noughts::Session::new(stdin, stdout, config).run()?;
    info!(rounds = summary.rounds(), "Session ended");
    Ok(())
}

/// Replay moves given on the command line
#[instrument(skip(config))]
fn run_replay(moves: &[String], config: &GameConfig) -> Result<()> {
    info!(count = moves.len(), "Replaying moves");
    let mut stdout = std::io::stdout().lock();
    noughts::replay_moves(moves, config, &mut stdout)?;
    Ok(())
}
