//! tictacrl - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictacrl::{Cli, Command, TictacrlConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TictacrlConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Interactive game on the terminal.
fn run_play(config: &TictacrlConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let game = tictacrl::play(stdin.lock(), &mut stdout, config)?;
    info!(state = %game.game_state(), "Session ended");
    Ok(())
}

/// Fixed sequence of moves from the command line.
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    info!(count = moves.len(), "Replaying moves");
    let game = tictacrl::replay(moves)?;

    if json {
        let rendered = serde_json::to_string_pretty(&game).context("Failed to serialize game")?;
        println!("{}", rendered);
    } else {
        println!("{}", tictacrl::describe(&game));
    }
    Ok(())
}
