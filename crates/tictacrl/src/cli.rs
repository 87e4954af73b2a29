//! Command-line interface for tictacrl.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tictacrl - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictacrl")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "tictacrl.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Apply a fixed sequence of moves and print the result
    Replay {
        /// Moves as "row,column", X first
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["tictacrl", "replay", "0,0", "1,1", "--json"]);
        match cli.command {
            Command::Replay { moves, json } => {
                assert_eq!(moves, vec!["0,0", "1,1"]);
                assert!(json);
            }
            Command::Play => panic!("expected replay"),
        }
        assert_eq!(cli.config, PathBuf::from("tictacrl.toml"));
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::parse_from(["tictacrl", "play", "--config", "custom.toml"]);
        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictacrl", "replay"]).is_err());
    }
}
