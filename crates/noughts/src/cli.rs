//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (ignored if missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Read coordinates as 0-based instead of 1-based
    #[arg(long)]
    pub zero_based: bool,

    /// Separator printed between cells
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, two players at one keyboard
    Play,

    /// Apply a list of row,col moves and print the resulting board
    Replay {
        /// Moves in order, X first (e.g. 1,1 2,2 1,2)
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["noughts"]);
        assert_eq!(cli.command, None);
        assert!(!cli.zero_based);
        assert_eq!(cli.config, std::path::PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_replay_moves() {
        let cli = Cli::parse_from(["noughts", "--zero-based", "replay", "0,0", "1,1"]);
        assert!(cli.zero_based);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0,0".to_string(), "1,1".to_string()]
            })
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["noughts", "replay"]).is_err());
    }
}
