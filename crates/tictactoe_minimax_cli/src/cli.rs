//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_minimax::Player;

/// Tic-tac-toe with an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Mark you play as (x or o); X always moves first
        #[arg(long)]
        human: Option<Player>,
    },

    /// Run automated games between two computer contestants
    Bout {
        /// Contestant playing X
        #[arg(short, long, value_enum, default_value_t = ContestantKind::Engine)]
        x: ContestantKind,

        /// Contestant playing O
        #[arg(short, long, value_enum, default_value_t = ContestantKind::Random)]
        o: ContestantKind,

        /// Number of games to play
        #[arg(short, long)]
        games: Option<usize>,
    },

    /// Report the best move and value for a position
    Best {
        /// Board in text notation, e.g. "XX./OO./..."
        board: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Computer contestants available for automated bouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContestantKind {
    /// Exhaustive minimax search.
    Engine,
    /// Uniformly random legal moves.
    Random,
}
