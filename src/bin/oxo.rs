//! oxo CLI - Tic-Tac-Toe at the terminal
//!
//! Subcommands:
//! - `play`: interactive game, any mix of human and cpu seats
//! - `solve`: optimal move and verdict for a given position
//! - `analyze`: minimax value of every legal move of a position

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-Tac-Toe with a provably optimal engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the terminal
    Play(oxo::cli::commands::play::PlayArgs),

    /// Compute the optimal move for a position
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Evaluate every legal move of a position
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
    }
}
