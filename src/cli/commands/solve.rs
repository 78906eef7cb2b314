//! Solve command - print the optimal move for a position

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;

use crate::{board::BoardState, cli::output, engine};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a position")]
pub struct SolveArgs {
    /// Board as 9 row-major cells ('-' or '.' for empty), with an optional
    /// _X/_O suffix naming the side to move
    pub board: String,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveReport {
    board: String,
    to_move: char,
    row: usize,
    col: usize,
    value: i32,
    verdict: &'static str,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)?;
    if board.is_terminal() {
        bail!("position is already over; nothing to solve");
    }

    let mark = board.to_move;
    let best = engine::search(&board, mark);
    let Some(mv) = best.mv else {
        bail!("no legal move found in '{}'", args.board);
    };

    let verdict = match best.value {
        engine::WIN => "win",
        engine::DRAW => "draw",
        _ => "loss",
    };

    if args.json {
        let report = SolveReport {
            board: board.encode(),
            to_move: mark.to_char(),
            row: mv.row,
            col: mv.col,
            value: best.value,
            verdict,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_section("Position");
    println!("{}", output::render_board(&board));
    output::print_kv("To move", &mark.to_string());
    output::print_kv("Best move", &mv.to_string());
    output::print_kv("Outcome with optimal play", verdict);
    Ok(())
}
