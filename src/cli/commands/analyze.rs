//! Analyze command - value every legal move of a position

use anyhow::{bail, Result};
use clap::Parser;

use crate::{board::BoardState, cli::output, engine};

#[derive(Parser, Debug)]
#[command(about = "Evaluate every legal move of a position")]
pub struct AnalyzeArgs {
    /// Position to analyze (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => BoardState::from_string(s)?,
        None => BoardState::new(),
    };
    if board.is_terminal() {
        bail!("position is already over; nothing to analyze");
    }

    let mark = board.to_move;
    let moves = board.legal_moves();
    let pb = output::create_search_progress(moves.len() as u64);

    // Value of a move is the value of the resulting position, still scored
    // from the mover's perspective.
    let mut values = [None::<i32>; 9];
    for &mv in &moves {
        let child = board.make_move(mv)?;
        values[mv.index()] = Some(engine::position_value(&child, mark));
        pb.inc(1);
    }
    pb.finish_and_clear();

    output::print_section(&format!("Move values for {mark}"));
    println!("{}", output::render_board(&board));
    for row in 0..3 {
        let mut line = String::from("  ");
        for col in 0..3 {
            let text = match values[row * 3 + col] {
                Some(value) => format!("{value:+}"),
                None => board.cells[row * 3 + col].to_char().to_string(),
            };
            line.push_str(&format!("{text:>5}"));
        }
        println!("{line}");
    }

    let best = engine::search(&board, mark);
    if let Some(mv) = best.mv {
        println!();
        output::print_kv("Engine choice", &mv.to_string());
        output::print_kv("Value", &format!("{:+}", best.value));
    }
    Ok(())
}
