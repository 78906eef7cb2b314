//! Winning line analysis for the 3x3 grid

use crate::board::{Cell, Move, Player};

/// Flat cell indices of the 8 winning lines: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the player holding a complete line, if any.
///
/// A legally reached board has at most one winner, so the first full line
/// found decides it.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        match (cells[line[0]], cells[line[1]], cells[line[2]]) {
            (Cell::X, Cell::X, Cell::X) => return Some(Player::X),
            (Cell::O, Cell::O, Cell::O) => return Some(Player::O),
            _ => {}
        }
    }
    None
}

/// All moves that would complete a line for `player` right now.
pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<Move> {
    let target = player.to_cell();
    let mut moves = Vec::new();

    for line in &WINNING_LINES {
        let mut own = 0;
        let mut gap = None;
        for &idx in line {
            if cells[idx] == target {
                own += 1;
            } else if cells[idx] == Cell::Empty {
                gap = Some(idx);
            }
        }
        if own == 2 {
            if let Some(idx) = gap {
                let mv = Move::from_index(idx);
                if !moves.contains(&mv) {
                    moves.push(mv);
                }
            }
        }
    }

    moves
}
