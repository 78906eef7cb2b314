//! Move providers: human terminal input and the search engine.
//!
//! A [`Participant`] is a seat at the table. Its [`PlayerKind`] decides where
//! moves come from: a human typing 1-indexed coordinates, or the engine
//! computing an optimal move. Dispatch is by variant; the human path reads
//! through a generic [`BufRead`] so it can be driven from tests.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::ValueEnum;

use crate::{
    board::{BoardState, Move, Player},
    engine, Error, Result,
};

/// How a participant produces moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves typed at the terminal
    Human,
    /// Moves computed by the search engine
    Cpu,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Cpu => write!(f, "cpu"),
        }
    }
}

/// A seat at the table: a display name, a mark, and a move source
#[derive(Debug, Clone)]
pub struct Participant {
    pub name: String,
    pub mark: Player,
    pub kind: PlayerKind,
}

impl Participant {
    pub fn new(name: impl Into<String>, mark: Player, kind: PlayerKind) -> Self {
        Participant {
            name: name.into(),
            mark,
            kind,
        }
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    /// Produce the next move for this participant.
    ///
    /// The cpu variant calls the engine and is guaranteed a legal move on a
    /// non-terminal board; the human variant prompts for coordinates but
    /// does not check occupancy, which the game loop handles by re-asking.
    pub fn next_move(&self, board: &BoardState, input: &mut impl BufRead) -> Result<Move> {
        match self.kind {
            PlayerKind::Cpu => engine::choose_move(board, board.empty_count(), self.mark),
            PlayerKind::Human => prompt_move(input),
        }
    }
}

/// Ask for a 1-indexed row, then column, re-asking until each is valid.
pub fn prompt_move(input: &mut impl BufRead) -> Result<Move> {
    let row = prompt_coordinate(input, "row")?;
    let col = prompt_coordinate(input, "column")?;
    Move::new(row, col)
}

fn prompt_coordinate(input: &mut impl BufRead, label: &str) -> Result<usize> {
    print!("Enter the {label} where you want to make your move. Valid {label}s are 1, 2, and 3: ");
    io::stdout().flush()?;

    loop {
        let line = read_line(input)?;
        match line.trim() {
            "1" => return Ok(0),
            "2" => return Ok(1),
            "3" => return Ok(2),
            other => {
                print!("'{other}' is not a valid {label}. Valid {label}s are 1, 2, and 3: ");
                io::stdout().flush()?;
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).map_err(|source| Error::Io {
        operation: "read player input".to_string(),
        source,
    })?;
    if bytes == 0 {
        return Err(Error::Io {
            operation: "read player input".to_string(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
        });
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompt_move_parses_one_indexed_coordinates() {
        let mut input = Cursor::new("2\n3\n");
        let mv = prompt_move(&mut input).unwrap();
        assert_eq!(mv, Move { row: 1, col: 2 });
    }

    #[test]
    fn prompt_move_reasks_on_garbage() {
        let mut input = Cursor::new("9\nfirst\n1\n0\n3\n");
        let mv = prompt_move(&mut input).unwrap();
        assert_eq!(mv, Move { row: 0, col: 2 });
    }

    #[test]
    fn prompt_move_trims_whitespace() {
        let mut input = Cursor::new("  1 \n 2\n");
        let mv = prompt_move(&mut input).unwrap();
        assert_eq!(mv, Move { row: 0, col: 1 });
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        assert!(prompt_move(&mut input).is_err());

        // EOF after the row prompt is also an error.
        let mut input = Cursor::new("1\n");
        assert!(prompt_move(&mut input).is_err());
    }

    #[test]
    fn cpu_participant_consults_the_engine() {
        // X - O / X - O / - - -   The engine must complete the left column.
        let board = BoardState::from_string("X.OX.O...").unwrap();
        let cpu = Participant::new("cpu", Player::X, PlayerKind::Cpu);
        let mv = cpu.next_move(&board, &mut Cursor::new("")).unwrap();
        assert_eq!(mv, Move { row: 2, col: 0 });
    }

    #[test]
    fn human_participant_reads_from_input() {
        let board = BoardState::new();
        let human = Participant::new("player 1", Player::X, PlayerKind::Human);
        let mv = human.next_move(&board, &mut Cursor::new("1\n1\n")).unwrap();
        assert_eq!(mv, Move { row: 0, col: 0 });
    }
}
