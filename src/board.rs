//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// One of the two marks in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A (row, column) pair addressing a cell on the 3x3 grid.
///
/// Rows and columns are zero-indexed; row 0 is the top row and column 0 is
/// the leftmost column. The flat cell index is `row * 3 + col`, so iterating
/// flat indices 0..9 visits cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Create a move, validating that both coordinates are in 0..3.
    pub fn new(row: usize, col: usize) -> Result<Move> {
        if row > 2 || col > 2 {
            return Err(Error::InvalidCoordinate { row, col });
        }
        Ok(Move { row, col })
    }

    /// Build a move from a flat cell index in 0..9.
    pub fn from_index(index: usize) -> Move {
        debug_assert!(index < 9);
        Move {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Flat cell index in 0..9
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl fmt::Display for Move {
    /// Displays 1-indexed coordinates, matching what human players type in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}

/// Complete board state including cells and whose turn it is.
///
/// The grid is stored flat in row-major order. The type implements `Copy`
/// (10 bytes), so callers hand the engine a value snapshot and their own
/// board is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    /// Create a board from a 9-character row-major string.
    ///
    /// Whitespace is filtered out. `-`, `.` and space are empty cells. An
    /// optional `_X` or `_O` suffix fixes the player to move; without it the
    /// turn is inferred from the piece counts, assuming X moved first.
    ///
    /// # Errors
    ///
    /// Returns an error if the string has fewer than 9 cell characters, any
    /// character is invalid, the piece counts differ by more than one, or a
    /// suffix conflicts with the counts.
    pub fn from_string(s: &str) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        let (board_part, suffix) = match cleaned.split_once('_') {
            Some((board, turn)) => (board, Some(turn)),
            None => (cleaned.as_str(), None),
        };

        let mut cells = [Cell::Empty; 9];
        let mut chars = board_part.chars();
        for (i, slot) in cells.iter_mut().enumerate() {
            let c = chars.next().ok_or_else(|| Error::InvalidBoardLength {
                expected: 9,
                got: i,
                context: s.to_string(),
            })?;
            *slot = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        if x_count.abs_diff(o_count) > 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        let to_move = match suffix {
            Some(turn) => {
                let player = match turn {
                    "X" | "x" => Player::X,
                    "O" | "o" => Player::O,
                    other => {
                        return Err(Error::InvalidPlayerString {
                            player: other.to_string(),
                            context: s.to_string(),
                        });
                    }
                };
                // A mark with the extra piece cannot also be on turn.
                let consistent = match player {
                    Player::X => x_count <= o_count,
                    Player::O => o_count <= x_count,
                };
                if !consistent {
                    return Err(Error::InvalidConfiguration {
                        message: format!(
                            "piece counts (X={x_count}, O={o_count}) are inconsistent with {player} to move in '{s}'"
                        ),
                    });
                }
                player
            }
            // X-first semantics: equal counts means X is on turn.
            None if x_count > o_count => Player::O,
            None => Player::X,
        };

        Ok(BoardState { cells, to_move })
    }

    /// Get the cell addressed by a move
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Check if the cell addressed by a move is empty
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Number of empty cells remaining
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        (0..9)
            .filter(|&i| self.cells[i] == Cell::Empty)
            .map(Move::from_index)
            .collect()
    }

    /// Place the current player's mark and return the new board state.
    ///
    /// # Errors
    ///
    /// Returns an error if the addressed cell is already occupied.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, mv: Move) -> Result<BoardState> {
        if !self.is_empty(mv) {
            return Err(Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.index()] = self.to_move.to_cell();
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    /// Legal moves in this position (empty cells when the game is not over)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_cells()
    }

    /// Check if a player has three in a line
    pub fn has_won(&self, player: Player) -> bool {
        crate::lines::winner(&self.cells) == Some(player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        crate::lines::winner(&self.cells)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_count() == 0
    }

    /// Check if the position is a draw (full board, no winner)
    pub fn is_draw(&self) -> bool {
        self.empty_count() == 0 && self.winner().is_none()
    }

    /// Compact string key: 9 cell characters plus the player to move
    pub fn encode(&self) -> String {
        let cells: String = self.cells.iter().map(|&c| c.to_char()).collect();
        format!("{}_{}", cells, self.to_move.to_char())
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * 3 + col].to_char())?;
            }
        }
        Ok(())
    }
}
