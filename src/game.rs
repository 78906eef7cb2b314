//! High-level game management: turn alternation, history and outcome

use serde::{Deserialize, Serialize};

use crate::{
    board::{BoardState, Move, Player},
    Error, Result,
};

/// A move as it was played, tagged with who played it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress, with the authoritative board and move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: BoardState,
    moves: Vec<PlayedMove>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a fresh game with X to move
    pub fn new() -> Self {
        Game {
            board: BoardState::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// The current board
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The mark on turn
    pub fn to_move(&self) -> Player {
        self.board.to_move
    }

    /// Number of moves played so far
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Outcome, once the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for the side on turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the game is already decided and
    /// [`Error::CellOccupied`] if the cell is taken; the game state is
    /// unchanged in both cases.
    pub fn play(&mut self, mv: Move) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let player = self.board.to_move;
        self.board = self.board.make_move(mv)?;
        self.moves.push(PlayedMove { mv, player });

        if self.board.is_terminal() {
            self.outcome = Some(match self.board.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Clear the board and history to prepare for a new game
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
