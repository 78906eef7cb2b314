//! Tic-Tac-Toe with a provably optimal minimax engine
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board and game implementation
//! - A move-search engine (minimax with alpha-beta pruning) that never loses
//! - Human and engine move providers for terminal play
//! - A CLI for playing, solving and analyzing positions

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod lines;
pub mod players;

pub use board::{BoardState, Cell, Move, Player};
pub use engine::{choose_move, position_value, search, ScoredMove, DRAW, LOSS, WIN};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, PlayedMove};
pub use players::{Participant, PlayerKind};
