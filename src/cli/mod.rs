//! CLI infrastructure: commands for playing, solving and analyzing positions

pub mod commands;
pub mod output;
