//! Output formatting and progress bars for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::BoardState;

/// Create a progress bar for sweeping candidate moves
pub fn create_search_progress(total_moves: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_moves);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} moves")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Render the board with 1-indexed row and column guides
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::from("    1   2   3\n");
    for row in 0..3 {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        out.push_str(&format!("{} ", row + 1));
        for col in 0..3 {
            if col > 0 {
                out.push('|');
            }
            out.push_str(&format!(" {} ", board.cells[row * 3 + col].to_char()));
        }
        out.push('\n');
    }
    out
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:26} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_board_includes_guides_and_cells() {
        let board = BoardState::from_string("XOX.O.X..").unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with("    1   2   3\n"));
        assert!(rendered.contains(" X | O | X "));
        assert!(rendered.contains("---+---+---"));
        assert_eq!(rendered.lines().count(), 6);
    }
}
