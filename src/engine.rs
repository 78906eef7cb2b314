//! Move-search engine: minimax with alpha-beta pruning.
//!
//! The engine is a pure function over a board snapshot. It explores
//! hypothetical continuations on a private working copy of the cells using
//! mutate-and-undo, so the caller's board is never touched. The search is
//! rooted from the acting player's perspective: that mark is the maximizer
//! for the whole call, regardless of which mark opened the game, and the
//! opponent is the minimizer. Recursion depth equals the number of empty
//! cells at each node, so the search is statically bounded by 9 levels.

use crate::{
    board::{BoardState, Cell, Move, Player},
    lines, Error, Result,
};

/// Value of a position won by the root maximizer
pub const WIN: i32 = 10;
/// Value of a position won by the root maximizer's opponent
pub const LOSS: i32 = -10;
/// Value of a drawn position
pub const DRAW: i32 = 0;

// Window bounds. Leaf values are always one of {LOSS, DRAW, WIN}, so these
// sit strictly outside the value range and the first real candidate always
// replaces the initial best.
const SCORE_FLOOR: i32 = -100;
const SCORE_CEILING: i32 = 100;

/// A candidate move together with its minimax value.
///
/// `mv` is `None` for terminal leaves, where there is no move to report and
/// `value` is one of [`WIN`], [`LOSS`] or [`DRAW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Option<Move>,
    pub value: i32,
}

/// Terminal evaluation from the root maximizer's perspective.
///
/// Returns `None` while the position is still in progress. A full line of
/// `root`'s mark scores [`WIN`], a full opponent line [`LOSS`], and an
/// exhausted depth (no empty cells left) [`DRAW`].
fn evaluate(cells: &[Cell; 9], root: Player, depth: usize) -> Option<i32> {
    match lines::winner(cells) {
        Some(winner) if winner == root => Some(WIN),
        Some(_) => Some(LOSS),
        None if depth == 0 => Some(DRAW),
        None => None,
    }
}

/// Recursive adversarial search over the working cell buffer.
///
/// `depth` is the number of empty cells at this node, `to_place` the mark on
/// turn at this level (alternating each level, independent of which mark is
/// the root maximizer). Empty cells are tried in row-major order; the best
/// candidate is replaced only on a strict improvement, so ties resolve to
/// the first move encountered. The window is raised to the best-so-far at
/// this node before each comparison, and siblings are pruned as soon as
/// `beta <= alpha`.
fn minimax(
    cells: &mut [Cell; 9],
    depth: usize,
    maximizing: bool,
    to_place: Player,
    root: Player,
    mut alpha: i32,
    mut beta: i32,
) -> ScoredMove {
    if let Some(value) = evaluate(cells, root, depth) {
        return ScoredMove { mv: None, value };
    }

    let mut best = ScoredMove {
        mv: None,
        value: if maximizing {
            SCORE_FLOOR
        } else {
            SCORE_CEILING
        },
    };

    for index in 0..9 {
        if cells[index] != Cell::Empty {
            continue;
        }

        cells[index] = to_place.to_cell();
        let mut child = minimax(
            cells,
            depth - 1,
            !maximizing,
            to_place.opponent(),
            root,
            alpha,
            beta,
        );
        cells[index] = Cell::Empty;
        // The child reports its own best continuation; what matters here is
        // the move at this level, tagged with the child's value.
        child.mv = Some(Move::from_index(index));

        if maximizing {
            alpha = alpha.max(best.value);
            if child.value > best.value {
                best = child;
            }
        } else {
            beta = beta.min(best.value);
            if child.value < best.value {
                best = child;
            }
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// Run the search from the root with the full pruning window.
///
/// `mark` is the acting player and the maximizer for the whole search. The
/// returned value is the game-theoretic value of the position for `mark`
/// under optimal play by both sides; `mv` is `None` only when the position
/// is already terminal.
pub fn search(board: &BoardState, mark: Player) -> ScoredMove {
    let mut cells = board.cells;
    let depth = board.empty_count();
    minimax(
        &mut cells, depth, true, mark, mark, SCORE_FLOOR, SCORE_CEILING,
    )
}

/// Choose a provably optimal move for `mark`.
///
/// The caller guarantees the preconditions: the game is not over and at
/// least one cell is empty (`empty_count` > 0, consistent with the board).
/// Ties between equally optimal moves resolve to the first one encountered
/// in row-major order.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] if the search finds no move, which only
/// happens when the precondition is violated and the board is terminal.
pub fn choose_move(board: &BoardState, empty_count: usize, mark: Player) -> Result<Move> {
    let mut cells = board.cells;
    let best = minimax(
        &mut cells,
        empty_count,
        true,
        mark,
        mark,
        SCORE_FLOOR,
        SCORE_CEILING,
    );
    best.mv.ok_or(Error::NoValidMoves)
}

/// Value of an arbitrary position from `root`'s perspective.
///
/// The side to move on the board plays first; it maximizes when it is
/// `root` and minimizes otherwise.
pub fn position_value(board: &BoardState, root: Player) -> i32 {
    let mut cells = board.cells;
    let depth = board.empty_count();
    minimax(
        &mut cells,
        depth,
        board.to_move == root,
        board.to_move,
        root,
        SCORE_FLOOR,
        SCORE_CEILING,
    )
    .value
}
