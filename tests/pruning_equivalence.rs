//! Pruning must be a pure performance optimization: the engine's chosen
//! move is compared against an independent unpruned minimax on every
//! reachable non-terminal board.

use std::collections::HashSet;

use oxo::{choose_move, lines, BoardState, Cell, Player};

const WIN: i32 = 10;
const LOSS: i32 = -10;
const DRAW: i32 = 0;

/// Reference minimax without a pruning window. Enumeration order and the
/// strict-inequality update rule mirror the engine, so any divergence in
/// the chosen move can only come from pruning.
fn plain_minimax(
    cells: &mut [Cell; 9],
    depth: usize,
    maximizing: bool,
    to_place: Player,
    root: Player,
) -> (Option<usize>, i32) {
    let terminal = match lines::winner(cells) {
        Some(winner) if winner == root => Some(WIN),
        Some(_) => Some(LOSS),
        None if depth == 0 => Some(DRAW),
        None => None,
    };
    if let Some(value) = terminal {
        return (None, value);
    }

    let mut best = (None, if maximizing { -100 } else { 100 });

    for index in 0..9 {
        if cells[index] != Cell::Empty {
            continue;
        }
        cells[index] = to_place.to_cell();
        let (_, value) = plain_minimax(cells, depth - 1, !maximizing, to_place.opponent(), root);
        cells[index] = Cell::Empty;

        if maximizing {
            if value > best.1 {
                best = (Some(index), value);
            }
        } else if value < best.1 {
            best = (Some(index), value);
        }
    }

    best
}

fn reachable_states() -> Vec<BoardState> {
    let mut seen = HashSet::new();
    let mut states = Vec::new();
    let mut stack = vec![BoardState::new()];

    while let Some(state) = stack.pop() {
        if !seen.insert(state.encode()) {
            continue;
        }
        for mv in state.legal_moves() {
            stack.push(state.make_move(mv).unwrap());
        }
        states.push(state);
    }

    states
}

#[test]
fn alpha_beta_matches_plain_minimax_everywhere() {
    for state in reachable_states() {
        if state.is_terminal() {
            continue;
        }

        let mover = state.to_move;
        let mut cells = state.cells;
        let (reference, reference_value) =
            plain_minimax(&mut cells, state.empty_count(), true, mover, mover);

        let pruned = oxo::search(&state, mover);
        let chosen = choose_move(&state, state.empty_count(), mover).unwrap();

        assert_eq!(
            Some(chosen.index()),
            reference,
            "pruning changed the move in {}",
            state.encode()
        );
        assert_eq!(
            pruned.value,
            reference_value,
            "pruning changed the value in {}",
            state.encode()
        );
    }
}
