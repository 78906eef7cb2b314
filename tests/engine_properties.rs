//! Engine guarantees verified across the full reachable state space.

use std::collections::HashSet;

use oxo::{choose_move, lines, BoardState, Game, GameOutcome, Move, Player};

/// Every board state reachable from the standard opening, including
/// terminal ones, deduplicated by encoding.
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
fn optimal_move_sweep_over_reachable_states() {
    let states = reachable_states();
    assert!(
        states.len() > 5000,
        "state enumeration looks incomplete: {} states",
        states.len()
    );

    for state in states {
        if state.is_terminal() {
            continue;
        }

        let mover = state.to_move;
        let chosen = choose_move(&state, state.empty_count(), mover).unwrap();

        assert!(
            state.is_empty(chosen),
            "chose occupied cell {chosen:?} in {}",
            state.encode()
        );

        let own_wins = lines::winning_moves(&state.cells, mover);
        if !own_wins.is_empty() {
            assert!(
                own_wins.contains(&chosen),
                "missed immediate win in {}: chose {chosen:?}, wins {own_wins:?}",
                state.encode()
            );
            continue;
        }

        // With no win of its own, a single opposing threat, and the game
        // still savable, the engine must block: any other move hands the
        // opponent an immediate win, which cannot match a value above LOSS.
        // In positions that are lost anyway every move scores the same, so
        // no particular cell is required there.
        let opponent_wins = lines::winning_moves(&state.cells, mover.opponent());
        if opponent_wins.len() == 1 && oxo::search(&state, mover).value > oxo::LOSS {
            assert_eq!(
                chosen,
                opponent_wins[0],
                "failed to block in {}",
                state.encode()
            );
        }
    }
}

#[test]
fn takes_the_winning_column() {
    // X - O
    // X - O
    // - - -   X to move completes the left column.
    let board = BoardState::from_string("X.OX.O...").unwrap();
    let mv = choose_move(&board, board.empty_count(), Player::X).unwrap();
    assert_eq!(mv, Move { row: 2, col: 0 });
}

#[test]
fn blocks_the_single_threat() {
    // X X -
    // O - -
    // - - -   O to move must block at (0, 2).
    let board = BoardState::from_string("XX.O....._O").unwrap();
    let mv = choose_move(&board, board.empty_count(), Player::O).unwrap();
    assert_eq!(mv, Move { row: 0, col: 2 });
}

#[test]
fn avoids_the_losing_corners() {
    // - - X
    // - O -
    // X - -   Taking either free corner on the X diagonal loses for O.
    let board = BoardState::from_string("..X.O.X.._O").unwrap();
    let mv = choose_move(&board, board.empty_count(), Player::O).unwrap();
    assert_ne!(mv, Move { row: 0, col: 0 });
    assert_ne!(mv, Move { row: 2, col: 2 });
}

#[test]
fn single_empty_cell_is_returned_regardless_of_value() {
    let board = BoardState::from_string("XOXXOOOX._X").unwrap();
    let mv = choose_move(&board, 1, Player::X).unwrap();
    assert_eq!(mv, Move { row: 2, col: 2 });
}

#[test]
fn engine_self_play_always_draws() {
    let mut game = Game::new();
    while !game.is_over() {
        let board = *game.board();
        let mv = choose_move(&board, board.empty_count(), board.to_move).unwrap();
        game.play(mv).unwrap();
    }
    assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    assert_eq!(game.move_count(), 9);
}

#[test]
fn caller_board_is_untouched_by_the_search() {
    let board = BoardState::from_string("X.OX.O...").unwrap();
    let snapshot = board;
    let _ = choose_move(&board, board.empty_count(), Player::X).unwrap();
    assert_eq!(board, snapshot);
}
