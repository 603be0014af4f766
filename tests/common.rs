//! Shared helpers for the noughts test suite.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use noughts::tictactoe::{Board, Cell, GameOutcome, Player, SIDE};

/// Decode a base-3 number (0..3^9) into a board, one digit per cell in
/// row-major order: 0 empty, 1 human, 2 computer.
pub fn board_from_code(mut code: usize) -> Board {
    let mut board = Board::new();
    for index in 0..SIDE * SIDE {
        let cell = match code % 3 {
            0 => Cell::Empty,
            1 => Cell::Human,
            _ => Cell::Computer,
        };
        board.set(index / SIDE, index % SIDE, cell);
        code /= 3;
    }
    board
}

/// Every board, reachable or not
pub fn all_boards() -> impl Iterator<Item = Board> {
    (0..3_usize.pow(9)).map(board_from_code)
}

/// Every position reachable in play with the human moving first, paired
/// with the side to move.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut positions = Vec::new();

    visited.insert(Board::new());
    queue.push_back((Board::new(), Player::Human));

    while let Some((board, to_move)) = queue.pop_front() {
        positions.push((board, to_move));

        if GameOutcome::from_board(&board).is_terminal() {
            continue;
        }

        for mv in board.empty_cells() {
            let mut next = board;
            next.set(mv.row, mv.col, to_move.to_cell());
            if visited.insert(next) {
                queue.push_back((next, to_move.opponent()));
            }
        }
    }

    positions
}
