//! Exhaustive minimax search for the computer's move
//!
//! The search explores the full remaining game tree with no pruning,
//! memoization or depth limit. A tic-tac-toe tree has at most 9 plies, so
//! the worst case (an empty board) is a few hundred thousand leaves.
//!
//! Every speculative mark is placed on the caller's board and cleared again
//! before the next candidate is tried, so the board is unchanged once a
//! search function returns.

use tracing::debug;

use super::{
    Board, Move, Player,
    lines::{COMPUTER_WIN_SCORE, HUMAN_WIN_SCORE, evaluate_score},
};

/// Starting value for a maximizing node, below any reachable score
const MAX_SENTINEL: i32 = -1000;

/// Starting value for a minimizing node, above any reachable score
const MIN_SENTINEL: i32 = 1000;

/// Score a position assuming optimal play by both sides.
///
/// The computer maximizes and the human minimizes. A won position scores
/// `+10`/`-10` regardless of how many plies it took to reach; a full board
/// without a line scores `0`.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    let score = evaluate_score(board);
    if score == COMPUTER_WIN_SCORE || score == HUMAN_WIN_SCORE {
        return score;
    }

    if board.is_full() {
        return 0;
    }

    let (mark, mut best) = if is_maximizing {
        (Player::Computer.to_cell(), MAX_SENTINEL)
    } else {
        (Player::Human.to_cell(), MIN_SENTINEL)
    };

    for mv in board.empty_cells() {
        board.set(mv.row, mv.col, mark);
        let value = minimax(board, !is_maximizing);
        board.clear(mv.row, mv.col);

        if (is_maximizing && value > best) || (!is_maximizing && value < best) {
            best = value;
        }
    }

    best
}

/// Minimax score of every empty cell if the computer played there next,
/// in row-major order.
pub fn score_moves(board: &mut Board) -> Vec<(Move, i32)> {
    let mark = Player::Computer.to_cell();
    let mut scored = Vec::new();

    for mv in board.empty_cells() {
        board.set(mv.row, mv.col, mark);
        let value = minimax(board, false);
        board.clear(mv.row, mv.col);

        debug!(row = mv.row, col = mv.col, score = value, "scored candidate");
        scored.push((mv, value));
    }

    scored
}

/// Pick the computer's move.
///
/// Returns the first candidate in row-major order whose score strictly
/// exceeds every earlier one, so among equally scored cells the earliest
/// wins.
///
/// # Errors
///
/// Returns [`crate::Error::NoValidMoves`] if the board is full.
pub fn choose_computer_move(board: &mut Board) -> Result<Move, crate::Error> {
    let mut best_value = MAX_SENTINEL;
    let mut best_move = None;

    for (mv, value) in score_moves(board) {
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }

    let chosen = best_move.ok_or(crate::Error::NoValidMoves)?;
    debug!(
        row = chosen.row,
        col = chosen.col,
        score = best_value,
        "chose computer move"
    );
    Ok(chosen)
}
