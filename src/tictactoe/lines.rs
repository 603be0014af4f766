//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Player};

/// Score of a board the computer has won
pub const COMPUTER_WIN_SCORE: i32 = 10;

/// Score of a board the human has won
pub const HUMAN_WIN_SCORE: i32 = -10;

/// Winning lines as (row, col) coordinates on the 3x3 board
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Check if a player has three in a row
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.get(row, col) == target))
}

/// Static score of a board from the computer's point of view.
///
/// `+10` if the computer has a line, `-10` if the human has one, `0`
/// otherwise. Boards where both sides hold a line cannot arise from
/// alternating play and are not checked for.
pub fn evaluate_score(board: &Board) -> i32 {
    if has_won(board, Player::Computer) {
        return COMPUTER_WIN_SCORE;
    }
    if has_won(board, Player::Human) {
        return HUMAN_WIN_SCORE;
    }
    0
}

/// Positions that would immediately complete a line for the player
pub fn winning_moves(board: &Board, player: Player) -> Vec<super::Move> {
    let target = player.to_cell();
    let mut moves = Vec::new();
    for mv in board.empty_cells() {
        let completes = WINNING_LINES.iter().any(|line| {
            line.contains(&(mv.row, mv.col))
                && line
                    .iter()
                    .filter(|&&cell| cell != (mv.row, mv.col))
                    .all(|&(row, col)| board.get(row, col) == target)
        });
        if completes {
            moves.push(mv);
        }
    }
    moves
}
