//! Strategy port - abstraction over how the computer picks its move

use crate::{
    Result,
    tictactoe::{Board, Move, search::choose_computer_move},
};

/// Something that chooses the computer's next move.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::{MinimaxStrategy, Strategy},
///     tictactoe::{Board, Move},
/// };
///
/// let board = Board::from_string("XX. .O. ...").unwrap();
/// let mut engine = MinimaxStrategy;
/// assert_eq!(engine.select_move(&board).unwrap(), Move::new(0, 2));
/// ```
pub trait Strategy {
    /// Select a move for the computer on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (full board).
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Get the strategy's name.
    ///
    /// Used for identification in logging.
    fn name(&self) -> &str;
}

/// The exhaustive minimax engine
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        // Search on a working copy; the caller's board is never touched.
        let mut working = *board;
        choose_computer_move(&mut working)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
