//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod search;

pub use board::{Board, Cell, Move, Player, SIDE, initialise_board};
pub use game::{Game, GameOutcome, PlayedMove};
pub use lines::{WINNING_LINES, evaluate_score, has_won, winning_moves};
pub use search::{choose_computer_move, minimax, score_moves};
