//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    board::{Board, Move, Player},
    lines::has_won,
};
use crate::ports::Strategy;

/// A move together with the side that played it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub player: Player,
    pub position: Move,
}

/// Outcome of a game, derived from the board after every half-move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    HumanWin,
    ComputerWin,
    Draw,
    InProgress,
}

impl GameOutcome {
    /// Derive the outcome from board contents.
    ///
    /// The human line is checked first, matching the order the game loop
    /// checks after each half-move.
    pub fn from_board(board: &Board) -> Self {
        if has_won(board, Player::Human) {
            GameOutcome::HumanWin
        } else if has_won(board, Player::Computer) {
            GameOutcome::ComputerWin
        } else if board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// A single game: the board, whose turn it is, and the moves played so far.
///
/// The human always moves first and turns strictly alternate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<PlayedMove>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::Human,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_board(&self.board)
    }

    /// Apply the human's move given as a row-major index (0-8).
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidPosition`] if the index is above 8
    /// - [`crate::Error::CellOccupied`] if the cell already holds a mark
    /// - [`crate::Error::NotYourTurn`] if the computer is due to move
    /// - [`crate::Error::GameOver`] if the game has already finished
    pub fn apply_human_move(&mut self, index: usize) -> Result<Move, crate::Error> {
        let mv = Move::from_index(index)?;
        self.apply(Player::Human, mv)?;
        Ok(mv)
    }

    /// Ask the strategy for the computer's move and apply it.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's error, and returns the same turn and
    /// legality errors as [`Game::apply_human_move`].
    pub fn play_computer_move(
        &mut self,
        strategy: &mut dyn Strategy,
    ) -> Result<Move, crate::Error> {
        self.ensure_turn(Player::Computer)?;
        let mv = strategy.select_move(&self.board)?;
        self.apply(Player::Computer, mv)?;
        Ok(mv)
    }

    fn ensure_turn(&self, player: Player) -> Result<(), crate::Error> {
        if self.outcome().is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if self.to_move != player {
            return Err(crate::Error::NotYourTurn {
                player: player.name(),
            });
        }
        Ok(())
    }

    fn apply(&mut self, player: Player, mv: Move) -> Result<(), crate::Error> {
        self.ensure_turn(player)?;
        if !self.board.is_empty_at(mv) {
            return Err(crate::Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        self.board.set(mv.row, mv.col, player.to_cell());
        self.moves.push(PlayedMove {
            player,
            position: mv,
        });
        self.to_move = player.opponent();
        debug!(player = player.name(), row = mv.row, col = mv.col, "applied move");

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(?outcome, plies = self.moves.len(), "game finished");
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
