//! Console tic-tac-toe against an exhaustive minimax opponent
//!
//! This crate provides:
//! - The board model, line evaluation and move enumeration
//! - An unpruned minimax search that picks the computer's move
//! - A game state machine enforcing alternating turns
//! - The interactive console session and position analysis behind the
//!   `noughts` binary

pub mod cli;
pub mod error;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Move, Player};
