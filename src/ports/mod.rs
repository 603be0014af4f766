//! Ports (trait boundaries) between the game core and whoever drives it.
//!
//! The game loop asks a [`Strategy`] for the computer's move instead of
//! calling the search engine directly, so tests and tools can substitute
//! their own move source.

pub mod strategy;

pub use strategy::{MinimaxStrategy, Strategy};
