//! CLI infrastructure for the noughts console game
//!
//! This module provides the interactive play loop, position analysis and
//! the configuration and output helpers they share.

pub mod commands;
pub mod config;
pub mod output;
