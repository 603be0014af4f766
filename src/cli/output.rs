//! Output formatting for CLI

use std::fmt::Write as _;

use crate::tictactoe::{Board, Cell, SIDE};

use super::config::GameConfig;

/// Render the board as the console game shows it.
///
/// ```text
///  X | O |
/// ---|---|---
///    | X |
/// ---|---|---
///    |   | O
/// ```
pub fn render_board(board: &Board, config: &GameConfig) -> String {
    let mut out = String::new();
    for (r, row) in board.rows().iter().enumerate() {
        let symbols: Vec<char> = row.iter().map(|&cell| symbol(cell, config)).collect();
        // Writing to a String cannot fail.
        let _ = writeln!(out, " {} | {} | {}", symbols[0], symbols[1], symbols[2]);
        if r + 1 < SIDE {
            out.push_str("---|---|---\n");
        }
    }
    out
}

fn symbol(cell: Cell, config: &GameConfig) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Human => config.human_symbol,
        Cell::Computer => config.computer_symbol,
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
