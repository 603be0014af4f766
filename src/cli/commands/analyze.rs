//! Analyze command - Show how the engine scores a position

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_kv, print_section},
    tictactoe::{
        Board, GameOutcome, Move, Player,
        lines::{evaluate_score, winning_moves},
        search::{choose_computer_move, score_moves},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Score every computer move on a board")]
pub struct AnalyzeArgs {
    /// Board in row-major order: X for the human, O for the computer, '.' for
    /// empty (whitespace ignored), e.g. "X.. .O. ..X"
    pub board: String,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

/// Scores for one position, as exported with `--json`
#[derive(Debug, Serialize)]
pub struct PositionAnalysis {
    pub board: Board,
    pub outcome: GameOutcome,
    pub static_score: i32,
    /// Empty cells that would complete a line for the computer
    pub computer_wins: Vec<Move>,
    /// Empty cells that would complete a line for the human
    pub human_threats: Vec<Move>,
    pub candidates: Vec<CandidateScore>,
    pub chosen: Option<Move>,
}

#[derive(Debug, Serialize)]
pub struct CandidateScore {
    /// Cell number as typed at the prompt (1-9)
    pub cell: usize,
    pub row: usize,
    pub col: usize,
    pub score: i32,
}

/// Score every empty cell of the board from the computer's side.
///
/// # Errors
///
/// Returns error if the board string cannot be parsed.
pub fn analyze_position(board_str: &str) -> crate::Result<PositionAnalysis> {
    let mut board = Board::from_string(board_str)?;
    let outcome = GameOutcome::from_board(&board);

    let (computer_wins, human_threats, candidates, chosen) = if outcome.is_terminal() {
        (Vec::new(), Vec::new(), Vec::new(), None)
    } else {
        let computer_wins = winning_moves(&board, Player::Computer);
        let human_threats = winning_moves(&board, Player::Human);
        let candidates = score_moves(&mut board)
            .into_iter()
            .map(|(mv, score)| CandidateScore {
                cell: mv.index() + 1,
                row: mv.row,
                col: mv.col,
                score,
            })
            .collect();
        let chosen = choose_computer_move(&mut board)?;
        (computer_wins, human_threats, candidates, Some(chosen))
    };

    Ok(PositionAnalysis {
        board,
        outcome,
        static_score: evaluate_score(&board),
        computer_wins,
        human_threats,
        candidates,
        chosen,
    })
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let analysis = analyze_position(&args.board)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Position");
    println!("{}", analysis.board);
    print_kv("Outcome", &format!("{:?}", analysis.outcome));
    print_kv("Static score", &analysis.static_score.to_string());

    if analysis.outcome.is_terminal() {
        println!("\n  (position is terminal)");
        return Ok(());
    }

    print_kv("Computer wins at", &cell_list(&analysis.computer_wins));
    print_kv("Human threatens", &cell_list(&analysis.human_threats));

    print_section("Computer candidates");
    for candidate in &analysis.candidates {
        print_kv(
            &format!("cell {} (r{}, c{})", candidate.cell, candidate.row, candidate.col),
            &candidate.score.to_string(),
        );
    }

    match analysis.chosen {
        Some(mv) => print_kv("Chosen", &format!("cell {} {mv}", mv.index() + 1)),
        None => bail!("engine found no move on a non-terminal board"),
    }

    Ok(())
}

fn cell_list(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "-".to_string();
    }
    moves
        .iter()
        .map(|mv| (mv.index() + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_blocking_position() {
        let analysis = analyze_position("XX. .O. ...").unwrap();
        assert_eq!(analysis.outcome, GameOutcome::InProgress);
        assert_eq!(analysis.candidates.len(), 6);
        assert_eq!(analysis.chosen, Some(Move::new(0, 2)));
        assert_eq!(analysis.candidates[0].cell, 3);
        assert_eq!(analysis.candidates[0].score, 0);
        assert!(analysis.candidates[1..].iter().all(|c| c.score == -10));
        assert_eq!(analysis.human_threats, vec![Move::new(0, 2)]);
        assert!(analysis.computer_wins.is_empty());
    }

    #[test]
    fn test_analyze_reports_immediate_wins() {
        // X X .
        // O O .
        // X . .
        let analysis = analyze_position("XX. OO. X..").unwrap();
        assert_eq!(analysis.computer_wins, vec![Move::new(1, 2)]);
        assert_eq!(analysis.human_threats, vec![Move::new(0, 2)]);
        assert_eq!(analysis.chosen, Some(Move::new(1, 2)));
        assert_eq!(cell_list(&analysis.computer_wins), "6");
        assert_eq!(cell_list(&[]), "-");
    }

    #[test]
    fn test_analyze_terminal_position() {
        let analysis = analyze_position("XXX OO. ...").unwrap();
        assert_eq!(analysis.outcome, GameOutcome::HumanWin);
        assert_eq!(analysis.static_score, -10);
        assert!(analysis.candidates.is_empty());
        assert!(analysis.human_threats.is_empty());
        assert!(analysis.chosen.is_none());
    }

    #[test]
    fn test_analyze_rejects_bad_board() {
        assert!(analyze_position("XX").is_err());
    }

    #[test]
    fn test_analysis_serializes() {
        let analysis = analyze_position("X.. .O. ..X").unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["candidates"].as_array().unwrap().len(), 6);
    }
}
