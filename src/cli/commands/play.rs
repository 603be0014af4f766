//! Play command - Interactive console game against the minimax engine

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::{config::GameConfig, output::render_board},
    ports::{MinimaxStrategy, Strategy},
    tictactoe::{Game, GameOutcome, search::score_moves},
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe against the computer")]
pub struct PlayArgs {
    /// Path to a JSON config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the computer's candidate scores before each of its moves
    #[arg(long)]
    pub show_scores: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if args.show_scores {
        config.show_scores = true;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), config);
    let outcomes = session.run()?;
    info!(games = outcomes.len(), "session ended");
    Ok(())
}

/// The line-based game loop over any input and output stream.
///
/// Invalid or occupied moves are reported and re-prompted without limit.
/// End of input ends the session cleanly at whatever prompt it occurs.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    strategy: Box<dyn Strategy>,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
            strategy: Box::new(MinimaxStrategy),
        }
    }

    /// Replace the computer's move source
    pub fn with_strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Consume the session and hand back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play games until the user declines another or input runs out.
    ///
    /// Returns the outcome of every completed game.
    pub fn run(&mut self) -> crate::Result<Vec<GameOutcome>> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;

        let mut outcomes = Vec::new();
        loop {
            let Some(outcome) = self.play_game()? else {
                break;
            };
            outcomes.push(outcome);

            write!(self.output, "Play again? (y/n): ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if answer.trim() == "y" => continue,
                _ => break,
            }
        }

        Ok(outcomes)
    }

    /// Play a single game. Returns `None` if input ends mid-game.
    pub fn play_game(&mut self) -> crate::Result<Option<GameOutcome>> {
        let mut game = Game::new();

        loop {
            self.show_board(&game)?;
            if !self.human_turn(&mut game)? {
                return Ok(None);
            }
            if let Some(outcome) = self.finish_if_over(&game)? {
                return Ok(Some(outcome));
            }

            if self.config.show_scores {
                self.show_scores(&game)?;
            }
            let mv = game.play_computer_move(self.strategy.as_mut())?;
            debug!(strategy = self.strategy.name(), %mv, "computer moved");
            if let Some(outcome) = self.finish_if_over(&game)? {
                return Ok(Some(outcome));
            }
        }
    }

    /// Prompt until a legal move is entered. Returns `false` on end of input.
    fn human_turn(&mut self, game: &mut Game) -> crate::Result<bool> {
        loop {
            write!(self.output, "Enter your move (1-9): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            let index = match line.trim().parse::<usize>() {
                Ok(n) if (1..=9).contains(&n) => n - 1,
                _ => {
                    writeln!(self.output, "Invalid move. Try again.")?;
                    continue;
                }
            };

            match game.apply_human_move(index) {
                Ok(_) => return Ok(true),
                Err(crate::Error::CellOccupied { .. }) => {
                    writeln!(self.output, "Cell already occupied. Try again.")?;
                }
                Err(crate::Error::InvalidPosition { .. }) => {
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn finish_if_over(&mut self, game: &Game) -> crate::Result<Option<GameOutcome>> {
        let outcome = game.outcome();
        let message = match outcome {
            GameOutcome::InProgress => return Ok(None),
            GameOutcome::HumanWin => "You win!",
            GameOutcome::ComputerWin => "Computer wins!",
            GameOutcome::Draw => "It's a draw!",
        };
        self.show_board(game)?;
        writeln!(self.output, "{message}")?;
        Ok(Some(outcome))
    }

    fn show_board(&mut self, game: &Game) -> crate::Result<()> {
        write!(self.output, "{}", render_board(game.board(), &self.config))?;
        Ok(())
    }

    fn show_scores(&mut self, game: &Game) -> crate::Result<()> {
        let mut working = *game.board();
        let scored: Vec<String> = score_moves(&mut working)
            .into_iter()
            .map(|(mv, score)| format!("{}:{score}", mv.index() + 1))
            .collect();
        writeln!(self.output, "Computer scores: {}", scored.join(" "))?;
        Ok(())
    }

    fn read_line(&mut self) -> crate::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| crate::Error::Io {
                operation: "read from input".to_string(),
                source,
            })?;
        if read == 0 { Ok(None) } else { Ok(Some(line)) }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(input: &str) -> (Vec<GameOutcome>, String) {
        let mut session =
            ConsoleSession::new(Cursor::new(input.to_string()), Vec::new(), GameConfig::default());
        let outcomes = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (outcomes, output)
    }

    #[test]
    fn test_end_of_input_before_first_move() {
        let (outcomes, output) = run_session("");
        assert!(outcomes.is_empty());
        assert!(output.starts_with("Welcome to Tic-Tac-Toe!\n"));
        assert!(output.ends_with("Enter your move (1-9): "));
    }

    #[test]
    fn test_invalid_entries_reprompt() {
        let (_, output) = run_session("0\n10\nabc\n\n");
        assert_eq!(output.matches("Invalid move. Try again.").count(), 4);
        assert_eq!(output.matches("Enter your move (1-9): ").count(), 5);
    }

    #[test]
    fn test_occupied_cell_reprompts() {
        // Human takes the centre, then tries it again.
        let (_, output) = run_session("5\n5\n");
        assert!(output.contains("Cell already occupied. Try again."));
    }
}
