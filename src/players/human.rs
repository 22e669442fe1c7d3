//! Human player reading coordinates from the console.

use super::Player;
use crate::console::Terminal;
use anyhow::{Result, bail};
use tracing::{debug, instrument};
use unbeatable_core::{Board, Mark, Move};

/// Why an entered coordinate pair was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// One of the answers was not a number.
    #[display("Please enter valid numbers.")]
    NotANumber,
    /// The coordinate lies outside the board.
    #[display("Out of bounds, try again.")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[display("That spot is already taken.")]
    Taken,
}

/// Checks a row and column typed by the player against the board.
#[instrument(skip(board))]
pub fn parse_move(board: &Board, row: &str, col: &str) -> Result<Move, InputError> {
    let (Ok(row), Ok(col)) = (row.trim().parse::<i64>(), col.trim().parse::<i64>()) else {
        return Err(InputError::NotANumber);
    };
    let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
        return Err(InputError::OutOfBounds);
    };
    let mv = Move::new(row, col);
    match board.get(mv) {
        None => Err(InputError::OutOfBounds),
        Some(cell) if !cell.is_empty() => Err(InputError::Taken),
        Some(_) => Ok(mv),
    }
}

/// A person entering a row and a column on each turn.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("You")
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, board, term), fields(player = %self.name))]
    fn choose(&mut self, board: &Board, _mark: Mark, term: &mut dyn Terminal) -> Result<Move> {
        let last = board.size() - 1;
        loop {
            let Some(row) = term.ask(&format!("Enter row (0-{last}): "))? else {
                bail!("Input closed while waiting for a move");
            };
            let Some(col) = term.ask(&format!("Enter col (0-{last}): "))? else {
                bail!("Input closed while waiting for a move");
            };

            match parse_move(board, &row, &col) {
                Ok(mv) => {
                    debug!(%mv, "Human chose move");
                    return Ok(mv);
                }
                Err(err) => {
                    debug!(%err, row = %row, col = %col, "Rejected input");
                    term.say(&err.to_string())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn turn_message(&self) -> String {
        "Your turn.".to_string()
    }

    fn victory_message(&self) -> String {
        "You win!".to_string()
    }
}
