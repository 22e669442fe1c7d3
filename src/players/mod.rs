//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use crate::console::Terminal;
use anyhow::Result;
use unbeatable_core::{Board, Mark, Move};

/// Something that can pick moves: a person at the console or the engine.
pub trait Player {
    /// Chooses a move for `mark` on `board`. The move must be legal.
    fn choose(&mut self, board: &Board, mark: Mark, term: &mut dyn Terminal) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Announcement printed before this player moves.
    fn turn_message(&self) -> String {
        format!("{}'s turn...", self.name())
    }

    /// Announcement printed when this player wins.
    fn victory_message(&self) -> String {
        format!("{} wins!", self.name())
    }
}
