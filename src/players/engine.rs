//! Computer player backed by a search strategy.

use super::Player;
use crate::console::Terminal;
use anyhow::Result;
use tracing::{info, instrument};
use unbeatable_core::{Board, Mark, Move, Strategy};

/// Plays the move its strategy considers optimal.
pub struct EnginePlayer {
    name: String,
    strategy: Box<dyn Strategy<Board>>,
}

impl EnginePlayer {
    /// Creates an engine player using `strategy`.
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy<Board>>) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

impl Player for EnginePlayer {
    #[instrument(skip(self, board, _term), fields(player = %self.name, strategy = self.strategy.name()))]
    fn choose(&mut self, board: &Board, mark: Mark, _term: &mut dyn Terminal) -> Result<Move> {
        // The search plays and takes back moves in place; keep the caller's board untouched.
        let mut scratch = board.clone();
        let decision = self.strategy.decide(&mut scratch, mark, mark.opponent())?;
        info!(
            mv = %decision.mv,
            score = decision.score,
            nodes = decision.nodes,
            "Engine chose move"
        );
        Ok(decision.mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
