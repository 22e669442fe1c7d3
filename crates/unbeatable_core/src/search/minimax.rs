//! Exhaustive, unpruned minimax.

use super::{Decision, Score, Strategy, check_searchable, initial_extreme, terminal_score};
use crate::error::SearchError;
use crate::game::Game;
use crate::types::Role;
use tracing::{debug, instrument};

/// Visits every continuation of the position.
///
/// Holds nothing between calls except a node counter that is reset by
/// [`Strategy::decide`].
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited since the last reset.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `game` for `me`, with `to_move` about to play.
    ///
    /// Each move is played, scored recursively and taken back before the
    /// next one is tried.
    pub fn evaluate<G: Game>(
        &mut self,
        game: &mut G,
        me: G::Mark,
        opponent: G::Mark,
        to_move: Role,
    ) -> Result<Score, SearchError> {
        self.nodes += 1;
        if let Some(score) = terminal_score(game.outcome(me)) {
            return Ok(score);
        }

        let mark = match to_move {
            Role::Me => me,
            Role::Opponent => opponent,
        };
        let moves = game.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::GameOver);
        }
        let mut best = initial_extreme(to_move);
        for mv in moves {
            game.play(mv, mark).map_err(Into::<SearchError>::into)?;
            let score = self.evaluate(game, me, opponent, to_move.flip())?;
            game.take_back(mv).map_err(Into::<SearchError>::into)?;

            best = if to_move.is_maximizing() {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }
}

impl<G: Game> Strategy<G> for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip(self, game), fields(strategy = "minimax"))]
    fn decide(
        &mut self,
        game: &mut G,
        me: G::Mark,
        opponent: G::Mark,
    ) -> Result<Decision<G::Move>, SearchError> {
        check_searchable(game, me, opponent)?;
        self.nodes = 0;

        let mut best: Option<(G::Move, Score)> = None;
        for mv in game.legal_moves() {
            game.play(mv, me).map_err(Into::<SearchError>::into)?;
            let score = self.evaluate(game, me, opponent, Role::Opponent)?;
            game.take_back(mv).map_err(Into::<SearchError>::into)?;

            // Strict comparison keeps the earliest of equally good moves.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or(SearchError::GameOver)?;
        debug!(%mv, score, nodes = self.nodes, "Minimax chose move");
        Ok(Decision {
            mv,
            score,
            nodes: self.nodes,
        })
    }
}
