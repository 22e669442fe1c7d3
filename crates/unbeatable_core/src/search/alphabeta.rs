//! Alpha-beta pruning with a transposition table.
//!
//! Returns the same move and score as [`super::Minimax`]: the root is
//! searched with alpha set to the best score so far and beta at [`WIN`], so
//! a later move can only replace the current choice by being strictly better.

use super::tt::{Bound, Entry, TranspositionTable};
use super::{
    Decision, Score, Strategy, WIN, check_searchable, initial_extreme, terminal_score,
};
use crate::error::SearchError;
use crate::game::Game;
use crate::types::Role;
use tracing::{debug, instrument};

/// Pruned exhaustive search, for boards too large for plain minimax.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta {
    nodes: u64,
    table_hits: u64,
}

impl AlphaBeta {
    /// Creates a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited during the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Transposition table hits during the last search.
    pub fn table_hits(&self) -> u64 {
        self.table_hits
    }

    #[allow(clippy::too_many_arguments)]
    fn search<G: Game>(
        &mut self,
        game: &mut G,
        table: &mut TranspositionTable<G::Key>,
        me: G::Mark,
        opponent: G::Mark,
        to_move: Role,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<Score, SearchError> {
        self.nodes += 1;
        if let Some(score) = terminal_score(game.outcome(me)) {
            return Ok(score);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let key = game.key();
        if let Some(entry) = table.probe(key, to_move) {
            match entry.bound {
                Bound::Exact => return Ok(entry.score),
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return Ok(entry.score);
            }
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
            let score = self.search(game, table, me, opponent, to_move.flip(), alpha, beta)?;
            game.take_back(mv).map_err(Into::<SearchError>::into)?;

            if to_move.is_maximizing() {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        table.store(key, to_move, Entry::classify(best, alpha_orig, beta_orig));
        Ok(best)
    }
}

impl<G: Game> Strategy<G> for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    #[instrument(skip(self, game), fields(strategy = "alpha-beta"))]
    fn decide(
        &mut self,
        game: &mut G,
        me: G::Mark,
        opponent: G::Mark,
    ) -> Result<Decision<G::Move>, SearchError> {
        check_searchable(game, me, opponent)?;
        self.nodes = 0;
        let mut table = TranspositionTable::new();

        let mut best: Option<(G::Move, Score)> = None;
        for mv in game.legal_moves() {
            let alpha = best.map_or(Score::MIN, |(_, score)| score);
            game.play(mv, me).map_err(Into::<SearchError>::into)?;
            let score = self.search(
                game,
                &mut table,
                me,
                opponent,
                Role::Opponent,
                alpha,
                WIN,
            )?;
            game.take_back(mv).map_err(Into::<SearchError>::into)?;

            // A move no better than alpha comes back as an upper bound <= alpha.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if score >= WIN {
                break;
            }
        }

        let (mv, score) = best.ok_or(SearchError::GameOver)?;
        self.table_hits = table.hits();
        debug!(
            %mv,
            score,
            nodes = self.nodes,
            table_hits = self.table_hits,
            table_size = table.len(),
            "Alpha-beta chose move"
        );
        Ok(Decision {
            mv,
            score,
            nodes: self.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::search::{DRAW, LOSS, Minimax, WIN};
    use crate::types::{Mark, Move};

    #[test]
    fn test_empty_board_matches_minimax_with_fewer_nodes() {
        let mut board = Board::new();
        let mut pruned = AlphaBeta::new();
        let mut full = Minimax::new();
        let fast = pruned.decide(&mut board, Mark::X, Mark::O).unwrap();
        let slow = full.decide(&mut board, Mark::X, Mark::O).unwrap();
        assert_eq!(fast.mv, slow.mv);
        assert_eq!(fast.score, DRAW);
        assert!(fast.nodes < slow.nodes / 10, "{} vs {}", fast.nodes, slow.nodes);
        assert!(pruned.table_hits() > 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_forced_loss_keeps_first_move() {
        let mut board: Board = "OXX/OO./...".parse().unwrap();
        let decision = AlphaBeta::new().decide(&mut board, Mark::X, Mark::O).unwrap();
        assert_eq!(decision.score, LOSS);
        assert_eq!(decision.mv, Move::new(1, 2));
    }

    #[test]
    fn test_four_by_four_immediate_win() {
        let mut board: Board = "XXX./OO../O.../....".parse().unwrap();
        let decision = AlphaBeta::new().decide(&mut board, Mark::X, Mark::O).unwrap();
        assert_eq!(decision.mv, Move::new(0, 3));
        assert_eq!(decision.score, WIN);
    }

    #[test]
    fn test_rejects_finished_game() {
        let mut board: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(
            AlphaBeta::new().decide(&mut board, Mark::X, Mark::O),
            Err(SearchError::GameOver)
        );
    }
}
