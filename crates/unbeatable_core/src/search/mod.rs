//! Optimal-play search.
//!
//! Scores are from the point of view of the side the engine moves for:
//! [`WIN`] if it can force a win, [`LOSS`] if the opponent can, [`DRAW`]
//! otherwise. Scores are not scaled by depth, so a quick win and a slow win
//! are worth the same.

mod alphabeta;
mod minimax;
mod tt;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;
pub use tt::{Bound, Entry, TranspositionTable};

use crate::error::SearchError;
use crate::game::Game;
use crate::types::{Outcome, Role};
use serde::{Deserialize, Serialize};

/// Value of a position for the searching side.
pub type Score = i32;

/// Searching side has a complete line.
pub const WIN: Score = 1;
/// Opponent has a complete line.
pub const LOSS: Score = -1;
/// Full board, no line.
pub const DRAW: Score = 0;

/// Score of a finished position, or `None` while play continues.
pub fn terminal_score(outcome: Outcome) -> Option<Score> {
    match outcome {
        Outcome::SelfWins => Some(WIN),
        Outcome::OpponentWins => Some(LOSS),
        Outcome::Draw => Some(DRAW),
        Outcome::Ongoing => None,
    }
}

/// Worst possible running value for the side to move.
pub(crate) fn initial_extreme(to_move: Role) -> Score {
    if to_move.is_maximizing() {
        Score::MIN
    } else {
        Score::MAX
    }
}

/// A chosen move and what the search learned about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision<M> {
    /// The move to play.
    pub mv: M,
    /// Game-theoretic value of the position after `mv`.
    pub score: Score,
    /// Positions visited during the search.
    pub nodes: u64,
}

/// A move-selection policy for the side playing `me`.
pub trait Strategy<G: Game> {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Picks a move for `me`. `game` is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`SearchError::GameOver`] if the position is already decided,
    /// [`SearchError::SameMark`] if `me == opponent`.
    fn decide(
        &mut self,
        game: &mut G,
        me: G::Mark,
        opponent: G::Mark,
    ) -> Result<Decision<G::Move>, SearchError>;
}

/// Rejects requests the engine has no answer for.
pub(crate) fn check_searchable<G: Game>(
    game: &G,
    me: G::Mark,
    opponent: G::Mark,
) -> Result<(), SearchError> {
    if me == opponent {
        return Err(SearchError::SameMark);
    }
    if game.outcome(me).is_terminal() || game.legal_moves().is_empty() {
        return Err(SearchError::GameOver);
    }
    Ok(())
}

/// Exhaustive minimax value of `game` for `me`, with `to_move` about to play.
///
/// Finished positions score immediately without recursing.
pub fn evaluate<G: Game>(
    game: &mut G,
    me: G::Mark,
    opponent: G::Mark,
    to_move: Role,
) -> Result<Score, SearchError> {
    Minimax::new().evaluate(game, me, opponent, to_move)
}

/// The optimal move for `me`, assuming `opponent` also plays optimally.
///
/// Among equally good moves the first in legal-move order wins, so the
/// result is deterministic.
pub fn best_move<G: Game>(
    game: &mut G,
    me: G::Mark,
    opponent: G::Mark,
) -> Result<G::Move, SearchError> {
    Minimax::new()
        .decide(game, me, opponent)
        .map(|decision| decision.mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Mark, Move};

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(Outcome::SelfWins), Some(WIN));
        assert_eq!(terminal_score(Outcome::OpponentWins), Some(LOSS));
        assert_eq!(terminal_score(Outcome::Draw), Some(DRAW));
        assert_eq!(terminal_score(Outcome::Ongoing), None);
    }

    #[test]
    fn test_evaluate_decided_positions() {
        let mut won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(evaluate(&mut won, Mark::X, Mark::O, Role::Opponent), Ok(WIN));
        assert_eq!(evaluate(&mut won, Mark::O, Mark::X, Role::Me), Ok(LOSS));

        let mut drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(evaluate(&mut drawn, Mark::X, Mark::O, Role::Me), Ok(DRAW));
    }

    #[test]
    fn test_evaluate_one_move_left() {
        // X to play the last cell and complete the diagonal.
        let mut board: Board = "XOX/OXO/OX.".parse().unwrap();
        assert_eq!(evaluate(&mut board, Mark::X, Mark::O, Role::Me), Ok(WIN));
        // Same cell, but the opponent plays it: no line for anyone.
        assert_eq!(
            evaluate(&mut board, Mark::X, Mark::O, Role::Opponent),
            Ok(DRAW)
        );
        assert_eq!(board, "XOX/OXO/OX.".parse().unwrap());
    }

    #[test]
    fn test_best_move_rejects_finished_game() {
        let mut board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(
            best_move(&mut board, Mark::O, Mark::X),
            Err(SearchError::GameOver)
        );
    }

    #[test]
    fn test_best_move_rejects_same_mark() {
        let mut board = Board::new();
        assert_eq!(
            best_move(&mut board, Mark::X, Mark::X),
            Err(SearchError::SameMark)
        );
    }

    /// One move, then a position that is neither decided nor playable.
    #[derive(Debug, Default)]
    struct DeadEnd {
        played: u8,
    }

    impl Game for DeadEnd {
        type Move = u8;
        type Mark = char;
        type Key = u8;
        type Error = SearchError;

        fn legal_moves(&self) -> Vec<u8> {
            if self.played == 0 { vec![0] } else { Vec::new() }
        }

        fn play(&mut self, _mv: u8, _mark: char) -> Result<(), SearchError> {
            self.played += 1;
            Ok(())
        }

        fn take_back(&mut self, _mv: u8) -> Result<(), SearchError> {
            self.played -= 1;
            Ok(())
        }

        fn outcome(&self, _me: char) -> Outcome {
            Outcome::Ongoing
        }

        fn key(&self) -> u8 {
            self.played
        }
    }

    #[test]
    fn test_stuck_position_is_an_error() {
        assert_eq!(
            Minimax::new().decide(&mut DeadEnd::default(), 'a', 'b'),
            Err(SearchError::GameOver)
        );
        assert_eq!(
            AlphaBeta::new().decide(&mut DeadEnd::default(), 'a', 'b'),
            Err(SearchError::GameOver)
        );
    }

    #[test]
    fn test_best_move_takes_win() {
        let mut board: Board = "XX./O../..O".parse().unwrap();
        assert_eq!(best_move(&mut board, Mark::X, Mark::O), Ok(Move::new(0, 2)));
    }
}
