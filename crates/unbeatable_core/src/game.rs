//! The interface the search engine needs from a game.

use crate::board::Board;
use crate::error::{MoveError, SearchError};
use crate::types::{Mark, Move, Outcome};
use std::fmt;
use std::hash::Hash;

/// A finite, deterministic, perfect-information, zero-sum game for two players.
///
/// Implementors are searched in place: the engine calls [`Game::play`], recurses,
/// then calls [`Game::take_back`] with the same move before touching anything
/// else, so sibling branches never see each other's moves.
pub trait Game {
    /// A move in the game.
    type Move: Copy + Eq + fmt::Debug + fmt::Display;
    /// Identifies which player a move belongs to.
    type Mark: Copy + Eq + fmt::Debug + fmt::Display;
    /// Position key for transposition tables.
    type Key: Copy + Eq + Hash;
    /// Reported when a move precondition is violated.
    type Error: Into<SearchError>;

    /// Legal moves in a fixed, deterministic order. Empty iff no move is possible.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv` for `mark`.
    fn play(&mut self, mv: Self::Move, mark: Self::Mark) -> Result<(), Self::Error>;

    /// Reverts the most recent [`Game::play`] of `mv`.
    fn take_back(&mut self, mv: Self::Move) -> Result<(), Self::Error>;

    /// Classifies the position for the side playing `me`.
    fn outcome(&self, me: Self::Mark) -> Outcome;

    /// Key equal for positions whose game-theoretic value is equal.
    fn key(&self) -> Self::Key;
}

impl Game for Board {
    type Move = Move;
    type Mark = Mark;
    type Key = u128;
    type Error = MoveError;

    fn legal_moves(&self) -> Vec<Move> {
        Board::legal_moves(self)
    }

    fn play(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        self.apply_move(mv, mark)
    }

    fn take_back(&mut self, mv: Move) -> Result<(), MoveError> {
        self.undo_move(mv)
    }

    fn outcome(&self, me: Mark) -> Outcome {
        Board::outcome(self, me)
    }

    fn key(&self) -> u128 {
        self.canonical_key()
    }
}
