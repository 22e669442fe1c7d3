//! Core domain types for tic-tac-toe style games.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    derive_more::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used on rendered boards.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns `true` if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Single-character symbol used on rendered boards.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }
}

/// Which side a mark or a turn belongs to, from the engine's point of view.
///
/// `Me` is the maximizer; `Opponent` is the minimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The side the engine is choosing moves for.
    Me,
    /// The other side.
    Opponent,
}

impl Role {
    /// Returns the role that moves next.
    pub fn flip(self) -> Self {
        match self {
            Role::Me => Role::Opponent,
            Role::Opponent => Role::Me,
        }
    }

    /// Returns `true` for the maximizing side.
    pub fn is_maximizing(self) -> bool {
        matches!(self, Role::Me)
    }
}

/// A board coordinate, identifying the cell a mark is placed in.
///
/// Ordering is row-major, which is also the order moves are generated in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row index, starting at 0 at the top.
    pub row: usize,
    /// Column index, starting at 0 on the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Result of a position, seen from one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and there are empty cells left.
    Ongoing,
    /// The searching side has a complete line.
    SelfWins,
    /// The other side has a complete line.
    OpponentWins,
    /// Full board with no complete line.
    Draw,
}

impl Outcome {
    /// Returns `true` once the game has concluded.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Absolute state of a game, independent of who is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl Status {
    /// Returns `true` if the game is over.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Converts to an [`Outcome`] relative to `me`.
    pub fn relative_to(self, me: Mark) -> Outcome {
        match self {
            Status::InProgress => Outcome::Ongoing,
            Status::Draw => Outcome::Draw,
            Status::Won(mark) if mark == me => Outcome::SelfWins,
            Status::Won(_) => Outcome::OpponentWins,
        }
    }
}
