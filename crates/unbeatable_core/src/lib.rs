//! Perfect-play engine for tic-tac-toe and its N×N generalizations.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Mark`], [`Cell`], [`Move`] and the
//!   [`rules`] that classify a position as won, drawn or ongoing.
//! - **Search**: exhaustive [`Minimax`] (the reference engine) and
//!   [`AlphaBeta`] with a symmetry-aware transposition table for larger
//!   boards. Both are written against the [`Game`] trait.
//!
//! # Example
//!
//! ```
//! use unbeatable_core::{Board, Mark, Move, best_move};
//!
//! let mut board: Board = "XX./OO./...".parse()?;
//! assert_eq!(best_move(&mut board, Mark::X, Mark::O)?, Move::new(0, 2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod rules;
pub mod search;
mod symmetry;
mod types;

pub use board::Board;
pub use error::{BoardError, MoveError, ParseBoardError, SearchError};
pub use game::Game;
pub use search::{
    AlphaBeta, DRAW, Decision, LOSS, Minimax, Score, Strategy, WIN, best_move, evaluate,
};
pub use symmetry::Symmetry;
pub use types::{Cell, Mark, Move, Outcome, Role, Status};
