//! Game rules for N-in-a-row on an N×N board.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the search engine can ask structural questions without owning any
//! rule logic itself.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, lines};

use crate::board::Board;
use crate::types::{Mark, Outcome, Status};

/// Absolute status of the board: a winner, a draw, or still in progress.
pub fn status(board: &Board) -> Status {
    if let Some(mark) = check_winner(board) {
        Status::Won(mark)
    } else if is_draw(board) {
        Status::Draw
    } else {
        Status::InProgress
    }
}

/// Classifies the board from the point of view of `me`.
pub fn outcome(board: &Board, me: Mark) -> Outcome {
    status(board).relative_to(me)
}
