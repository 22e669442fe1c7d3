//! Error types for board operations and search.

use crate::types::{Mark, Move};

/// Error returned when a move cannot be applied to or taken back from a board.
///
/// Inside the search these indicate a bug in the caller, never a
/// recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("Move {_0} is outside a {_1}x{_1} board")]
    OutOfBounds(Move, usize),

    /// The cell is already occupied.
    #[display("Cell {_0} is already occupied by {_1}")]
    Occupied(Move, Mark),

    /// Taking back a move from a cell that holds no mark.
    #[display("Cell {_0} is empty, nothing to take back")]
    NotOccupied(Move),
}

impl std::error::Error for MoveError {}

/// Error returned when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Requested side length is not supported.
    #[display("Board size {_0} is not supported (expected {_1}..={_2})")]
    UnsupportedSize(usize, usize, usize),
}

impl std::error::Error for BoardError {}

/// Error returned when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character other than `X`, `O`, `.`, `_` or `-` was found.
    #[display("Unexpected character {_0:?} in board")]
    InvalidCell(char),

    /// Rows are not all the same length, or there are not as many rows as columns.
    #[display("Board is not square: {_0} rows, row lengths {_1:?}")]
    NotSquare(usize, Vec<usize>),

    /// The parsed dimensions are not a supported board size.
    #[display("{_0}")]
    Size(BoardError),
}

impl std::error::Error for ParseBoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseBoardError::Size(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for ParseBoardError {
    fn from(err: BoardError) -> Self {
        ParseBoardError::Size(err)
    }
}

/// Error returned by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SearchError {
    /// Asked for a move in a position that is already decided.
    #[display("Cannot search a finished game")]
    #[from(ignore)]
    GameOver,

    /// The self and opponent marks are the same.
    #[display("Self and opponent must use different marks")]
    #[from(ignore)]
    SameMark,

    /// A board operation failed during search.
    #[display("Board precondition violated during search: {_0}")]
    Move(MoveError),
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Move(err) => Some(err),
            _ => None,
        }
    }
}
