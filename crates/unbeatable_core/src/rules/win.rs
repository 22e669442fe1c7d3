//! Win detection.

use crate::board::Board;
use crate::types::{Cell, Mark, Move};

/// One of the `2N + 2` lines a player can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A full row.
    Row(usize),
    /// A full column.
    Col(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Coordinates covered by this line on a board of the given size.
    pub fn cells(self, size: usize) -> impl Iterator<Item = Move> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Move::new(row, i),
            Line::Col(col) => Move::new(i, col),
            Line::Diagonal => Move::new(i, i),
            Line::AntiDiagonal => Move::new(i, size - 1 - i),
        })
    }
}

/// All winning lines of a board: rows, then columns, then both diagonals.
pub fn lines(size: usize) -> impl Iterator<Item = Line> {
    (0..size)
        .map(Line::Row)
        .chain((0..size).map(Line::Col))
        .chain([Line::Diagonal, Line::AntiDiagonal])
}

/// Returns the mark that fills `line`, if one does.
fn line_owner(board: &Board, line: Line) -> Option<Mark> {
    let mut cells = line.cells(board.size()).map(|mv| board.get(mv));
    let first = cells.next()??.mark()?;
    cells
        .all(|cell| cell == Some(Cell::Occupied(first)))
        .then_some(first)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first completed line found. A reachable
/// position never has completed lines for both marks.
pub fn check_winner(board: &Board) -> Option<Mark> {
    lines(board.size()).find_map(|line| line_owner(board, line))
}
