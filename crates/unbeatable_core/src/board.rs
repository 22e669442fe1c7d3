//! The N×N board.

use crate::error::{BoardError, MoveError, ParseBoardError};
use crate::rules;
use crate::types::{Cell, Mark, Move, Outcome, Status};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, warn};

/// Square board, stored row-major.
///
/// Mutated only through [`Board::apply_move`] and reverted through
/// [`Board::undo_move`]; an apply followed by the matching undo leaves the
/// board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Smallest supported side length.
    pub const MIN_SIZE: usize = 1;
    /// Largest supported side length. Keeps a two-bit-per-cell encoding within a `u128`.
    pub const MAX_SIZE: usize = 8;
    /// Classic tic-tac-toe.
    pub const DEFAULT_SIZE: usize = 3;

    /// Creates an empty 3×3 board.
    pub fn new() -> Self {
        Self::empty(Self::DEFAULT_SIZE)
    }

    /// Creates an empty board with `size` rows and columns.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize(
                size,
                Self::MIN_SIZE,
                Self::MAX_SIZE,
            ));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, mv: Move) -> Option<usize> {
        (mv.row < self.size && mv.col < self.size).then(|| mv.row * self.size + mv.col)
    }

    /// Returns the cell at `mv`, or `None` if it lies outside the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.index(mv).map(|idx| self.cells[idx])
    }

    /// Checks if the cell at `mv` exists and is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Empty cells in row-major order. Empty iff the board is full.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Move::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Places `mark` in the empty cell at `mv`.
    pub fn apply_move(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        let idx = self
            .index(mv)
            .ok_or(MoveError::OutOfBounds(mv, self.size))?;
        match self.cells[idx] {
            Cell::Empty => {
                self.cells[idx] = Cell::Occupied(mark);
                Ok(())
            }
            Cell::Occupied(owner) => Err(MoveError::Occupied(mv, owner)),
        }
    }

    /// Clears the cell at `mv`, reversing the [`Board::apply_move`] that filled it.
    pub fn undo_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let idx = self
            .index(mv)
            .ok_or(MoveError::OutOfBounds(mv, self.size))?;
        if self.cells[idx].is_empty() {
            return Err(MoveError::NotOccupied(mv));
        }
        self.cells[idx] = Cell::Empty;
        Ok(())
    }

    /// Empties every cell, keeping the size.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Mark owning a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Absolute game status.
    pub fn status(&self) -> Status {
        rules::status(self)
    }

    /// Game status from the point of view of `me`.
    pub fn outcome(&self, me: Mark) -> Outcome {
        rules::outcome(self, me)
    }

    /// Moves have alternated: the two mark counts differ by at most one.
    #[instrument(skip(self))]
    pub fn is_consistent(&self) -> bool {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }

    /// Whose turn it is, given which mark opened the game.
    pub fn to_move(&self, first: Mark) -> Mark {
        if self.count(first) > self.count(first.opponent()) {
            first.opponent()
        } else {
            first
        }
    }

    /// Two bits per cell, row-major, lowest bits first: 0 empty, 1 X, 2 O.
    pub fn encode(&self) -> u128 {
        encode_cells(self.cells.iter().copied())
    }
}

pub(crate) fn encode_cells(cells: impl Iterator<Item = Cell>) -> u128 {
    cells.enumerate().fold(0u128, |key, (idx, cell)| {
        let bits: u128 = match cell {
            Cell::Empty => 0,
            Cell::Occupied(Mark::X) => 1,
            Cell::Occupied(Mark::O) => 2,
        };
        key | bits << (2 * idx)
    })
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = cells.iter().map(|cell| cell.symbol()).collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses rows of `X`, `O` and `.` (also `_` or `-` for empty), separated by
/// `/` or newlines. Whitespace inside a row is ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c.to_ascii_uppercase() {
                        'X' => Ok(Cell::Occupied(Mark::X)),
                        'O' => Ok(Cell::Occupied(Mark::O)),
                        '.' | '_' | '-' => Ok(Cell::Empty),
                        other => Err(ParseBoardError::InvalidCell(other)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .filter(|row| !matches!(row, Ok(cells) if cells.is_empty()))
            .collect::<Result<Vec<_>, _>>()?;

        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(ParseBoardError::NotSquare(
                size,
                rows.iter().map(Vec::len).collect(),
            ));
        }

        let mut board = Board::with_size(size)?;
        board.cells = rows.into_iter().flatten().collect();
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_row_major() {
        let board: Board = "X../.O./..X".parse().unwrap();
        assert_eq!(
            board.legal_moves(),
            vec![
                Move::new(0, 1),
                Move::new(0, 2),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 0),
                Move::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_full_board_has_no_legal_moves() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(board.legal_moves().is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let mut board = Board::new();
        board.apply_move(Move::new(1, 1), Mark::X).unwrap();
        assert_eq!(
            board.apply_move(Move::new(1, 1), Mark::O),
            Err(MoveError::Occupied(Move::new(1, 1), Mark::X))
        );
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_move(Move::new(3, 0), Mark::X),
            Err(MoveError::OutOfBounds(Move::new(3, 0), 3))
        );
    }

    #[test]
    fn test_undo_rejects_empty_cell() {
        let mut board = Board::new();
        assert_eq!(
            board.undo_move(Move::new(0, 0)),
            Err(MoveError::NotOccupied(Move::new(0, 0)))
        );
    }

    #[test]
    fn test_apply_then_undo_restores_board() {
        let original: Board = "X../.O./...".parse().unwrap();
        let mut board = original.clone();
        let moves = [Move::new(2, 2), Move::new(0, 1), Move::new(1, 0)];
        let mut mark = Mark::X;
        for mv in moves {
            board.apply_move(mv, mark).unwrap();
            mark = mark.opponent();
        }
        for mv in moves.iter().rev() {
            board.undo_move(*mv).unwrap();
        }
        assert_eq!(board, original);
        assert_eq!(board.encode(), original.encode());

        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_with_size_bounds() {
        assert!(Board::with_size(0).is_err());
        assert!(Board::with_size(9).is_err());
        assert_eq!(Board::with_size(4).unwrap().legal_moves().len(), 16);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board: Board = "x o ./. X ./O _ -".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\nO..");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XQ./.../...".parse::<Board>(),
            Err(ParseBoardError::InvalidCell('Q'))
        );
        assert!(matches!(
            "XO/.../...".parse::<Board>(),
            Err(ParseBoardError::NotSquare(3, _))
        ));
        assert!(matches!(
            "".parse::<Board>(),
            Err(ParseBoardError::Size(_))
        ));
    }

    #[test]
    fn test_consistency_and_turn() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert!(board.is_consistent());
        assert_eq!(board.to_move(Mark::X), Mark::O);
        assert_eq!(board.to_move(Mark::O), Mark::O);

        let lopsided: Board = "XXX/.../...".parse().unwrap();
        assert!(!lopsided.is_consistent());
    }

    #[test]
    fn test_encode_distinguishes_marks() {
        let x: Board = "X../.../...".parse().unwrap();
        let o: Board = "O../.../...".parse().unwrap();
        assert_eq!(x.encode(), 1);
        assert_eq!(o.encode(), 2);
        assert_eq!(Board::new().encode(), 0);
    }
}
