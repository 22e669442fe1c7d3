//! D4 symmetries of a square board, used to share search results between
//! positions that are rotations or reflections of each other.

use crate::board::{Board, encode_cells};
use crate::types::Move;
use serde::{Deserialize, Serialize};

/// One element of the dihedral group of the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    /// Quarter turns clockwise, 0..4.
    pub quarter_turns: u8,
    /// Mirror across the vertical axis before rotating.
    pub reflect: bool,
}

impl Symmetry {
    /// The identity transform.
    pub const IDENTITY: Symmetry = Symmetry {
        quarter_turns: 0,
        reflect: false,
    };

    /// All eight transforms.
    pub fn all() -> impl Iterator<Item = Symmetry> {
        (0..4u8).flat_map(|quarter_turns| {
            [false, true].map(|reflect| Symmetry {
                quarter_turns,
                reflect,
            })
        })
    }

    /// Where `mv` lands on a board of side `size` under this transform.
    pub fn apply(self, mv: Move, size: usize) -> Move {
        let last = size - 1;
        let (mut row, mut col) = (mv.row, mv.col);
        if self.reflect {
            col = last - col;
        }
        for _ in 0..self.quarter_turns {
            (row, col) = (col, last - row);
        }
        Move::new(row, col)
    }

    /// Encoding of `board` after applying this transform.
    pub fn encode(self, board: &Board) -> u128 {
        let size = board.size();
        // Pull each target cell from the source cell that maps onto it.
        let inverse = self.inverse();
        encode_cells((0..size * size).map(|idx| {
            let source = inverse.apply(Move::new(idx / size, idx % size), size);
            board.cells()[source.row * size + source.col]
        }))
    }

    /// The transform that undoes this one.
    pub fn inverse(self) -> Symmetry {
        if self.reflect {
            // Reflections are their own inverse.
            self
        } else {
            Symmetry {
                quarter_turns: (4 - self.quarter_turns) % 4,
                reflect: false,
            }
        }
    }
}

impl Board {
    /// Smallest encoding over all eight symmetric images of this board.
    ///
    /// Equal for any two boards that are rotations or reflections of each other.
    pub fn canonical_key(&self) -> u128 {
        Symmetry::all()
            .map(|sym| sym.encode(self))
            .min()
            .unwrap_or_else(|| self.encode())
    }
}
