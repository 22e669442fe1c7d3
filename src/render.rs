//! Text rendering of boards for the console.

use unbeatable_core::{Board, Cell, Move};

/// Draws the board with row and column numbers, as used when entering moves.
///
/// ```text
///     0   1   2
/// 0   X |   | O
///    ---+---+---
/// 1     | X |
///    ---+---+---
/// 2     |   |
/// ```
pub fn render(board: &Board) -> String {
    let size = board.size();
    let header: String = (0..size).map(|col| format!("{col:^4}")).collect();
    let separator = vec!["---"; size].join("+");

    let mut lines = vec![format!("   {}", header.trim_end())];
    for row in 0..size {
        if row > 0 {
            lines.push(format!("   {separator}"));
        }
        let cells: Vec<String> = (0..size)
            .map(|col| {
                let symbol = match board.get(Move::new(row, col)) {
                    Some(Cell::Occupied(mark)) => mark.symbol(),
                    _ => ' ',
                };
                format!(" {symbol} ")
            })
            .collect();
        lines.push(format!("{row}  {}", cells.join("|")).trim_end().to_string());
    }
    lines.join("\n")
}
