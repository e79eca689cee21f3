//! Knight move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::lands_on;

/// The eight knight jumps, each paired with the row/column guard that keeps
/// it from wrapping around the board.
fn jumps(sq: Square) -> [(i8, bool); 8] {
    let (row, col) = (sq.row(), sq.col());
    [
        (-17, row >= 2 && col >= 1),
        (-15, row >= 2 && col <= 6),
        (-10, row >= 1 && col >= 2),
        (-6, row >= 1 && col <= 5),
        (6, row <= 6 && col >= 2),
        (10, row <= 6 && col <= 5),
        (15, row <= 5 && col >= 1),
        (17, row <= 5 && col <= 6),
    ]
}

/// Generate knight destinations: empty squares or captures.
pub(super) fn knight_moves(board: &Board, sq: Square, mover: Piece) -> SquareSet {
    jumps(sq)
        .into_iter()
        .filter(|&(_, fits)| fits)
        .filter_map(|(delta, _)| sq.offset(delta))
        .filter(|&to| lands_on(mover, board[to]))
        .collect()
}
