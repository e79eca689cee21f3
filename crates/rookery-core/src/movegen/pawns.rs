//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Diagonal capture steps toward the left and right edges for each color.
const fn capture_steps(color: Color) -> (i8, i8) {
    match color {
        Color::White => (-9, -7),
        Color::Black => (7, 9),
    }
}

/// Generate pawn pushes and captures.
///
/// A pawn on its last row has nowhere to go (there is no promotion).
/// Pushes need truly vacant squares; diagonal captures need something of
/// the other color, which includes an en-passant marker.
pub(super) fn pawn_moves(board: &Board, sq: Square, color: Color) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    if sq.row() == color.last_row() {
        return moves;
    }

    let mover = Piece::new(PieceKind::Pawn, color);
    for target in diagonals(sq, color) {
        let occupant = board[target];
        if !occupant.is_vacant() && mover.can_capture(occupant) {
            moves.insert(target);
        }
    }

    if let Some(one) = sq.offset(color.forward())
        && board[one].is_vacant()
    {
        moves.insert(one);
        if sq.row() == color.pawn_row()
            && let Some(two) = one.offset(color.forward())
            && board[two].is_vacant()
        {
            moves.insert(two);
        }
    }

    moves
}

/// Squares a pawn of `color` on `sq` threatens, whatever stands on them.
pub(crate) fn pawn_attacks(sq: Square, color: Color) -> SquareSet {
    if sq.row() == color.last_row() {
        return SquareSet::EMPTY;
    }
    diagonals(sq, color).collect()
}

fn diagonals(sq: Square, color: Color) -> impl Iterator<Item = Square> {
    let (left, right) = capture_steps(color);
    let left = (!sq.on_left_edge()).then(|| sq.offset(left)).flatten();
    let right = (!sq.on_right_edge()).then(|| sq.offset(right)).flatten();
    left.into_iter().chain(right)
}
