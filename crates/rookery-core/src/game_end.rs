//! Checkmate detection.

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::color::Color;
use crate::movegen::legal_moves;

/// Return `true` if any piece of `color` has a legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .squares_of(color)
        .any(|sq| !legal_moves(board, sq).is_empty())
}

/// Return `true` if `color` is checkmated: its king is attacked and no
/// piece of that color has a legal move.
///
/// A side with no legal move that is not in check is not checkmated; there
/// is no separate stalemate result.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}
