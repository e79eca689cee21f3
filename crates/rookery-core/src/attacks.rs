//! Attack and check detection built on move generation.
//!
//! There are no per-piece attack tables. A square is probed with queen and
//! knight shapes to find every piece that could possibly reach it, and each
//! candidate is then confirmed with its own attack set.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{GenOptions, generate, pawn_attacks};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Return the squares threatened by the piece on `from`.
///
/// Pawns threaten their two forward diagonals whatever stands there; a push
/// is never a threat. Other pieces threaten their geometric moves with
/// castling left out.
pub fn attack_set(board: &Board, from: Square) -> SquareSet {
    let piece = board[from];
    match (piece.kind(), piece.color()) {
        (Some(PieceKind::Pawn), Some(color)) => pawn_attacks(from, color),
        (Some(_), Some(_)) => generate(board, from, GenOptions::new().ignore_castling()),
        _ => SquareSet::EMPTY,
    }
}

/// Return `true` if a piece of `color` standing on `sq` would be attacked
/// by the other side.
///
/// `sq` may be empty: castling asks this for the squares the king crosses.
pub fn is_attacked(board: &Board, sq: Square, color: Color) -> bool {
    let queen = GenOptions::new()
        .with_piece(Piece::new(PieceKind::Queen, color))
        .attack_only()
        .ignore_castling();
    let knight = GenOptions::new()
        .with_piece(Piece::new(PieceKind::Knight, color))
        .ignore_castling();
    let candidates = generate(board, sq, queen) | generate(board, sq, knight);

    candidates.iter().any(|from| {
        let attacker = board[from];
        !attacker.is_empty() && attacker.color() != Some(color) && attack_set(board, from).contains(sq)
    })
}

/// Return `true` if the occupant of `sq` is attacked by the other side.
///
/// Empty squares and markers are never attacked.
pub fn is_square_attacked(board: &Board, sq: Square) -> bool {
    let piece = board[sq];
    match piece.color() {
        Some(color) if !piece.is_empty() => is_attacked(board, sq, color),
        _ => false,
    }
}

/// Return `true` if the king of `color` is on the board and attacked.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|sq| is_attacked(board, sq, color))
}
