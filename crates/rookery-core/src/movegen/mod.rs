//! Per-piece move generation.
//!
//! [`generate`] produces the destination set for whatever stands on a
//! square. By default the set is geometric: it ignores whether the move
//! would leave the mover's own king attacked. [`GenOptions::check_filtered`]
//! (or [`legal_moves`]) adds that filter; it is the only place self-check is
//! enforced.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

pub use self::king::{CastleOptions, can_castle};
pub(crate) use self::pawns::pawn_attacks;

/// Knobs for [`generate`].
///
/// The flags compose: the attack oracle probes with `piece` + `attack_only`,
/// castling safety recurses with `ignore_castling`, and UI selection asks for
/// `check_filtered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenOptions {
    /// Generate as if this piece stood on the square instead of its occupant.
    pub piece: Option<Piece>,
    /// Sliding rays report only the piece that ends them, not the empty squares before it.
    pub attack_only: bool,
    /// Drop destinations that leave the mover's own king attacked.
    pub check_filtered: bool,
    /// Leave out castling destinations.
    pub ignore_castling: bool,
}

impl GenOptions {
    /// Plain geometric generation for the occupant of the square.
    pub fn new() -> GenOptions {
        GenOptions::default()
    }

    pub fn with_piece(mut self, piece: Piece) -> GenOptions {
        self.piece = Some(piece);
        self
    }

    pub fn attack_only(mut self) -> GenOptions {
        self.attack_only = true;
        self
    }

    pub fn check_filtered(mut self) -> GenOptions {
        self.check_filtered = true;
        self
    }

    pub fn ignore_castling(mut self) -> GenOptions {
        self.ignore_castling = true;
        self
    }
}

/// Generate the destination squares for the piece on `sq`.
///
/// Empty squares and en-passant markers generate nothing. A queen is the
/// union of rook and bishop generation from the same square.
pub fn generate(board: &Board, sq: Square, opts: GenOptions) -> SquareSet {
    let mover = opts.piece.unwrap_or(board[sq]);
    let (Some(kind), Some(color)) = (mover.kind(), mover.color()) else {
        return SquareSet::EMPTY;
    };

    let moves = match kind {
        PieceKind::Pawn => pawns::pawn_moves(board, sq, color),
        PieceKind::Knight => knights::knight_moves(board, sq, mover),
        PieceKind::Bishop => sliders::bishop_moves(board, sq, mover, opts.attack_only),
        PieceKind::Rook => sliders::rook_moves(board, sq, mover, opts.attack_only),
        PieceKind::Queen => {
            let component = GenOptions {
                piece: None,
                check_filtered: false,
                ..opts
            };
            generate(board, sq, component.with_piece(Piece::new(PieceKind::Rook, color)))
                | generate(board, sq, component.with_piece(Piece::new(PieceKind::Bishop, color)))
        }
        PieceKind::King => king::king_moves(board, sq, mover, opts.ignore_castling),
    };

    if opts.check_filtered {
        retain_safe(board, sq, color, moves)
    } else {
        moves
    }
}

/// Legal destinations for the piece on `sq`: geometric moves minus those
/// that leave its own king attacked.
pub fn legal_moves(board: &Board, sq: Square) -> SquareSet {
    generate(board, sq, GenOptions::new().check_filtered())
}

/// Return `true` if `piece` may be picked up by `side_to_move`.
pub fn can_select(piece: Piece, side_to_move: Color) -> bool {
    !piece.is_empty() && piece.color() == Some(side_to_move)
}

/// Keep only the destinations after which `color`'s king is not attacked.
fn retain_safe(board: &Board, from: Square, color: Color, moves: SquareSet) -> SquareSet {
    moves
        .iter()
        .filter(|&to| !is_in_check(&board.execute(from, to), color))
        .collect()
}

/// A leaper may land on an empty square (markers included) or capture.
#[inline]
fn lands_on(mover: Piece, target: Piece) -> bool {
    target.is_empty() || mover.can_capture(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn starting_position_20_moves() {
        let board = Board::starting_position();
        let total: usize = board
            .squares_of(Color::White)
            .map(|sq| legal_moves(&board, sq).len())
            .sum();
        assert_eq!(total, 20, "starting position should have 20 legal moves, got {total}");
    }

    #[test]
    fn empty_square_and_marker_generate_nothing() {
        let board = Board::starting_position().with_piece(Square::E3, Piece::WHITE_MARKER);
        assert!(generate(&board, Square::E4, GenOptions::new()).is_empty());
        assert!(generate(&board, Square::E3, GenOptions::new()).is_empty());
        assert!(legal_moves(&board, Square::D5).is_empty());
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let board: Board = "4k3/8/8/8/3Q4/8/8/4K3".parse().unwrap();
        let queen = generate(&board, Square::D4, GenOptions::new());
        let rook = generate(&board, Square::D4, GenOptions::new().with_piece(Piece::WHITE_ROOK));
        let bishop = generate(&board, Square::D4, GenOptions::new().with_piece(Piece::WHITE_BISHOP));
        assert_eq!(queen, rook | bishop);
        assert_eq!(queen.len(), 27);
    }

    #[test]
    fn piece_override_does_not_touch_the_board() {
        let board = Board::starting_position();
        let as_knight = generate(&board, Square::E4, GenOptions::new().with_piece(Piece::BLACK_KNIGHT));
        // From e4 a black knight reaches d2 and f2 (white pawns) and four empty squares.
        assert_eq!(as_knight.len(), 8);
        assert!(as_knight.contains(Square::D2));
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn pinned_knight_has_no_legal_moves() {
        // King on e1, knight on e2, rook on e8: the knight is pinned along the e-file.
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3".parse().unwrap();
        assert_eq!(generate(&board, Square::E2, GenOptions::new()).len(), 6);
        assert!(legal_moves(&board, Square::E2).is_empty());
    }

    #[test]
    fn check_must_be_answered() {
        // Rook on e8 checks the king on e1; the bishop's only answer is the block on e3.
        let board: Board = "4r2k/8/8/8/8/8/8/2B1K3".parse().unwrap();
        let bishop = legal_moves(&board, Square::C1);
        assert_eq!(bishop.iter().collect::<Vec<_>>(), vec![Square::E3]);
        let king = legal_moves(&board, Square::E1);
        assert!(!king.contains(Square::E2));
        assert!(king.contains(Square::D1));
    }

    #[test]
    fn can_select_gates_by_side() {
        assert!(can_select(Piece::WHITE_PAWN, Color::White));
        assert!(!can_select(Piece::WHITE_PAWN, Color::Black));
        assert!(!can_select(Piece::EMPTY, Color::White));
        assert!(!can_select(Piece::BLACK_MARKER, Color::Black));
    }
}
