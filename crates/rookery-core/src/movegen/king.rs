//! King move and castling generation.

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::lands_on;

/// Which directions a castle-eligible king may castle toward right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastleOptions {
    /// Toward the a-file rook.
    pub queen_side: bool,
    /// Toward the h-file rook.
    pub king_side: bool,
}

impl CastleOptions {
    /// Return `true` if castling is possible in either direction.
    pub const fn any(self) -> bool {
        self.queen_side || self.king_side
    }
}

fn steps(sq: Square) -> [(i8, bool); 8] {
    let (top, bottom) = (sq.on_top_row(), sq.on_bottom_row());
    let (left, right) = (sq.on_left_edge(), sq.on_right_edge());
    [
        (-9, !top && !left),
        (-8, !top),
        (-7, !top && !right),
        (-1, !left),
        (1, !right),
        (7, !bottom && !left),
        (8, !bottom),
        (9, !bottom && !right),
    ]
}

/// Generate king destinations: the eight neighbours plus, unless
/// `ignore_castling` is set, the two-column castling steps.
pub(super) fn king_moves(board: &Board, sq: Square, mover: Piece, ignore_castling: bool) -> SquareSet {
    let mut moves: SquareSet = steps(sq)
        .into_iter()
        .filter(|&(_, fits)| fits)
        .filter_map(|(delta, _)| sq.offset(delta))
        .filter(|&to| lands_on(mover, board[to]))
        .collect();

    if !ignore_castling {
        let castle = can_castle(board, sq);
        for (allowed, delta) in [(castle.queen_side, -2), (castle.king_side, 2)] {
            if allowed
                && let Some(to) = sq.offset(delta)
                && to.same_row(sq)
            {
                moves.insert(to);
            }
        }
    }

    moves
}

/// Decide which ways the king on `king_sq` may castle.
///
/// Only a castle-eligible king can castle. Toward each edge the squares up
/// to the rook must be empty, the two squares the king crosses must not be
/// attacked, and the square ending the empty run must hold a castle-eligible
/// rook of the king's color. The square the king stands on is not examined.
pub fn can_castle(board: &Board, king_sq: Square) -> CastleOptions {
    let king = board[king_sq];
    let Some(color) = king.color() else {
        return CastleOptions::default();
    };
    if !king.is_king() || !king.is_castle_eligible() {
        return CastleOptions::default();
    }

    let side = |step: i8, edge: fn(Square) -> bool| {
        let mut current = king_sq;
        let mut travelled = 0u8;
        loop {
            if edge(current) {
                return false;
            }
            let Some(next) = current.offset(step) else {
                return false;
            };
            let piece = board[next];
            if !piece.is_empty() {
                return travelled >= 2
                    && piece.is_rook()
                    && piece.is_castle_eligible()
                    && king.same_color(piece);
            }
            if travelled < 2 && is_attacked(board, next, color) {
                return false;
            }
            travelled += 1;
            current = next;
        }
    };

    CastleOptions {
        queen_side: side(-1, Square::on_left_edge),
        king_side: side(1, Square::on_right_edge),
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleOptions, can_castle, king_moves};
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn king_in_corner_has_three_moves() {
        let moves = king_moves(&Board::empty(), Square::A1, Piece::WHITE_KING, true);
        assert_eq!(moves.iter().collect::<Vec<_>>(), vec![Square::A2, Square::B2, Square::B1]);
        let moves = king_moves(&Board::empty(), Square::H8, Piece::BLACK_KING, true);
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn both_sides_open() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R KQkq -".parse().unwrap();
        let both = CastleOptions {
            queen_side: true,
            king_side: true,
        };
        assert_eq!(can_castle(&board, Square::E1), both);
        assert_eq!(can_castle(&board, Square::E8), both);
        let moves = king_moves(&board, Square::E1, board[Square::E1], false);
        assert!(moves.contains(Square::C1));
        assert!(moves.contains(Square::G1));
    }

    #[test]
    fn starting_position_cannot_castle() {
        let board = Board::starting_position();
        assert!(!can_castle(&board, Square::E1).any());
        assert!(!can_castle(&board, Square::E8).any());
    }

    #[test]
    fn knight_between_blocks_queen_side() {
        let board: Board = "4k3/8/8/8/8/8/8/RN2K2R KQ -".parse().unwrap();
        let options = can_castle(&board, Square::E1);
        assert!(!options.queen_side);
        assert!(options.king_side);
    }

    #[test]
    fn moved_pieces_cannot_castle() {
        // Same placement, but only the king-side flag survives on the white king.
        let board: Board = "4k3/8/8/8/8/8/8/R3K2R K -".parse().unwrap();
        let options = can_castle(&board, Square::E1);
        assert!(!options.queen_side);
        assert!(options.king_side);
        let unflagged: Board = "4k3/8/8/8/8/8/8/R3K2R - -".parse().unwrap();
        assert!(!can_castle(&unflagged, Square::E1).any());
    }

    #[test]
    fn attacked_crossing_square_blocks() {
        // Black rook on f8 covers f1.
        let board: Board = "4kr2/8/8/8/8/8/8/R3K2R KQ -".parse().unwrap();
        let options = can_castle(&board, Square::E1);
        assert!(!options.king_side);
        assert!(options.queen_side);
    }

    #[test]
    fn attacked_rook_side_square_does_not_block() {
        // Black rook on b8 covers b1, which the king never crosses.
        let board: Board = "1r2k3/8/8/8/8/8/8/R3K2R KQ -".parse().unwrap();
        assert!(can_castle(&board, Square::E1).queen_side);
    }

    #[test]
    fn checked_king_square_is_not_examined() {
        // Black rook on e8 checks the king; f1 and g1 stay clear.
        let board: Board = "4r1k1/8/8/8/8/8/8/4K2R K -".parse().unwrap();
        let options = can_castle(&board, Square::E1);
        assert!(options.king_side);
        assert!(!options.queen_side);
    }
}
