//! Move execution via copy-on-write.

use tracing::warn;

use crate::board::Board;
use crate::chess_move::{Move, MoveRecord};
use crate::piece::Piece;
use crate::square::Square;

impl Board {
    /// Apply the move `from` -> `to` and return the resulting board.
    /// `self` is not modified.
    ///
    /// No legality check is made: whatever stands on `from` is moved to
    /// `to`, even when the move breaks the rules of chess. Callers that need
    /// legal play must pick `to` from [`legal_moves`](crate::legal_moves).
    ///
    /// The special moves are inferred from the board:
    /// - a pawn landing on an opposing en-passant marker removes the pawn that
    ///   left it; any other piece treats the marker as an empty square;
    /// - a pawn advancing two rows leaves a marker on the square it skipped;
    /// - a king moving two columns along its row brings the rook from that
    ///   side over to the square it crossed.
    ///
    /// Every marker from the previous move is cleared, and the moved piece
    /// loses its castle-eligible flag.
    pub fn execute(&self, from: Square, to: Square) -> Board {
        let mut b = *self;
        let mover = self[from];
        let target = self[to];

        // En passant: the captured pawn sits one row past its marker.
        if mover.is_pawn()
            && target.is_marker()
            && !mover.same_color(target)
            && let Some(marker_color) = target.color()
            && let Some(victim) = to.offset(marker_color.forward())
            && self[victim].is_pawn()
        {
            b.set(victim, Piece::EMPTY);
        }

        b.set(to, mover.moved());
        b.set(from, Piece::EMPTY);
        b.clear_markers();

        if mover.is_pawn()
            && from.row().abs_diff(to.row()) == 2
            && let Some(color) = mover.color()
            && let Some(skipped) = from.offset(color.forward())
        {
            b.set(skipped, Piece::marker(color));
        }

        if mover.is_king() && from.same_row(to) && from.col().abs_diff(to.col()) == 2 {
            let step: i8 = if to.col() > from.col() { 1 } else { -1 };
            if let Some(rook_sq) = castling_rook(self, from, step)
                && let Some(landing) = to.offset(-step)
            {
                b.set(landing, self[rook_sq].moved());
                b.set(rook_sq, Piece::EMPTY);
            }
        }

        b
    }

    /// [`execute`](Board::execute) for raw square indices.
    ///
    /// Indices outside the board leave it unchanged; the call is logged and
    /// otherwise ignored.
    pub fn execute_index(&self, from: usize, to: usize) -> Board {
        match (Square::from_index(from), Square::from_index(to)) {
            (Some(from), Some(to)) => self.execute(from, to),
            _ => {
                warn!(from, to, "ignoring move with out-of-bounds square");
                *self
            }
        }
    }

    /// Execute a move and also describe it in plain algebraic notation.
    pub fn execute_recorded(&self, mv: Move) -> (Board, MoveRecord) {
        let record = MoveRecord::describe(self, mv);
        (self.execute(mv.from(), mv.to()), record)
    }
}

/// First rook found scanning from the king toward the edge, on the board
/// before the move.
fn castling_rook(board: &Board, king_sq: Square, step: i8) -> Option<Square> {
    let at_edge = |sq: Square| if step > 0 { sq.on_right_edge() } else { sq.on_left_edge() };
    let mut current = king_sq;
    while !at_edge(current) {
        current = current.offset(step)?;
        let piece = board[current];
        if !piece.is_empty() {
            return piece.is_rook().then_some(current);
        }
    }
    None
}
