//! Move representation and plain algebraic move records.

use std::fmt;

use crate::board::Board;
use crate::square::Square;

/// A move: an origin square and a destination square.
///
/// Castling is expressed as the king's two-column move and en passant as the
/// pawn's diagonal step onto the marker; the executor infers the rest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a move between two squares.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Parse coordinate notation such as `e2e4`.
    pub fn from_coords(s: &str) -> Option<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[..2])?;
        let to = Square::from_algebraic(&s[2..])?;
        Some(Move::new(from, to))
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Return `true` if this is a king's two-column castling step on `board`.
    pub fn is_castle_on(self, board: &Board) -> bool {
        board[self.from].is_king()
            && self.from.same_row(self.to)
            && self.from.col().abs_diff(self.to.col()) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// An executed move together with its algebraic rendering, as kept in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move that was executed.
    pub mv: Move,
    /// Plain algebraic notation (`e4`, `Nxf3`, `exd6`, `O-O`).
    pub notation: String,
}

impl MoveRecord {
    /// Describe `mv` as it would be played on `board` (the position before the move).
    ///
    /// No disambiguation, check, or mate suffixes are produced.
    pub fn describe(board: &Board, mv: Move) -> MoveRecord {
        MoveRecord {
            mv,
            notation: notation(board, mv),
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}

fn notation(board: &Board, mv: Move) -> String {
    let mover = board[mv.from()];
    let target = board[mv.to()];

    if mv.is_castle_on(board) {
        return if mv.to().col() > mv.from().col() {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    // Only a pawn takes through a marker.
    let takes = !target.is_empty() || (mover.is_pawn() && target.is_marker());
    let capture = takes && mover.color().is_some() && target.color().is_some() && !mover.same_color(target);

    let mut out = String::with_capacity(6);
    match mover.kind().and_then(|kind| kind.notation_letter()) {
        Some(letter) => out.push(letter),
        None if capture => out.push(mv.from().file_char()),
        None => {}
    }
    if capture {
        out.push('x');
    }
    out.push_str(&mv.to().to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveRecord};
    use crate::board::Board;
    use crate::square::Square;

    #[test]
    fn accessors_and_display() {
        let mv = Move::new(Square::E2, Square::E4);
        assert_eq!(mv.from(), Square::E2);
        assert_eq!(mv.to(), Square::E4);
        assert_eq!(format!("{mv}"), "e2e4");
        assert_eq!(format!("{mv:?}"), "Move(e2e4)");
    }

    #[test]
    fn from_coords() {
        assert_eq!(Move::from_coords("g1f3"), Some(Move::new(Square::G1, Square::F3)));
        assert_eq!(Move::from_coords("g1f"), None);
        assert_eq!(Move::from_coords("g1f9"), None);
        assert_eq!(Move::from_coords("é1f3"), None);
    }

    #[test]
    fn notation_quiet_moves() {
        let board = Board::starting_position();
        let pawn = MoveRecord::describe(&board, Move::new(Square::E2, Square::E4));
        assert_eq!(pawn.notation, "e4");
        let knight = MoveRecord::describe(&board, Move::new(Square::G1, Square::F3));
        assert_eq!(knight.notation, "Nf3");
    }

    #[test]
    fn notation_captures() {
        let board: Board = "4k3/8/8/3p4/4P3/5n2/8/4K1N1".parse().unwrap();
        let pawn = MoveRecord::describe(&board, Move::new(Square::E4, Square::D5));
        assert_eq!(pawn.notation, "exd5");
        let knight = MoveRecord::describe(&board, Move::new(Square::G1, Square::F3));
        assert_eq!(knight.notation, "Nxf3");
    }

    #[test]
    fn notation_en_passant_is_a_capture() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 - d6".parse().unwrap();
        let record = MoveRecord::describe(&board, Move::new(Square::E5, Square::D6));
        assert_eq!(record.notation, "exd6");
    }

    #[test]
    fn notation_castling() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R KQkq -".parse().unwrap();
        let short = MoveRecord::describe(&board, Move::new(Square::E1, Square::G1));
        assert_eq!(short.notation, "O-O");
        let long = MoveRecord::describe(&board, Move::new(Square::E8, Square::C8));
        assert_eq!(long.notation, "O-O-O");
    }
}
