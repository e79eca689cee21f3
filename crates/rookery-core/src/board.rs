//! The chess board: 64 squares of [`Piece`] values and nothing else.

use std::fmt;
use std::ops::Index;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement, indexed by [`Square`].
///
/// The board carries no out-of-band state: side to move and move history
/// belong to the caller. Castling eligibility and en passant opportunities
/// live in the pieces themselves. A board is a plain `Copy` value, and
/// executing a move returns a new one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [Piece::EMPTY; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    ///
    /// Kings and rooks start castle-eligible.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            for (row, color) in [(0, Color::Black), (7, Color::White)] {
                if let Some(sq) = Square::from_coords(row, col) {
                    board.set(sq, Piece::new(kind, color).unmoved());
                }
            }
            for color in Color::ALL {
                if let Some(sq) = Square::from_coords(color.pawn_row(), col) {
                    board.set(sq, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    /// Return the contents of the given square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    /// Overwrite a square. Only move execution and parsing write to a board.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = piece;
    }

    /// Return a copy of this board with `piece` placed on `sq`.
    ///
    /// Intended for building test positions; no validation is performed.
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.set(sq, piece);
        self
    }

    /// Remove every en-passant marker of both colors.
    pub(crate) fn clear_markers(&mut self) {
        for piece in &mut self.squares {
            if piece.is_marker() {
                *piece = Piece::EMPTY;
            }
        }
    }

    /// Return the square of the king of the given color, if there is one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            let piece = self.piece_at(sq);
            piece.is_king() && piece.color() == Some(color)
        })
    }

    /// Iterate over the squares holding real pieces (markers excluded) of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| {
            let piece = self.piece_at(sq);
            !piece.is_empty() && piece.color() == Some(color)
        })
    }

    /// Iterate over the squares holding en-passant markers.
    pub fn markers(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|&sq| self.piece_at(sq).is_marker())
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let kings = Square::all()
                .filter(|&sq| {
                    let piece = self.piece_at(sq);
                    piece.is_king() && piece.color() == Some(color)
                })
                .count();
            if kings > 1 {
                return Err(BoardError::TooManyKings { color, count: kings });
            }

            let markers = self
                .markers()
                .filter(|&sq| self.piece_at(sq).color() == Some(color))
                .count();
            if markers > 1 {
                return Err(BoardError::TooManyMarkers {
                    color,
                    count: markers,
                });
            }
        }

        // A marker sits on the square its pawn skipped: rank 3 for White, rank 6 for Black.
        for square in self.markers() {
            let skipped_row = match self.piece_at(square).color() {
                Some(Color::White) => 5,
                _ => 2,
            };
            if square.row() != skipped_row {
                return Err(BoardError::MisplacedMarker { square });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Index<Square> for Board {
    type Output = Piece;

    #[inline]
    fn index(&self, sq: Square) -> &Piece {
        &self.squares[sq.index()]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = Square::from_coords(row, col)
                    .map(|sq| board.piece_at(sq).display_piece().display_char())
                    .unwrap_or('.');
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
