//! Contents of a single board square, bit-packed into one byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

const CODE_MASK: u8 = 0x07;
const COLOR_BIT: u8 = 0x08;
const UNMOVED_BIT: u8 = 0x10;

const EMPTY_CODE: u8 = 0;
const MARKER_CODE: u8 = 7;

/// What stands on a square, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: contents code (0 = empty, 1-6 = [`PieceKind`] + 1, 7 = en-passant marker)
/// - bit 3: [`Color`] (0 = White, 1 = Black), clear for empty squares
/// - bit 4: castle-eligible flag, only ever set on kings and rooks
///
/// An en-passant marker is the placeholder a pawn leaves on the square it
/// skipped over with a two-square advance. It reads as empty for blocking
/// purposes but still carries the color of the pawn that left it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    /// An empty square.
    pub const EMPTY: Piece = Piece(EMPTY_CODE);

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// White king that has not moved yet.
    pub const WHITE_KING_CASTLE: Piece = Piece::WHITE_KING.unmoved();
    /// White rook that has not moved yet.
    pub const WHITE_ROOK_CASTLE: Piece = Piece::WHITE_ROOK.unmoved();
    /// Black king that has not moved yet.
    pub const BLACK_KING_CASTLE: Piece = Piece::BLACK_KING.unmoved();
    /// Black rook that has not moved yet.
    pub const BLACK_ROOK_CASTLE: Piece = Piece::BLACK_ROOK.unmoved();

    /// Marker left behind by a white two-square pawn advance.
    pub const WHITE_MARKER: Piece = Piece::marker(Color::White);
    /// Marker left behind by a black two-square pawn advance.
    pub const BLACK_MARKER: Piece = Piece::marker(Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(((color as u8) << 3) | (kind as u8 + 1))
    }

    /// Create an en-passant marker of the given color.
    #[inline]
    pub const fn marker(color: Color) -> Piece {
        Piece(((color as u8) << 3) | MARKER_CODE)
    }

    /// Return this piece flagged as castle-eligible.
    ///
    /// Only kings and rooks carry the flag; any other contents are returned as is.
    #[inline]
    pub const fn unmoved(self) -> Piece {
        match self.0 & CODE_MASK {
            c if c == PieceKind::King as u8 + 1 || c == PieceKind::Rook as u8 + 1 => {
                Piece(self.0 | UNMOVED_BIT)
            }
            _ => self,
        }
    }

    /// Return this piece with the castle-eligible flag cleared.
    ///
    /// Applied to every piece the moment it leaves its square.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece(self.0 & !UNMOVED_BIT)
    }

    /// The piece as a renderer should draw it: castle-eligible kings and
    /// rooks collapse to their plain equivalents.
    #[inline]
    pub const fn display_piece(self) -> Piece {
        self.moved()
    }

    /// Return the piece kind, or `None` for empty squares and markers.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self.0 & CODE_MASK {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Return the color of a piece or marker, `None` for an empty square.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        if self.0 & CODE_MASK == EMPTY_CODE {
            None
        } else if self.0 & COLOR_BIT == 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// `true` for empty squares and for en-passant markers.
    ///
    /// A marker never blocks movement or occupies a square for collision purposes.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.0 & CODE_MASK, EMPTY_CODE | MARKER_CODE)
    }

    /// `true` only for a truly empty square (markers excluded).
    #[inline]
    pub const fn is_vacant(self) -> bool {
        self.0 == EMPTY_CODE
    }

    /// `true` for an en-passant marker of either color.
    #[inline]
    pub const fn is_marker(self) -> bool {
        self.0 & CODE_MASK == MARKER_CODE
    }

    /// `true` for a real pawn (markers are not pawns).
    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind(), Some(PieceKind::Pawn))
    }

    /// `true` for a rook, castle-eligible or not.
    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self.kind(), Some(PieceKind::Rook))
    }

    /// `true` for a king, castle-eligible or not.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind(), Some(PieceKind::King))
    }

    /// `true` for a king or rook that has not moved yet.
    #[inline]
    pub const fn is_castle_eligible(self) -> bool {
        self.0 & UNMOVED_BIT != 0
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self.color(), Some(Color::White))
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self.color(), Some(Color::Black))
    }

    /// `true` if both squares hold something of the same color. Markers count.
    #[inline]
    pub fn same_color(self, other: Piece) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// `true` unless `target` belongs to the mover's own side.
    #[inline]
    pub fn can_capture(self, target: Piece) -> bool {
        !self.same_color(target)
    }

    /// Parse a layout character into a plain (moved) piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Layout character of a real piece; `None` for empty squares and markers.
    pub fn fen_char(self) -> Option<char> {
        let base = self.kind()?.fen_char();
        match self.color()? {
            Color::White => Some(base.to_ascii_uppercase()),
            Color::Black => Some(base),
        }
    }

    /// Character used when drawing the board: the piece letter or `.`.
    pub fn display_char(self) -> char {
        self.fen_char().unwrap_or('.')
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Some(Color::White) => 'W',
            Some(Color::Black) => 'B',
            None => return write!(f, "--"),
        };
        match self.kind() {
            Some(kind) => {
                write!(f, "{}{}", color_prefix, kind.fen_char().to_ascii_uppercase())?;
                if self.is_castle_eligible() {
                    write!(f, "*")?;
                }
                Ok(())
            }
            None => write!(f, "{color_prefix}~"),
        }
    }
}
