//! Error types for layout parsing, board validation, and game sessions.

use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

/// Errors that occur when parsing a board layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have one to three space-separated fields.
    #[error("expected 1 to 3 layout fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// An unrecognized character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// A castling flag names a king or rook that is not on its home square.
    #[error("castling flag '{flag}' needs an unmoved king and rook on their home squares")]
    CastlingPieceMissing {
        /// The castling flag that could not be honoured.
        flag: char,
    },
    /// The en passant field is not "-" or an empty square on rank 3 or rank 6.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has more than one king.
    #[error("expected at most 1 king for {color}, found {count}")]
    TooManyKings {
        /// Which side has the extra king.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A side has more than one en-passant marker.
    #[error("expected at most 1 en passant marker for {color}, found {count}")]
    TooManyMarkers {
        /// Which side has the extra marker.
        color: Color,
        /// Number of markers found.
        count: usize,
    },
    /// A marker sits somewhere a two-square pawn advance cannot leave one.
    #[error("en passant marker on {square} cannot follow a pawn advance")]
    MisplacedMarker {
        /// Square holding the marker.
        square: Square,
    },
}

/// Errors from playing moves through a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The side to move has been checkmated.
    #[error("the game is over")]
    GameOver,
    /// The origin square does not hold a piece of the side to move.
    #[error("no {side} piece on {square}")]
    NotYourPiece {
        /// Side to move.
        side: Color,
        /// Origin square of the rejected move.
        square: Square,
    },
    /// The move is not among the legal moves of the selected piece.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, GameError, LayoutError};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn layout_error_display() {
        let err = LayoutError::WrongFieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 1 to 3 layout fields, found 4");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::TooManyKings {
            color: Color::White,
            count: 2,
        };
        assert_eq!(format!("{err}"), "expected at most 1 king for white, found 2");
    }

    #[test]
    fn layout_error_from_board_error() {
        let board_err = BoardError::MisplacedMarker { square: Square::E4 };
        let layout_err: LayoutError = board_err.into();
        assert!(matches!(layout_err, LayoutError::InvalidBoard { .. }));
    }

    #[test]
    fn game_error_display() {
        let err = GameError::IllegalMove {
            mv: Move::new(Square::E2, Square::E5),
        };
        assert_eq!(format!("{err}"), "illegal move: e2e5");
        let err = GameError::NotYourPiece {
            side: Color::Black,
            square: Square::E2,
        };
        assert_eq!(format!("{err}"), "no black piece on e2");
    }
}
