//! Text layouts for [`Board`]: FEN piece placement plus castling and en passant fields.
//!
//! A layout has one to three space-separated fields:
//!
//! ```text
//! <placement> [<castling>] [<en passant>]
//! rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR KQkq e3
//! ```
//!
//! Placement is standard FEN, rank 8 first. The castling field marks the
//! king on e1/e8 and the matching corner rook castle-eligible (`K` = h1,
//! `Q` = a1, `k` = h8, `q` = a8). The en passant field names the square of a
//! marker; its color follows from the rank. Missing fields read as `-`.
//! There is no side-to-move field: boards do not track whose turn it is.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::LayoutError;
use crate::piece::Piece;
use crate::square::Square;

/// The layout of the standard starting position.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR KQkq -";

/// Castling flags with the king and rook squares each one needs.
const CASTLING_FLAGS: [(char, Square, Square); 4] = [
    ('K', Square::E1, Square::H1),
    ('Q', Square::E1, Square::A1),
    ('k', Square::E8, Square::H8),
    ('q', Square::E8, Square::A8),
];

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let fields: Vec<&str> = layout.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 3 {
            return Err(LayoutError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut board = parse_placement(fields[0])?;
        apply_castling(&mut board, fields.get(1).copied().unwrap_or("-"))?;
        apply_en_passant(&mut board, fields.get(2).copied().unwrap_or("-"))?;

        board.validate()?;
        Ok(board)
    }
}

fn parse_placement(placement: &str) -> Result<Board, LayoutError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(LayoutError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    // Layout ranks run top to bottom, which is exactly the board's row order.
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut col: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(LayoutError::InvalidPieceChar { character: c });
                }
                col += digit as u8;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(LayoutError::InvalidPieceChar { character: c })?;
                let sq = Square::from_coords(rank_index as u8, col).ok_or(
                    LayoutError::BadRankLength {
                        rank_index,
                        length: col as usize + 1,
                    },
                )?;
                board.set(sq, piece);
                col += 1;
            }
        }

        if col != 8 {
            return Err(LayoutError::BadRankLength {
                rank_index,
                length: col as usize,
            });
        }
    }

    Ok(board)
}

fn apply_castling(board: &mut Board, field: &str) -> Result<(), LayoutError> {
    if field == "-" {
        return Ok(());
    }

    for flag in field.chars() {
        let &(_, king_sq, rook_sq) = CASTLING_FLAGS
            .iter()
            .find(|(c, _, _)| *c == flag)
            .ok_or(LayoutError::InvalidCastlingChar { character: flag })?;

        let color = if flag.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let king = board[king_sq];
        let rook = board[rook_sq];
        if !(king.is_king() && king.color() == Some(color))
            || !(rook.is_rook() && rook.color() == Some(color))
        {
            return Err(LayoutError::CastlingPieceMissing { flag });
        }

        board.set(king_sq, king.unmoved());
        board.set(rook_sq, rook.unmoved());
    }

    Ok(())
}

fn apply_en_passant(board: &mut Board, field: &str) -> Result<(), LayoutError> {
    if field == "-" {
        return Ok(());
    }

    let invalid = || LayoutError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq = Square::from_algebraic(field).ok_or_else(invalid)?;
    let color = match sq.rank_char() {
        '3' => Color::White,
        '6' => Color::Black,
        _ => return Err(invalid()),
    };
    if !board[sq].is_vacant() {
        return Err(invalid());
    }

    board.set(sq, Piece::marker(color));
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Piece placement
        for row in 0u8..8 {
            let mut empty_count = 0u8;

            for col in 0u8..8 {
                let fen_char = Square::from_coords(row, col).and_then(|sq| self[sq].fen_char());
                match fen_char {
                    Some(c) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{c}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row < 7 {
                write!(f, "/")?;
            }
        }

        // Castling
        let flags: String = CASTLING_FLAGS
            .iter()
            .filter(|&&(_, king_sq, rook_sq)| {
                self[king_sq].is_castle_eligible() && self[rook_sq].is_castle_eligible()
            })
            .map(|&(c, _, _)| c)
            .collect();
        if flags.is_empty() {
            write!(f, " -")?;
        } else {
            write!(f, " {flags}")?;
        }

        // En passant
        match self.markers().next() {
            Some(sq) => write!(f, " {sq}"),
            None => write!(f, " -"),
        }
    }
}
