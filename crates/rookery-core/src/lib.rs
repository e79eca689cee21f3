//! Core chess rules: board representation, move generation, check and
//! checkmate detection, and move execution.

mod attacks;
mod board;
mod chess_move;
mod color;
mod error;
mod execute;
mod game;
mod game_end;
mod layout;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod square_set;

pub use attacks::{attack_set, is_attacked, is_in_check, is_square_attacked};
pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, MoveRecord};
pub use color::Color;
pub use error::{BoardError, GameError, LayoutError};
pub use game::{Game, GameStatus};
pub use game_end::{has_legal_move, is_checkmate};
pub use layout::STARTING_LAYOUT;
pub use movegen::{CastleOptions, GenOptions, can_castle, can_select, generate, legal_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::{Square, in_bounds};
pub use square_set::SquareSet;
