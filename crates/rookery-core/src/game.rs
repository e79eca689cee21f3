//! A game in progress: the board, whose turn it is, and what has been played.

use tracing::debug;

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::chess_move::{Move, MoveRecord};
use crate::color::Color;
use crate::error::GameError;
use crate::game_end::is_checkmate;
use crate::movegen::{self, can_select};
use crate::square::Square;
use crate::square_set::SquareSet;

/// Outcome of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is checkmated.
    Checkmate { winner: Color },
}

/// The caller side of the rules engine.
///
/// The board knows nothing about turns, so `Game` carries the side to move,
/// the history of played moves, and the boards before each of them for
/// [`undo`](Game::undo). Unlike [`Board::execute`], [`play`](Game::play)
/// only accepts legal moves.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    snapshots: Vec<Board>,
    status: GameStatus,
}

impl Game {
    /// Start a game from the standard position with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Color::White)
    }

    /// Start a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
            snapshots: Vec::new(),
            status: status_for(&board, side_to_move),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Return `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Return `true` if the piece on `sq` belongs to the side to move.
    pub fn can_select(&self, sq: Square) -> bool {
        can_select(self.board[sq], self.side_to_move)
    }

    /// Legal destinations for the piece on `sq`; empty unless it belongs to
    /// the side to move.
    pub fn legal_moves(&self, sq: Square) -> SquareSet {
        if self.can_select(sq) {
            movegen::legal_moves(&self.board, sq)
        } else {
            SquareSet::EMPTY
        }
    }

    /// Validate and play a move, then hand the turn to the other side.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] after checkmate,
    /// [`GameError::NotYourPiece`] when `from` holds nothing of the side to
    /// move, and [`GameError::IllegalMove`] when `to` is not a legal
    /// destination.
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if !self.can_select(mv.from()) {
            return Err(GameError::NotYourPiece {
                side: self.side_to_move,
                square: mv.from(),
            });
        }
        if !self.legal_moves(mv.from()).contains(mv.to()) {
            return Err(GameError::IllegalMove { mv });
        }

        let (board, record) = self.board.execute_recorded(mv);
        debug!(side = %self.side_to_move, mv = %mv, notation = %record.notation, "move played");

        self.snapshots.push(self.board);
        self.board = board;
        self.side_to_move = !self.side_to_move;
        self.status = status_for(&self.board, self.side_to_move);
        if let GameStatus::Checkmate { winner } = self.status {
            debug!(%winner, "checkmate");
        }

        self.history.push(record.clone());
        Ok(record)
    }

    /// Take back the last move, returning its record.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let board = self.snapshots.pop()?;
        let record = self.history.pop();
        self.board = board;
        self.side_to_move = !self.side_to_move;
        self.status = status_for(&self.board, self.side_to_move);
        record
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn status_for(board: &Board, side_to_move: Color) -> GameStatus {
    if is_checkmate(board, side_to_move) {
        GameStatus::Checkmate {
            winner: side_to_move.flip(),
        }
    } else {
        GameStatus::InProgress
    }
}
