//! Sliding piece (bishop, rook) move generation by ray scanning.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

/// A ray direction: the index step and the edge predicate that ends it.
type Ray = (i8, fn(Square) -> bool);

const ROOK_RAYS: [Ray; 4] = [
    (-8, Square::on_top_row),
    (8, Square::on_bottom_row),
    (-1, Square::on_left_edge),
    (1, Square::on_right_edge),
];

const BISHOP_RAYS: [Ray; 4] = [
    (-9, top_left),
    (-7, top_right),
    (7, bottom_left),
    (9, bottom_right),
];

fn top_left(sq: Square) -> bool {
    sq.on_top_row() || sq.on_left_edge()
}

fn top_right(sq: Square) -> bool {
    sq.on_top_row() || sq.on_right_edge()
}

fn bottom_left(sq: Square) -> bool {
    sq.on_bottom_row() || sq.on_left_edge()
}

fn bottom_right(sq: Square) -> bool {
    sq.on_bottom_row() || sq.on_right_edge()
}

pub(super) fn rook_moves(board: &Board, sq: Square, mover: Piece, attack_only: bool) -> SquareSet {
    rays(board, sq, mover, &ROOK_RAYS, attack_only)
}

pub(super) fn bishop_moves(board: &Board, sq: Square, mover: Piece, attack_only: bool) -> SquareSet {
    rays(board, sq, mover, &BISHOP_RAYS, attack_only)
}

fn rays(board: &Board, sq: Square, mover: Piece, rays: &[Ray], attack_only: bool) -> SquareSet {
    rays.iter()
        .fold(SquareSet::EMPTY, |acc, &(step, stop)| acc | scan(board, sq, mover, step, stop, attack_only))
}

/// Walk from `origin` by `step` until something is hit or `stop` reports
/// an edge.
///
/// The first non-empty square ends the ray and is included when `mover`
/// can capture it. Empty squares (markers included) are included unless
/// `attack_only` is set.
fn scan(
    board: &Board,
    origin: Square,
    mover: Piece,
    step: i8,
    stop: fn(Square) -> bool,
    attack_only: bool,
) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let mut current = origin;
    while !stop(current) {
        let Some(next) = current.offset(step) else {
            break;
        };
        let target = board[next];
        if !target.is_empty() {
            if mover.can_capture(target) {
                moves.insert(next);
            }
            break;
        }
        if !attack_only {
            moves.insert(next);
        }
        current = next;
    }
    moves
}
