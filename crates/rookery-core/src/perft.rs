//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::legal_moves;

/// Every legal move of `side`, in origin-then-destination index order.
fn all_moves(board: &Board, side: Color) -> Vec<Move> {
    board
        .squares_of(side)
        .flat_map(|from| legal_moves(board, from).iter().map(move |to| Move::new(from, to)))
        .collect()
}

/// Count the number of leaf nodes at the given depth, `side` to move first.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves (bulk counting: no executions at the last ply).
pub fn perft(board: &Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&board.execute(mv.from(), mv.to()), side.flip(), depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted by coordinate notation.
pub fn divide(board: &Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = all_moves(board, side)
        .into_iter()
        .map(|mv| {
            let child = board.execute(mv.from(), mv.to());
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.flip(), depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
