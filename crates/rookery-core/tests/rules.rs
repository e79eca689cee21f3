//! Integration tests for the rules engine through its public API.
//!
//! Covers the starting position, one-way execution, the en passant marker
//! lifecycle, castling for both colors, checkmate, and agreement between
//! the attack oracle and a brute-force scan.

use rookery_core::{
    Board, Color, Piece, PieceKind, Square, attack_set, can_castle, can_select, is_attacked,
    is_checkmate, is_in_check, legal_moves,
};

const CASTLING: &str = "r3k2r/8/8/8/8/8/8/R3K2R KQkq -";

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R KQkq -";

const OPEN_CENTER: &str = "r1bq1rk1/ppp2ppp/2n2n2/3pp3/1bPP4/2N1PN2/PP3PPP/R1BQKB1R KQ -";

const MARKER_POSITION: &str = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR KQkq d6";

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Execute a sequence of coordinate moves from `board`.
fn play(board: Board, moves: &[&str]) -> Board {
    moves.iter().fold(board, |b, m| b.execute(sq(&m[..2]), sq(&m[2..])))
}

// ── Starting position ─────────────────────────────────────────────────────────

#[test]
fn starting_position_moves_per_square() {
    let board = Board::starting_position();
    for square in Square::all() {
        let piece = board[square];
        let moves = legal_moves(&board, square);
        match piece.kind() {
            Some(PieceKind::Pawn) => {
                assert_eq!(moves.len(), 2, "pawn on {square} should have two advances");
                assert!(moves.iter().all(|to| to.col() == square.col()));
            }
            Some(PieceKind::Knight) => assert_eq!(moves.len(), 2, "knight on {square}"),
            Some(_) => assert!(moves.is_empty(), "{piece:?} on {square} should be blocked"),
            None => assert!(moves.is_empty(), "empty {square} should have no moves"),
        }
    }
}

#[test]
fn selection_follows_side_to_move() {
    let board = Board::starting_position();
    assert!(can_select(board[sq("e2")], Color::White));
    assert!(!can_select(board[sq("e7")], Color::White));
    assert!(can_select(board[sq("e7")], Color::Black));
    assert!(!can_select(board[sq("e4")], Color::Black));
}

// ── Execution is one-way ──────────────────────────────────────────────────────

#[test]
fn undoing_a_capture_geometrically_does_not_restore() {
    let board: Board = "4k3/8/8/3p4/4P3/8/8/4K3".parse().unwrap();
    let there = board.execute(sq("e4"), sq("d5"));
    let back = there.execute(sq("d5"), sq("e4"));
    assert_ne!(back, board);
}

#[test]
fn undoing_a_rook_move_does_not_restore_the_castle_flag() {
    let board: Board = CASTLING.parse().unwrap();
    let back = play(board, &["h1h4", "h4h1"]);
    assert_ne!(back, board);
    assert_eq!(back[sq("h1")], Piece::WHITE_ROOK);
    assert!(!can_castle(&back, sq("e1")).king_side);
    assert!(can_castle(&back, sq("e1")).queen_side);
}

#[test]
fn execute_never_mutates_its_input() {
    let board: Board = KIWIPETE.parse().unwrap();
    let copy = board;
    let _ = board.execute(sq("e1"), sq("g1"));
    let _ = board.execute(sq("d5"), sq("e6"));
    assert_eq!(board, copy);
}

// ── En passant ────────────────────────────────────────────────────────────────

#[test]
fn en_passant_marker_lifecycle() {
    let board = play(Board::starting_position(), &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(board[sq("d6")], Piece::BLACK_MARKER);
    assert_eq!(board.markers().count(), 1);
    assert!(legal_moves(&board, sq("e5")).contains(sq("d6")));

    // Taken right away: the capturing pawn lands on the marker, the d5 pawn is gone.
    let taken = board.execute(sq("e5"), sq("d6"));
    assert_eq!(taken[sq("d6")], Piece::WHITE_PAWN);
    assert!(taken[sq("d5")].is_vacant());
    assert_eq!(taken.markers().count(), 0);

    // Any other move clears it.
    let ignored = board.execute(sq("a2"), sq("a3"));
    assert_eq!(ignored.markers().count(), 0);
    assert_eq!(ignored[sq("d5")], Piece::BLACK_PAWN);
}

#[test]
fn en_passant_from_layout() {
    let board: Board = MARKER_POSITION.parse().unwrap();
    let after = board.execute(sq("e5"), sq("d6"));
    assert_eq!(after.squares_of(Color::Black).count(), 15);
}

#[test]
fn marker_expires_after_one_reply() {
    let board = play(Board::starting_position(), &["e2e4", "d7d5", "e4e5", "f7f5"]);
    assert_eq!(board.markers().collect::<Vec<_>>(), vec![sq("f6")]);
    assert!(legal_moves(&board, sq("e5")).contains(sq("f6")));
    let later = play(board, &["g1f3", "a7a6"]);
    assert!(!legal_moves(&later, sq("e5")).contains(sq("f6")));
}

// ── Castling ──────────────────────────────────────────────────────────────────

#[test]
fn castling_available_for_both_colors() {
    let board: Board = CASTLING.parse().unwrap();
    for king in [sq("e1"), sq("e8")] {
        let options = can_castle(&board, king);
        assert!(options.king_side && options.queen_side, "king on {king}");
    }
}

#[test]
fn castling_relocates_king_and_rook() {
    let board: Board = CASTLING.parse().unwrap();
    let cases = [
        ("e1", "g1", "h1", "f1", Piece::WHITE_KING, Piece::WHITE_ROOK),
        ("e1", "c1", "a1", "d1", Piece::WHITE_KING, Piece::WHITE_ROOK),
        ("e8", "g8", "h8", "f8", Piece::BLACK_KING, Piece::BLACK_ROOK),
        ("e8", "c8", "a8", "d8", Piece::BLACK_KING, Piece::BLACK_ROOK),
    ];
    for (from, to, rook_from, rook_to, king, rook) in cases {
        assert!(legal_moves(&board, sq(from)).contains(sq(to)), "{from}{to} should be legal");
        let after = board.execute(sq(from), sq(to));
        assert_eq!(after[sq(to)], king, "{from}{to}: king");
        assert_eq!(after[sq(rook_to)], rook, "{from}{to}: rook");
        assert!(after[sq(from)].is_vacant(), "{from}{to}: king origin");
        assert!(after[sq(rook_from)].is_vacant(), "{from}{to}: rook origin");
    }
}

#[test]
fn castling_blocked_by_pieces_between() {
    let board: Board = "rn2k1nr/8/8/8/8/8/8/RN2K1NR KQkq -".parse().unwrap();
    for king in [sq("e1"), sq("e8")] {
        assert!(!can_castle(&board, king).any(), "king on {king}");
        assert!(!legal_moves(&board, king).contains(sq("g1")));
    }
}

#[test]
fn castling_blocked_by_attacked_path() {
    // Black rook on f2 covers f1; white rook on d2 covers d8.
    let board: Board = "r3k2r/8/8/8/8/8/3R1r2/R3K2R KQkq -".parse().unwrap();
    let white = can_castle(&board, sq("e1"));
    assert!(!white.king_side);
    assert!(white.queen_side);
    let black = can_castle(&board, sq("e8"));
    assert!(!black.queen_side);
    assert!(black.king_side);
}

#[test]
fn castling_blocked_by_attacked_destination() {
    // Black bishop on c5 covers g1.
    let board: Board = "4k3/8/8/2b5/8/8/8/4K2R K -".parse().unwrap();
    assert!(!can_castle(&board, sq("e1")).king_side);
    assert!(!legal_moves(&board, sq("e1")).contains(sq("g1")));
}

// ── Checkmate ─────────────────────────────────────────────────────────────────

#[test]
fn fools_mate() {
    let board = play(Board::starting_position(), &["f2f3", "e7e5", "g2g4"]);
    assert!(!is_checkmate(&board, Color::White));
    let board = play(board, &["d8h4"]);
    assert_eq!(board[sq("h4")], Piece::BLACK_QUEEN);
    assert!(is_in_check(&board, Color::White));
    assert!(is_checkmate(&board, Color::White));
    assert!(!is_checkmate(&board, Color::Black));
}

#[test]
fn scholars_mate() {
    let board = play(
        Board::starting_position(),
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert!(is_checkmate(&board, Color::Black));
}

// ── Oracle agrees with brute force ────────────────────────────────────────────

fn brute_force_attacked(board: &Board, target: Square, color: Color) -> bool {
    Square::all().any(|from| {
        let piece = board[from];
        !piece.is_empty() && piece.color() == Some(!color) && attack_set(board, from).contains(target)
    })
}

#[test]
fn oracle_matches_brute_force() {
    let positions = [
        Board::starting_position(),
        CASTLING.parse().unwrap(),
        KIWIPETE.parse().unwrap(),
        OPEN_CENTER.parse().unwrap(),
        MARKER_POSITION.parse().unwrap(),
        play(Board::starting_position(), &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3"]),
    ];
    for board in positions {
        for target in Square::all() {
            for color in Color::ALL {
                assert_eq!(
                    is_attacked(&board, target, color),
                    brute_force_attacked(&board, target, color),
                    "{color} on {target} in {board:?}"
                );
            }
        }
    }
}
