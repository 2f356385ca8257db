use super::*;
use crate::fen::parse_fen;

fn setup(fen: &str) -> (Board, Color) {
    let s = parse_fen(fen).expect("valid FEN");
    (s.board, s.side_to_move)
}

fn pos(x: i8, y: i8) -> Position {
    Position::new(x, y)
}

#[test]
fn test_startpos_moves() {
    let board = Board::initial(false);
    // Starting position has 20 legal moves for either side
    for color in Color::ALL {
        let moves = all_possible_moves(&board, color, true, false);
        assert_eq!(moves.len(), 20);
        assert_eq!(possible_move_count(&board, color, true), 20);
    }
}

#[test]
fn test_startpos_move_split() {
    let board = Board::initial(false);
    let pawn_moves: usize = board
        .pieces(Piece::Pawn, Color::White)
        .into_iter()
        .map(|p| possible_moves_for_piece(&board, p, true, false).len())
        .sum();
    let knight_moves: usize = board
        .pieces(Piece::Knight, Color::White)
        .into_iter()
        .map(|p| possible_moves_for_piece(&board, p, true, false).len())
        .sum();
    assert_eq!(pawn_moves, 16);
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let (board, color) =
        setup("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let moves = all_possible_moves(&board, color, true, false);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::initial(false);
    assert!(possible_moves_for_piece(&board, pos(4, 4), true, false).is_empty());
}

#[test]
fn test_rook_blocked_by_friend_and_stops_at_enemy() {
    let (board, _) = setup("4k3/8/8/3p4/8/8/3P4/R2RK3 w - -");
    // Rook on d1 (3, 7): d2 friendly blocks upward; c1 and b1 free to the left, e1 is the king.
    let moves = possible_moves_for_piece(&board, pos(3, 7), false, false);
    assert_eq!(moves.len(), 2);

    let (board, _) = setup("4k3/8/8/3p4/8/8/8/3RK3 w - -");
    // Up the d-file: d2, d3, d4, then the capture on d5.
    let up: Vec<Board> = possible_moves_for_piece(&board, pos(3, 7), false, false)
        .into_iter()
        .filter(|b| b.get(pos(3, 7)).is_empty() && b.pieces(Piece::Rook, Color::White)[0].x == 3)
        .collect();
    assert_eq!(up.len(), 4);
    assert!(up.iter().any(|b| b.pieces(Piece::Pawn, Color::Black).is_empty()));
}

#[test]
fn test_pawn_cannot_capture_forward() {
    let (board, _) = setup("4k3/8/8/8/8/4p3/4P3/4K3 w - -");
    assert!(possible_moves_for_piece(&board, pos(4, 6), true, false).is_empty());
}

#[test]
fn test_double_push_only_from_start_row() {
    let (board, _) = setup("4k3/8/8/8/8/4P3/8/4K3 w - -");
    assert_eq!(
        possible_moves_for_piece(&board, pos(4, 5), true, false).len(),
        1
    );

    let (board, _) = setup("4k3/8/8/8/4p3/8/4P3/4K3 w - -");
    // Double push blocked on its landing square.
    assert_eq!(
        possible_moves_for_piece(&board, pos(4, 6), true, false).len(),
        1
    );

    let (board, _) = setup("4k3/8/8/8/8/4p3/4P3/4K3 w - -");
    // Single push blocked cuts off the double push too.
    assert!(possible_moves_for_piece(&board, pos(4, 6), true, false).is_empty());
}

#[test]
fn test_filter_removes_moves_exposing_king() {
    // The knight on e2 is pinned against the king by the rook on e8.
    let (board, _) = setup("4r1k1/8/8/8/8/8/4N3/4K3 w - -");
    let knight = pos(4, 6);
    assert!(possible_moves_for_piece(&board, knight, true, false).is_empty());
    let unfiltered = possible_moves_for_piece(&board, knight, false, false);
    assert_eq!(unfiltered.len(), 6);
    assert!(unfiltered.iter().all(|b| in_check(b, Color::White)));
}

#[test]
fn test_filtered_moves_never_leave_king_attacked() {
    let (board, color) =
        setup("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    for b in all_possible_moves(&board, color, true, false) {
        assert!(!in_check(&b, color));
    }
    let unfiltered = all_possible_moves(&board, color, false, false);
    assert!(unfiltered.len() >= 48);
}

#[test]
fn test_promotion_yields_four_boards() {
    let (board, _) = setup("4k3/1P6/8/8/8/8/8/4K3 w - -");
    let moves = possible_moves_for_piece(&board, pos(1, 1), true, false);
    assert_eq!(moves.len(), 4);
    let mut pieces: Vec<Piece> = moves.iter().map(|b| b.get(pos(1, 0)).piece).collect();
    pieces.sort_by_key(|p| p.code());
    assert_eq!(
        pieces,
        vec![Piece::Rook, Piece::Knight, Piece::Bishop, Piece::Queen]
    );
    assert!(moves.iter().all(|b| b.pieces(Piece::Pawn, Color::White).is_empty()));
}

#[test]
fn test_promotion_by_capture() {
    let (board, _) = setup("r3k3/1P6/8/8/8/8/8/4K3 w - -");
    // Push to b8 (4) plus capture on a8 (4).
    let moves = possible_moves_for_piece(&board, pos(1, 1), true, false);
    assert_eq!(moves.len(), 8);
}

#[test]
fn test_en_passant_available_exactly_once() {
    let (board, _) = setup("4k3/3p4/8/4P3/8/8/8/4K3 b - -");
    // Black double-pushes d7-d5 next to the white pawn on e5.
    let pushed = apply_simple_move(&board, FullMove::new(pos(3, 1), Move::new(0, 2)), true);
    assert_eq!(
        pushed.get(pos(3, 3)).status,
        PieceStatus::EN_PASSANT_ALLOWED
    );

    let captures: Vec<Board> = possible_moves_for_piece(&pushed, pos(4, 3), true, false)
        .into_iter()
        .filter(|b| b.pieces(Piece::Pawn, Color::Black).is_empty())
        .collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].get(pos(3, 2)).piece, Piece::Pawn);

    // White plays something else; Black moves; the chance is gone.
    let waited = apply_simple_move(&pushed, FullMove::new(pos(4, 7), Move::new(1, 0)), true);
    let waited = apply_simple_move(&waited, FullMove::new(pos(4, 0), Move::new(1, 0)), true);
    assert_eq!(waited.get(pos(3, 3)).status, PieceStatus::Default);
    let moves = possible_moves_for_piece(&waited, pos(4, 3), true, false);
    assert!(moves.iter().all(|b| !b.pieces(Piece::Pawn, Color::Black).is_empty()));
}

#[test]
fn test_en_passant_requires_flag() {
    // Same geometry, but the black pawn did not just double-push.
    let (board, _) = setup("4k3/8/8/3pP3/8/8/8/4K3 w - -");
    let moves = possible_moves_for_piece(&board, pos(4, 3), true, false);
    assert_eq!(moves.len(), 1);
}

#[test]
fn test_en_passant_from_fen() {
    let (board, _) = setup("4k3/8/8/3pP3/8/8/8/4K3 w - d6");
    let moves = possible_moves_for_piece(&board, pos(4, 3), true, false);
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_castling_both_sides_available() {
    let (board, color) = setup("4k3/8/8/8/8/8/8/R3K2R w KQ -");
    let king_moves = possible_moves_for_piece(&board, pos(4, 7), true, false);
    // 5 single steps + 2 castles
    assert_eq!(king_moves.len(), 7);
    let castled: Vec<&Board> = king_moves
        .iter()
        .filter(|b| b.get(pos(4, 7)).is_empty() && (b.king_position(color).x - 4).abs() == 2)
        .collect();
    assert_eq!(castled.len(), 2);
    for b in castled {
        let king = b.get(b.king_position(color));
        assert_eq!(king.status, PieceStatus::CASTLING_REVOKED);
        for rook in b.pieces(Piece::Rook, color) {
            if rook.x == 3 || rook.x == 5 {
                assert_eq!(b.get(rook).status, PieceStatus::CASTLING_REVOKED);
            }
        }
    }
}

#[test]
fn test_castling_not_counted_in_quick_mode() {
    let (board, _) = setup("4k3/8/8/8/8/8/8/R3K2R w KQ -");
    assert_eq!(
        possible_moves_for_piece(&board, pos(4, 7), true, true).len(),
        5
    );
}

#[test]
fn test_castling_blocked_by_piece() {
    let (board, _) = setup("4k3/8/8/8/8/8/8/RN2K1NR w KQ -");
    let king_moves = possible_moves_for_piece(&board, pos(4, 7), true, false);
    assert_eq!(king_moves.len(), 5);
}

#[test]
fn test_castling_blocked_after_rook_moved() {
    let (board, _) = setup("4k3/8/8/8/8/8/8/R3K2R w KQ -");
    let rook_out = apply_simple_move(&board, FullMove::new(pos(7, 7), Move::new(0, -1)), true);
    let rook_back = apply_simple_move(&rook_out, FullMove::new(pos(7, 6), Move::new(0, 1)), true);
    let king_moves = possible_moves_for_piece(&rook_back, pos(4, 7), true, false);
    // Only queen side remains.
    assert_eq!(king_moves.len(), 6);
    assert!(king_moves.iter().any(|b| b.get(pos(2, 7)).piece == Piece::King));
    assert!(!king_moves.iter().any(|b| b.get(pos(6, 7)).piece == Piece::King));
}

#[test]
fn test_castling_blocked_after_king_moved() {
    let (board, _) = setup("4k3/8/8/8/8/8/8/R3K2R w - -");
    let king_moves = possible_moves_for_piece(&board, pos(4, 7), true, false);
    assert_eq!(king_moves.len(), 5);
}

#[test]
fn test_castling_blocked_by_attacks() {
    // Rook on f8 attacks f1, which the king would cross going king side.
    let (board, _) = setup("4kr2/8/8/8/8/8/8/R3K2R w KQ -");
    let king_moves = possible_moves_for_piece(&board, pos(4, 7), true, false);
    assert!(king_moves.iter().any(|b| b.get(pos(2, 7)).piece == Piece::King));
    assert!(!king_moves.iter().any(|b| b.get(pos(6, 7)).piece == Piece::King));

    // In check: no castling at all.
    let (board, _) = setup("4r1k1/8/8/8/8/8/8/R3K2R w KQ -");
    let king_moves = possible_moves_for_piece(&board, pos(4, 7), true, false);
    assert!(!king_moves.iter().any(|b| b.get(pos(2, 7)).piece == Piece::King));
    assert!(!king_moves.iter().any(|b| b.get(pos(6, 7)).piece == Piece::King));

    // A pawn eyeing the empty transit square d1 also forbids queen side castling.
    let (board, _) = setup("4k3/8/8/8/8/8/4p3/R3K2R w KQ -");
    let king_moves = possible_moves_for_piece(&board, pos(4, 7), true, false);
    assert!(!king_moves.iter().any(|b| b.get(pos(2, 7)).piece == Piece::King));
}

#[test]
fn test_queen_side_castling_ignores_attack_on_b_file() {
    // b1 must be empty but may be attacked.
    let (board, _) = setup("1r2k3/8/8/8/8/8/8/R3K3 w Q -");
    let king_moves = possible_moves_for_piece(&board, pos(4, 7), true, false);
    assert!(king_moves.iter().any(|b| b.get(pos(2, 7)).piece == Piece::King));
}

#[test]
fn test_is_legal_result() {
    let board = Board::initial(false);
    let e4 = apply_simple_move(&board, FullMove::new(pos(4, 6), Move::new(0, -2)), true);
    assert!(is_legal_result(&board, pos(4, 6), &e4));

    let e5 = apply_simple_move(&board, FullMove::new(pos(4, 6), Move::new(0, -3)), true);
    assert!(!is_legal_result(&board, pos(4, 6), &e5));

    // Right move, wrong bookkeeping: the double push must carry the en-passant flag.
    let unflagged = apply_simple_move(&board, FullMove::new(pos(4, 6), Move::new(0, -2)), false);
    assert!(!is_legal_result(&board, pos(4, 6), &unflagged));
}

#[test]
fn test_is_legal_result_rejects_self_check() {
    let (board, _) = setup("4r1k1/8/8/8/8/8/4N3/4K3 w - -");
    let moved = apply_simple_move(&board, FullMove::new(pos(4, 6), Move::new(1, -2)), true);
    assert!(!is_legal_result(&board, pos(4, 6), &moved));
}
