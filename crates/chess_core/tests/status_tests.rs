//! Game status tests: checkmate, stalemate and positions still in play.

use chessai_core::{
    Board, Color, GameStatus, game_status, in_check, parse_fen, possible_move_count,
};

fn status_of(fen: &str) -> GameStatus {
    let setup = parse_fen(fen).unwrap();
    let moves = possible_move_count(&setup.board, setup.side_to_move, true);
    game_status(&setup.board, setup.side_to_move, moves)
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let fen = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1";
    let setup = parse_fen(fen).unwrap();
    assert!(!in_check(&setup.board, Color::Black));
    assert_eq!(status_of(fen), GameStatus::Draw);
    assert!(status_of(fen).is_draw());
    assert_eq!(status_of(fen).winner(), None);
}

#[test]
fn test_stalemate_blocked_pawn() {
    // Black king on a8 boxed in by the king on b6; the pawn on a7 blocks it
    let fen = "k7/P7/1K6/8/8/8/8/8 b - - 0 1";
    assert_eq!(status_of(fen), GameStatus::Draw);
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_back_rank_mate() {
    let fen = "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1";
    assert_eq!(status_of(fen), GameStatus::Won(Color::White));
    assert!(status_of(fen).is_finished());
}

#[test]
fn test_fools_mate() {
    let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    assert_eq!(status_of(fen), GameStatus::Won(Color::Black));
}

// =============================================================================
// In progress
// =============================================================================

#[test]
fn test_check_with_escape_is_in_progress() {
    let fen = "4k3/8/8/8/8/8/8/q3K3 w - -";
    assert_eq!(status_of(fen), GameStatus::InProgress);
    assert!(!status_of(fen).is_finished());
}

#[test]
fn test_initial_board_in_progress() {
    let board = Board::initial(false);
    for color in Color::ALL {
        let moves = possible_move_count(&board, color, true);
        assert_eq!(game_status(&board, color, moves), GameStatus::InProgress);
    }
}

#[test]
fn test_zero_moves_decides_by_check() {
    // The move count is taken at face value.
    let board = Board::initial(false);
    assert_eq!(game_status(&board, Color::White, 0), GameStatus::Draw);
}
