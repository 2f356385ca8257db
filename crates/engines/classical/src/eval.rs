//! Mobility and material evaluation.

use chessai_core::{game_status, possible_move_count, Board, Color, GameStatus, Piece};

/// Score of a drawn position, whoever evaluates it.
pub const DRAW_SCORE: i32 = -100;
/// Score of a won position; a lost one scores its negation.
pub const MATE_SCORE: i32 = 1000;

/// Material value of a piece kind.
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::King => 1000,
        Piece::Queen => 9,
        Piece::Rook => 5,
        Piece::Knight => 3,
        Piece::Bishop => 3,
        Piece::Pawn => 1,
        Piece::Empty => 0,
    }
}

/// Sum of the material values of every piece of `color`.
pub fn material(board: &Board, color: Color) -> i32 {
    board
        .pieces_of(color)
        .into_iter()
        .map(|pos| piece_value(board.get(pos).piece))
        .sum()
}

/// Evaluates `board` from `color`'s perspective, `color` being the side to move.
///
/// Finished games score `DRAW_SCORE` or `±MATE_SCORE`. Otherwise the score is
/// the mobility difference plus twice the material difference.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let moves = possible_move_count(board, color, true) as i32;

    match game_status(board, color, moves as usize) {
        GameStatus::Draw => return DRAW_SCORE,
        GameStatus::Won(winner) if winner == color => return MATE_SCORE,
        GameStatus::Won(_) => return -MATE_SCORE,
        GameStatus::InProgress => {}
    }

    let enemy_moves = possible_move_count(board, color.other(), true) as i32;
    let mobility = moves - enemy_moves;
    let material = material(board, color) - material(board, color.other());
    mobility + material * 2
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
