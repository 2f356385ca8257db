//! Move application. Every function takes a board by reference and returns the
//! resulting board; none of them checks legality.

use crate::{board::Board, types::*};

/// Moves one piece by `mv`, capturing whatever stands on the target square.
///
/// With `update_status` set this also does the castling/en-passant bookkeeping:
/// the mover's pawns lose any en-passant flag from the previous ply, a king or
/// rook loses its castling rights, and a pawn is flagged after a double push and
/// cleared after a single push. Castling and en-passant captures have their own
/// functions.
pub fn apply_simple_move(board: &Board, mv: FullMove, update_status: bool) -> Board {
    let mut moved = board.get(mv.from);
    let mut next = *board;

    if update_status {
        next = clear_en_passant(next, moved.color);
        match moved.piece {
            Piece::King | Piece::Rook => moved.status = PieceStatus::CASTLING_REVOKED,
            Piece::Pawn if mv.step.dy.abs() == 2 => {
                moved.status = PieceStatus::EN_PASSANT_ALLOWED;
            }
            Piece::Pawn if mv.step.dy.abs() == 1 => moved.status = PieceStatus::Default,
            _ => {}
        }
    }

    next.set(mv.from, SquareContent::EMPTY).set(mv.to(), moved)
}

/// Castles the king at `king_pos` towards `side`. The caller has already checked
/// that castling is allowed.
pub fn apply_castling(board: &Board, king_pos: Position, side: CastlingSide) -> Board {
    let king = board.get(king_pos);
    let dir = side.direction();
    let rook_pos = Position::new(side.rook_x(), king_pos.y);
    // The rook lands on the square the king crosses.
    let rook_step = Move::new(king_pos.x + dir - rook_pos.x, 0);

    let next = board
        .set(
            rook_pos,
            SquareContent::new(Piece::Rook, PieceStatus::CASTLING_REVOKED, king.color),
        )
        .set(
            king_pos,
            SquareContent::new(king.piece, PieceStatus::CASTLING_REVOKED, king.color),
        );

    let next = apply_simple_move(&next, FullMove::new(rook_pos, rook_step), true);
    apply_simple_move(&next, FullMove::new(king_pos, Move::new(2 * dir, 0)), true)
}

/// Diagonal pawn move onto an empty square, removing the enemy pawn beside the
/// mover's starting square.
pub fn apply_en_passant(board: &Board, mv: FullMove, update_status: bool) -> Board {
    let to = mv.to();
    apply_simple_move(board, mv, update_status)
        .set(Position::new(to.x, mv.from.y), SquareContent::EMPTY)
}

pub fn apply_pawn_promotion(
    board: &Board,
    mv: FullMove,
    promotion: Promotion,
    update_status: bool,
) -> Board {
    let pawn = board.get(mv.from);
    apply_simple_move(board, mv, update_status).set(
        mv.to(),
        SquareContent::new(promotion.piece(), promotion.status(), pawn.color),
    )
}

/// Clears the en-passant flag on every pawn of `color`.
fn clear_en_passant(mut board: Board, color: Color) -> Board {
    for pos in board.pieces(Piece::Pawn, color) {
        let pawn = board.get(pos);
        if pawn.status != PieceStatus::Default {
            board = board.set(pos, SquareContent::piece(Piece::Pawn, color));
        }
    }
    board
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
