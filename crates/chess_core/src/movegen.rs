use crate::{
    apply::*,
    attacks::{in_check, is_under_attack},
    board::Board,
    topology::TOPOLOGY,
    types::*,
};

/// All boards reachable by one move of the piece standing on `pos`.
///
/// `filter_checks` drops boards that leave the mover's king attacked. `quick`
/// skips castling and status bookkeeping; it is meant for reachability probes
/// and move counting, where the exact resulting board does not matter.
pub fn possible_moves_for_piece(
    board: &Board,
    pos: Position,
    filter_checks: bool,
    quick: bool,
) -> Vec<Board> {
    let info = board.get(pos);
    if info.is_empty() {
        return Vec::new();
    }
    let update_status = !quick;

    let mut out = Vec::with_capacity(16);
    if info.piece == Piece::Pawn {
        gen_pawn(board, pos, info, update_status, &mut out);
    } else {
        for step in reachable_steps(board, pos, info) {
            out.push(apply_simple_move(
                board,
                FullMove::new(pos, step),
                update_status,
            ));
        }
    }

    if !quick && info.piece == Piece::King {
        gen_castle(board, pos, info, &mut out);
    }

    if filter_checks {
        out.retain(|b| !in_check(b, info.color));
    }
    out
}

/// Union of `possible_moves_for_piece` over every piece of `color`.
pub fn all_possible_moves(
    board: &Board,
    color: Color,
    filter_checks: bool,
    quick: bool,
) -> Vec<Board> {
    let mut out = Vec::with_capacity(64);
    for pos in board.pieces_of(color) {
        out.extend(possible_moves_for_piece(board, pos, filter_checks, quick));
    }
    out
}

/// Number of moves available to `color`. Runs in quick mode, so castling is not
/// counted; a king able to castle can always step sideways instead.
pub fn possible_move_count(board: &Board, color: Color, filter_checks: bool) -> usize {
    board
        .pieces_of(color)
        .into_iter()
        .map(|pos| possible_moves_for_piece(board, pos, filter_checks, true).len())
        .sum()
}

/// True if `candidate` is one of the legal results of moving the piece on `origin`.
pub fn is_legal_result(board: &Board, origin: Position, candidate: &Board) -> bool {
    possible_moves_for_piece(board, origin, true, false).contains(candidate)
}

/// Steps along the piece's rays up to the first blocker. Enemy blockers are
/// included as captures, except for pawns, whose rays only push.
fn reachable_steps(board: &Board, from: Position, info: SquareContent) -> Vec<Move> {
    let mut steps = Vec::new();
    for ray in TOPOLOGY.rays(info.color, info.piece) {
        for &step in ray {
            let to = from.offset(step);
            if !to.in_board() {
                break;
            }
            let here = board.get(to);
            if here.is_empty() {
                steps.push(step);
                continue;
            }
            if here.color != info.color && info.piece != Piece::Pawn {
                steps.push(step);
            }
            break;
        }
    }
    steps
}

fn gen_pawn(
    board: &Board,
    from: Position,
    info: SquareContent,
    update_status: bool,
    out: &mut Vec<Board>,
) {
    // The pawn ray is [single, double]; the double push only counts from the start row.
    let mut pushes = reachable_steps(board, from, info);
    if from.y != info.color.pawn_row() {
        pushes.truncate(1);
    }
    for step in pushes {
        push_pawn_move(board, FullMove::new(from, step), false, update_status, out);
    }

    let dy = info.color.forward();
    if !(0..8).contains(&(from.y + dy)) {
        return;
    }
    for dx in [-1, 1] {
        let mv = FullMove::new(from, Move::new(dx, dy));
        let to = mv.to();
        if !to.in_board() {
            continue;
        }
        let target = board.get(to);
        if !target.is_empty() {
            if target.color != info.color {
                push_pawn_move(board, mv, false, update_status, out);
            }
            continue;
        }
        let passed = board.get(Position::new(to.x, from.y));
        if passed.piece == Piece::Pawn
            && passed.color != info.color
            && passed.status == PieceStatus::EN_PASSANT_ALLOWED
        {
            push_pawn_move(board, mv, true, update_status, out);
        }
    }
}

/// Adds a pawn move, expanding it into the four promotions when it reaches the
/// last row.
fn push_pawn_move(
    board: &Board,
    mv: FullMove,
    en_passant: bool,
    update_status: bool,
    out: &mut Vec<Board>,
) {
    let to = mv.to();
    if to.y != 0 && to.y != 7 {
        out.push(if en_passant {
            apply_en_passant(board, mv, update_status)
        } else {
            apply_simple_move(board, mv, update_status)
        });
        return;
    }
    for promotion in Promotion::ALL {
        out.push(apply_pawn_promotion(board, mv, promotion, update_status));
    }
}

fn gen_castle(board: &Board, king_pos: Position, king: SquareContent, out: &mut Vec<Board>) {
    if king.status != PieceStatus::Default {
        return;
    }
    for side in CastlingSide::ALL {
        if can_castle(board, king_pos, king, side) {
            out.push(apply_castling(board, king_pos, side));
        }
    }
}

fn can_castle(board: &Board, king_pos: Position, king: SquareContent, side: CastlingSide) -> bool {
    let dir = side.direction();
    let rook_pos = Position::new(side.rook_x(), king_pos.y);

    // The king needs two squares of travel strictly before the rook.
    if (rook_pos.x - king_pos.x) * dir < 3 {
        return false;
    }

    let rook = board.get(rook_pos);
    if rook.piece != Piece::Rook || rook.status != PieceStatus::Default || rook.color != king.color
    {
        return false;
    }

    let mut x = king_pos.x + dir;
    while x != rook_pos.x {
        if !board.get(Position::new(x, king_pos.y)).is_empty() {
            return false;
        }
        x += dir;
    }

    // Not out of, through, or into check.
    (0..3).all(|i| {
        let square = Position::new(king_pos.x + i * dir, king_pos.y);
        !is_under_attack(board, square, king.color)
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
