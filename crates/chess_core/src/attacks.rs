//! Attack detection.
//!
//! The probe walks the topology rays from each enemy piece instead of building
//! enemy boards, and treats the probed square as occupied by a defender:
//! sliders stop on it, pawns take it diagonally, and pawn pushes never reach it.
//!
//! This is not the same as asking whether the unfiltered generator could move
//! an enemy piece onto the square. For an empty square the generator offers
//! pawn pushes and no pawn diagonals, so a castling transit square in front of
//! an enemy pawn would count as attacked and one on its diagonal would not. The
//! probe gives the chess answer in both cases. For an occupied square, such as
//! a king in check, the two agree.

use crate::{board::Board, topology::TOPOLOGY, types::*};

/// Returns true if any piece of `color`'s opponent could move onto `pos`.
pub fn is_under_attack(board: &Board, pos: Position, color: Color) -> bool {
    let enemy = color.other();
    board
        .pieces_of(enemy)
        .into_iter()
        .any(|from| reaches(board, from, board.get(from), pos))
}

/// Returns true if the king of `color` is attacked. Panics if that king is missing.
pub fn in_check(board: &Board, color: Color) -> bool {
    is_under_attack(board, board.king_position(color), color)
}

fn reaches(board: &Board, from: Position, attacker: SquareContent, target: Position) -> bool {
    if attacker.piece == Piece::Pawn {
        let dy = attacker.color.forward();
        return target.y == from.y + dy && (target.x - from.x).abs() == 1;
    }

    for ray in TOPOLOGY.rays(attacker.color, attacker.piece) {
        for &step in ray {
            let to = from.offset(step);
            if to == target {
                return true;
            }
            if !to.in_board() || !board.get(to).is_empty() {
                break;
            }
        }
    }
    false
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
