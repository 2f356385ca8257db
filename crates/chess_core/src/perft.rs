use crate::{board::Board, movegen::all_possible_moves, types::Color};

/// Pure perft node count.
/// Counts all legal boards reachable from `board` in exactly `depth` plies,
/// starting with `color` to move.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let children = all_possible_moves(board, color, true, false);
    if depth == 1 {
        return children.len() as u64;
    }

    children
        .iter()
        .map(|child| perft(child, color.other(), depth - 1))
        .sum()
}
