//! Static move topology: for every color and piece, the rays of relative steps
//! that piece could take on an empty board.
//!
//! Each ray is ordered so that step `n` is only reachable when step `n - 1` was.
//! Sliding pieces get one ray per direction; a blocker on an early step cuts off
//! every later step in the same ray. Pawn double pushes live in the same ray as
//! the single push for the same reason.
//!
//! The table is built once and never mutated, so it can be shared freely.

use std::sync::LazyLock;

use crate::types::{Color, Move, Piece};

pub type Ray = Vec<Move>;

pub struct MoveTopology {
    /// Indexed by `[color][piece]`.
    rays: [[Vec<Ray>; 7]; 2],
}

impl Default for MoveTopology {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTopology {
    pub fn new() -> Self {
        MoveTopology {
            rays: [Self::color_table(Color::White), Self::color_table(Color::Black)],
        }
    }

    /// Rays for `piece` of `color`, in generation order.
    #[inline(always)]
    pub fn rays(&self, color: Color, piece: Piece) -> &[Ray] {
        &self.rays[color.idx()][piece.idx()]
    }

    fn color_table(color: Color) -> [Vec<Ray>; 7] {
        let forward = color.forward();
        let pawn = vec![vec![Move::new(0, forward), Move::new(0, 2 * forward)]];

        let rook = sliding(&[(0, 1), (0, -1), (1, 0), (-1, 0)]);
        let bishop = sliding(&[(1, 1), (-1, -1), (1, -1), (-1, 1)]);

        let queen: Vec<Ray> = rook.iter().chain(bishop.iter()).cloned().collect();
        let king: Vec<Ray> = queen.iter().map(|ray| vec![ray[0]]).collect();

        let knight = [
            (-2, -1),
            (-1, -2),
            (2, 1),
            (1, 2),
            (-2, 1),
            (-1, 2),
            (2, -1),
            (1, -2),
        ]
        .iter()
        .map(|&(dx, dy)| vec![Move::new(dx, dy)])
        .collect();

        let mut table: [Vec<Ray>; 7] = Default::default();
        table[Piece::Pawn.idx()] = pawn;
        table[Piece::Rook.idx()] = rook;
        table[Piece::Knight.idx()] = knight;
        table[Piece::Bishop.idx()] = bishop;
        table[Piece::King.idx()] = king;
        table[Piece::Queen.idx()] = queen;
        table
    }
}

fn sliding(directions: &[(i8, i8)]) -> Vec<Ray> {
    directions
        .iter()
        .map(|&(dx, dy)| (1..8).map(|i| Move::new(dx * i, dy * i)).collect())
        .collect()
}

/// Process-wide topology, built on first use.
pub static TOPOLOGY: LazyLock<MoveTopology> = LazyLock::new(MoveTopology::new);

#[cfg(test)]
#[path = "topology_tests.rs"]
mod topology_tests;
