//! Packed board representation.
//!
//! A board is five 64-bit planes with one bit per square (bit index `x + 8 * y`):
//! - planes 0, 1 and 2 hold the 3-bit piece code
//! - plane 3 holds the status flag
//! - plane 4 holds the color (set = Black)
//!
//! An empty square is all zero bits, so equal positions are always bit-identical
//! and a `Board` can be used directly as a hash key.

use crate::types::*;

const PIECE_BITS: usize = 3;
const STATUS_PLANE: usize = PIECE_BITS;
const COLOR_PLANE: usize = PIECE_BITS + 1;
const PLANES: usize = PIECE_BITS + 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    planes: [u64; PLANES],
}

#[inline(always)]
fn bit(plane: u64, idx: u32) -> u64 {
    (plane >> idx) & 1
}

#[inline(always)]
fn with_bit(plane: u64, idx: u32, value: u64) -> u64 {
    (plane & !(1u64 << idx)) | (value << idx)
}

#[inline(always)]
fn square_index(pos: Position) -> u32 {
    assert!(pos.in_board(), "square {pos} is outside the board");
    (pos.x as u32) + (pos.y as u32) * 8
}

impl Board {
    pub const EMPTY: Board = Board { planes: [0; PLANES] };

    pub fn get(&self, pos: Position) -> SquareContent {
        let idx = square_index(pos);
        let mut code = 0u8;
        for i in 0..PIECE_BITS {
            code |= (bit(self.planes[i], idx) as u8) << i;
        }
        let status = if bit(self.planes[STATUS_PLANE], idx) == 1 {
            PieceStatus::Flagged
        } else {
            PieceStatus::Default
        };
        let color = if bit(self.planes[COLOR_PLANE], idx) == 1 {
            Color::Black
        } else {
            Color::White
        };
        SquareContent::new(Piece::from_code(code), status, color)
    }

    /// Returns a copy of the board with `content` written at `pos`.
    #[must_use]
    pub fn set(mut self, pos: Position, content: SquareContent) -> Board {
        let idx = square_index(pos);
        let code = content.piece.code() as u64;
        for i in 0..PIECE_BITS {
            self.planes[i] = with_bit(self.planes[i], idx, (code >> i) & 1);
        }
        let status = (content.status == PieceStatus::Flagged) as u64;
        self.planes[STATUS_PLANE] = with_bit(self.planes[STATUS_PLANE], idx, status);
        let color = (content.color == Color::Black) as u64;
        self.planes[COLOR_PLANE] = with_bit(self.planes[COLOR_PLANE], idx, color);
        self
    }

    /// Positions holding `piece` of `color`.
    pub fn pieces(&self, piece: Piece, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|&pos| {
                let here = self.get(pos);
                here.piece == piece && here.color == color
            })
            .collect()
    }

    /// Positions holding any piece of `color`.
    pub fn pieces_of(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|&pos| {
                let here = self.get(pos);
                !here.is_empty() && here.color == color
            })
            .collect()
    }

    /// Square of the king of `color`.
    ///
    /// A board without that king is corrupt; this panics rather than guessing.
    pub fn king_position(&self, color: Color) -> Position {
        Position::all()
            .find(|&pos| {
                let here = self.get(pos);
                here.piece == Piece::King && here.color == color
            })
            .unwrap_or_else(|| panic!("no {color} king on the board"))
    }

    /// Standard starting setup. `reduced` keeps only pawns, rooks and kings,
    /// which is handy for shallow tests.
    pub fn initial(reduced: bool) -> Board {
        let mut board = Board::EMPTY;
        for color in Color::ALL {
            board = board.fill_side(color, reduced);
        }
        board
    }

    fn fill_side(mut self, color: Color, reduced: bool) -> Board {
        let home = color.home_row();
        for x in 0..8 {
            self = self.set(
                Position::new(x, color.pawn_row()),
                SquareContent::piece(Piece::Pawn, color),
            );
        }

        let mut back = vec![(0, Piece::Rook), (7, Piece::Rook), (4, Piece::King)];
        if !reduced {
            back.extend([
                (1, Piece::Knight),
                (6, Piece::Knight),
                (2, Piece::Bishop),
                (5, Piece::Bishop),
                (3, Piece::Queen),
            ]);
        }
        for (x, piece) in back {
            self = self.set(Position::new(x, home), SquareContent::piece(piece, color));
        }
        self
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
