//! Text rendering of a board, with 0-7 coordinates on both axes.

use std::fmt::Write;

use chessai_core::{Board, Color, Piece, Position, SquareContent};

const DARK_SQUARE: char = '▨';
const LIGHT_SQUARE: char = ' ';

pub fn piece_char(content: SquareContent) -> char {
    match (content.color, content.piece) {
        (_, Piece::Empty) => ' ',
        (Color::White, Piece::Pawn) => '♙',
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::King) => '♔',
        (Color::White, Piece::Queen) => '♕',
        (Color::Black, Piece::Pawn) => '♟',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::King) => '♚',
        (Color::Black, Piece::Queen) => '♛',
    }
}

/// Renders `board` as nine lines: an x header, then one line per row
/// prefixed with its y coordinate. Empty squares show their color.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  0 1 2 3 4 5 6 7\n");
    for y in 0..8 {
        let _ = write!(out, "{y}");
        for x in 0..8 {
            let content = board.get(Position::new(x, y));
            let ch = if !content.is_empty() {
                piece_char(content)
            } else if (x + y) % 2 == 1 {
                DARK_SQUARE
            } else {
                LIGHT_SQUARE
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
