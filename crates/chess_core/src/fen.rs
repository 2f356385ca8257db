//! Forsyth-Edwards Notation setup, used by tests and for starting games from
//! arbitrary positions.
//!
//! FEN's first rank string is rank 8, which is row 0 of our board, so rows map
//! straight across. Castling and en-passant fields are translated into the
//! per-square status flags: kings and rooks start with castling revoked unless
//! the castling field grants it, and the pawn that just double-pushed past the
//! en-passant square is flagged.

use std::str::FromStr;

use thiserror::Error;

use crate::{attacks::in_check, board::Board, types::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN needs at least a placement and a side to move")]
    MissingFields,
    #[error("expected 8 rows in the placement, found {0}")]
    RowCount(usize),
    #[error("row {0} does not describe exactly 8 squares")]
    RowWidth(usize),
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSide(String),
    #[error("castling right '{0}' does not match the king and rook placement")]
    InvalidCastling(char),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("expected exactly one {0} king")]
    KingCount(Color),
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}

/// A board plus the color to move, as described by a FEN string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Setup {
    pub board: Board,
    pub side_to_move: Color,
}

impl FromStr for Setup {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fen(s)
    }
}

pub fn parse_fen(fen: &str) -> Result<Setup, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(FenError::MissingFields);
    }
    let castling = parts.get(2).copied().unwrap_or("-");
    let en_passant = parts.get(3).copied().unwrap_or("-");

    let mut board = parse_placement(parts[0])?;
    for color in Color::ALL {
        let kings = board.pieces(Piece::King, color).len();
        if kings != 1 {
            return Err(FenError::KingCount(color));
        }
    }

    let side_to_move = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidSide(other.to_string())),
    };
    // The mover could otherwise take the king.
    if in_check(&board, side_to_move.other()) {
        return Err(FenError::OpponentInCheck(side_to_move.other()));
    }

    if castling != "-" {
        for c in castling.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastlingSide::King),
                'Q' => (Color::White, CastlingSide::Queen),
                'k' => (Color::Black, CastlingSide::King),
                'q' => (Color::Black, CastlingSide::Queen),
                _ => return Err(FenError::InvalidCastling(c)),
            };
            board = grant_castling(board, color, side).ok_or(FenError::InvalidCastling(c))?;
        }
    }

    if en_passant != "-" {
        board = flag_en_passant(board, en_passant)
            .ok_or_else(|| FenError::InvalidEnPassant(en_passant.to_string()))?;
    }

    Ok(Setup {
        board,
        side_to_move,
    })
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RowCount(rows.len()));
    }

    let mut board = Board::EMPTY;
    for (y, row) in rows.iter().enumerate() {
        let mut x: i8 = 0;
        for ch in row.chars() {
            if let Some(d) = ch.to_digit(10) {
                x += d as i8;
            } else {
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let (piece, status) = match ch.to_ascii_lowercase() {
                    'p' => (Piece::Pawn, PieceStatus::Default),
                    'n' => (Piece::Knight, PieceStatus::Default),
                    'b' => (Piece::Bishop, PieceStatus::Default),
                    'r' => (Piece::Rook, PieceStatus::CASTLING_REVOKED),
                    'q' => (Piece::Queen, PieceStatus::Default),
                    'k' => (Piece::King, PieceStatus::CASTLING_REVOKED),
                    _ => return Err(FenError::InvalidPiece(ch)),
                };
                if x >= 8 {
                    return Err(FenError::RowWidth(y));
                }
                board = board.set(
                    Position::new(x, y as i8),
                    SquareContent::new(piece, status, color),
                );
                x += 1;
            }
            if x > 8 {
                return Err(FenError::RowWidth(y));
            }
        }
        if x != 8 {
            return Err(FenError::RowWidth(y));
        }
    }
    Ok(board)
}

fn grant_castling(board: Board, color: Color, side: CastlingSide) -> Option<Board> {
    let row = color.home_row();
    let king_pos = Position::new(4, row);
    let rook_pos = Position::new(side.rook_x(), row);

    let king = board.get(king_pos);
    let rook = board.get(rook_pos);
    if king.piece != Piece::King || king.color != color {
        return None;
    }
    if rook.piece != Piece::Rook || rook.color != color {
        return None;
    }
    Some(
        board
            .set(king_pos, SquareContent::piece(Piece::King, color))
            .set(rook_pos, SquareContent::piece(Piece::Rook, color)),
    )
}

/// Flags the pawn that double-pushed over `square` (algebraic, e.g. "e3").
fn flag_en_passant(board: Board, square: &str) -> Option<Board> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 || !(b'a'..=b'h').contains(&bytes[0]) {
        return None;
    }
    let x = (bytes[0] - b'a') as i8;
    let (color, y) = match bytes[1] {
        // White pushed over rank 3 and now stands on rank 4.
        b'3' => (Color::White, 4),
        b'6' => (Color::Black, 3),
        _ => return None,
    };

    let pos = Position::new(x, y);
    let pawn = board.get(pos);
    if pawn.piece != Piece::Pawn || pawn.color != color {
        return None;
    }
    Some(board.set(
        pos,
        SquareContent::new(Piece::Pawn, PieceStatus::EN_PASSANT_ALLOWED, color),
    ))
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
