//! Console move input.
//!
//! A human move is typed as `x y dx dy`: the square of the piece to move and the
//! vector to move it by. The move kind is worked out from the piece and the
//! squares involved, the matching board is built, and the result is checked
//! against the generated legal moves.

use chessai_core::{
    apply_castling, apply_en_passant, apply_pawn_promotion, apply_simple_move, is_legal_result,
    Board, CastlingSide, Color, FullMove, Move, Piece, Position, Promotion,
};
use thiserror::Error;

pub const MOVE_PROMPT: &str = "Insert your move: x y dx dy";
pub const PROMOTION_PROMPT: &str =
    "Select piece to promote to: 0 is queen, 1 is knight, 2 is bishop, 3 is rook";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected four integers: x y dx dy")]
    Malformed,
    #[error("must select a square inside the board")]
    OutsideBoard,
    #[error("can't select an empty square")]
    EmptySquare,
    #[error("wrong piece color")]
    WrongColor,
    #[error("can't move outside of the board")]
    TargetOutsideBoard,
    #[error("invalid pawn move")]
    InvalidPawnMove,
    #[error("can't promote to '{0}'")]
    InvalidPromotion(String),
    #[error("invalid move")]
    IllegalMove,
}

/// What a typed move turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Simple,
    Castling(CastlingSide),
    /// Pawn move onto the last row; needs a promotion choice.
    Promotion,
    PawnCapture,
    EnPassant,
}

pub fn parse_move(line: &str) -> Result<FullMove, InputError> {
    let nums: Vec<i8> = line
        .split_whitespace()
        .map(|tok| tok.parse::<i8>().map_err(|_| InputError::Malformed))
        .collect::<Result<_, _>>()?;
    let &[x, y, dx, dy] = nums.as_slice() else {
        return Err(InputError::Malformed);
    };
    Ok(FullMove::new(Position::new(x, y), Move::new(dx, dy)))
}

pub fn parse_promotion(line: &str) -> Result<Promotion, InputError> {
    match line.trim() {
        "0" => Ok(Promotion::Queen),
        "1" => Ok(Promotion::Knight),
        "2" => Ok(Promotion::Bishop),
        "3" => Ok(Promotion::Rook),
        other => Err(InputError::InvalidPromotion(other.to_string())),
    }
}

/// Validates the selection and works out the kind of `mv` for `color`.
pub fn classify(board: &Board, color: Color, mv: FullMove) -> Result<MoveKind, InputError> {
    if !mv.from.in_board() {
        return Err(InputError::OutsideBoard);
    }
    let info = board.get(mv.from);
    if info.is_empty() {
        return Err(InputError::EmptySquare);
    }
    if info.color != color {
        return Err(InputError::WrongColor);
    }
    let reach = -7..=7;
    if !reach.contains(&mv.step.dx) || !reach.contains(&mv.step.dy) || !mv.to().in_board() {
        return Err(InputError::TargetOutsideBoard);
    }
    let to = mv.to();

    let dx = mv.step.dx;
    if info.piece == Piece::King && dx.abs() > 1 {
        let side = if dx > 0 {
            CastlingSide::King
        } else {
            CastlingSide::Queen
        };
        return Ok(MoveKind::Castling(side));
    }
    if info.piece != Piece::Pawn {
        return Ok(MoveKind::Simple);
    }
    if to.y == color.other().home_row() {
        return Ok(MoveKind::Promotion);
    }
    if dx.abs() != 1 {
        return Ok(MoveKind::Simple);
    }

    let target = board.get(to);
    if !target.is_empty() && target.color != color {
        return Ok(MoveKind::PawnCapture);
    }
    let passed = board.get(Position::new(to.x, mv.from.y));
    if target.is_empty() && passed.piece == Piece::Pawn && passed.color != color {
        return Ok(MoveKind::EnPassant);
    }
    Err(InputError::InvalidPawnMove)
}

/// Builds the board `mv` would produce. `promotion` is only read for
/// `MoveKind::Promotion` and defaults to a queen.
pub fn candidate_board(
    board: &Board,
    mv: FullMove,
    kind: MoveKind,
    promotion: Option<Promotion>,
) -> Board {
    match kind {
        MoveKind::Castling(side) => apply_castling(board, mv.from, side),
        MoveKind::Promotion => {
            apply_pawn_promotion(board, mv, promotion.unwrap_or(Promotion::Queen), true)
        }
        MoveKind::EnPassant => apply_en_passant(board, mv, true),
        MoveKind::Simple | MoveKind::PawnCapture => apply_simple_move(board, mv, true),
    }
}

/// Builds the candidate board and accepts it only if it is a legal result.
pub fn resolve_move(
    board: &Board,
    mv: FullMove,
    kind: MoveKind,
    promotion: Option<Promotion>,
) -> Result<Board, InputError> {
    let candidate = candidate_board(board, mv, kind, promotion);
    if is_legal_result(board, mv.from, &candidate) {
        Ok(candidate)
    } else {
        Err(InputError::IllegalMove)
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
