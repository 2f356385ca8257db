use crate::{attacks::in_check, board::Board, types::Color};

/// Outcome of a position for the side about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move has no legal move and is not in check.
    Draw,
    /// Checkmate; holds the winning color.
    Won(Color),
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn is_draw(self) -> bool {
        self == GameStatus::Draw
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Won(color) => Some(color),
            _ => None,
        }
    }
}

/// Classifies `board` given the color to move next and its legal move count.
pub fn game_status(board: &Board, to_move: Color, available_moves: usize) -> GameStatus {
    if available_moves > 0 {
        return GameStatus::InProgress;
    }
    if in_check(board, to_move) {
        GameStatus::Won(to_move.other())
    } else {
        GameStatus::Draw
    }
}
