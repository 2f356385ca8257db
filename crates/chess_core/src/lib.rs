pub mod apply;
pub mod attacks;
pub mod board;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod status;
pub mod topology;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use apply::*;
pub use attacks::*;
pub use board::*;
pub use fen::{FenError, Setup, parse_fen};
pub use movegen::*;
pub use perft::perft;
pub use status::*;
pub use topology::{MoveTopology, Ray, TOPOLOGY};
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move-picking player
// =============================================================================

/// Search limits handed to an engine for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The board after the chosen move (None if no legal moves)
    pub best_board: Option<Board>,
    /// Evaluation score from the searching color's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
    /// Number of transposition cache hits (for stats)
    pub cache_hits: u64,
}

/// Trait that all chess engines must implement.
///
/// An engine receives the current board and the color to move and answers with
/// the board after its chosen move.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `board` - The current board
    /// * `color` - The color to move
    /// * `limits` - Search limits
    ///
    /// # Returns
    /// SearchResult containing the chosen board, score and statistics
    fn search(&mut self, board: &Board, color: Color, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "chessai"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
