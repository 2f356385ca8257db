//! Classical Chess Engine
//!
//! Negamax with alpha-beta pruning over whole boards, scored by mobility and
//! material.

mod cache;
mod eval;
mod search;

use chessai_core::{Board, Color, Engine, SearchLimits, SearchResult};
use tracing::debug;

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning
/// - A transposition cache that lives for one search
/// - Mobility plus material evaluation
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes searched since the last `new_game`.
    pub fn total_nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, color: Color, limits: SearchLimits) -> SearchResult {
        let outcome = search::search_with_stats(board, color, limits.depth);
        self.nodes += outcome.nodes;

        let score = outcome.best.map(|b| b.score).unwrap_or(0);
        debug!(
            %color,
            depth = limits.depth,
            nodes = outcome.nodes,
            cache_hits = outcome.cache_hits,
            score,
            "search finished"
        );

        SearchResult {
            best_board: outcome.best.map(|b| b.board),
            score,
            depth: limits.depth,
            nodes: outcome.nodes,
            cache_hits: outcome.cache_hits,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use cache::{Bound, CacheStats, TranspositionCache};
pub use eval::{evaluate, material, piece_value, DRAW_SCORE, MATE_SCORE};
pub use search::{search, search_with_stats, Scored, SearchOutcome, SCORE_BOUND};
