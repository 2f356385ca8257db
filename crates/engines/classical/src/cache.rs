//! Per-search transposition cache.
//!
//! Entries are keyed by the board and the remaining depth it was searched to.
//! Within one search the root color is fixed, so the remaining depth also
//! determines the side to move. Scores are stored from the perspective of the
//! player who moved into the board, together with how they relate to the
//! window they were searched with.

use std::collections::HashMap;

use chessai_core::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is the true value.
    Exact,
    /// The true value is at least the score.
    Lower,
    /// The true value is at most the score.
    Upper,
}

impl Bound {
    /// Classifies a fail-soft score returned for the window `(alpha, beta)`.
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Bound {
        if score >= beta {
            Bound::Lower
        } else if score <= alpha {
            Bound::Upper
        } else {
            Bound::Exact
        }
    }

    /// True if a cached score with this bound settles a node searched with `(alpha, beta)`.
    fn decides(self, score: i32, alpha: i32, beta: i32) -> bool {
        match self {
            Bound::Exact => true,
            Bound::Lower => score >= beta,
            Bound::Upper => score <= alpha,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    score: i32,
    bound: Bound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<(Board, u8), CacheEntry>,
    stats: CacheStats,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Returns the cached score of `board` if its entry decides the window.
    pub fn probe(&mut self, board: &Board, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        self.stats.probes += 1;
        let entry = self.entries.get(&(*board, depth))?;
        if !entry.bound.decides(entry.score, alpha, beta) {
            return None;
        }
        self.stats.hits += 1;
        Some(entry.score)
    }

    /// Records `score`, the result of searching `board` with the window `(alpha, beta)`.
    pub fn store(&mut self, board: Board, depth: u8, score: i32, alpha: i32, beta: i32) {
        self.stats.stores += 1;
        let bound = Bound::classify(score, alpha, beta);
        self.entries.insert((board, depth), CacheEntry { score, bound });
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
