//! Negamax search with alpha-beta pruning

use chessai_core::{all_possible_moves, Board, Color};

use crate::cache::TranspositionCache;
use crate::eval::evaluate;

/// Magnitude of the root search window.
pub const SCORE_BOUND: i32 = 100_000;

/// A board paired with its score from the searching color's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub board: Board,
    pub score: i32,
}

/// Result of a root search together with its statistics.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best board and score, or None if the side to move has no legal move
    pub best: Option<Scored>,
    /// Number of nodes visited
    pub nodes: u64,
    /// Number of children answered by the cache
    pub cache_hits: u64,
}

/// Picks the best board reachable by one move of `color`, searching `depth` plies.
///
/// Returns None when `color` has no legal move. At depth 0 the board itself is
/// returned with its static evaluation.
pub fn search(board: &Board, color: Color, depth: u8) -> Option<Scored> {
    search_with_stats(board, color, depth).best
}

/// Same as [`search`], also reporting node and cache statistics.
pub fn search_with_stats(board: &Board, color: Color, depth: u8) -> SearchOutcome {
    let children = all_possible_moves(board, color, true, false);
    if children.is_empty() {
        return SearchOutcome {
            best: None,
            nodes: 0,
            cache_hits: 0,
        };
    }

    let mut ctx = SearchContext::new();
    ctx.nodes += 1;
    let best = if depth == 0 {
        leaf(board, color)
    } else {
        ctx.best_child(children, color, -SCORE_BOUND, SCORE_BOUND, depth)
    };
    SearchOutcome {
        best: Some(best),
        nodes: ctx.nodes,
        cache_hits: ctx.cache.stats().hits,
    }
}

/// State of one root search. The cache is never shared between searches.
struct SearchContext {
    cache: TranspositionCache,
    nodes: u64,
}

impl SearchContext {
    fn new() -> Self {
        Self {
            cache: TranspositionCache::new(),
            nodes: 0,
        }
    }

    /// Fail-soft negamax. Scores strictly inside `(alpha, beta)` are exact;
    /// a score at or below `alpha` is an upper bound and one at or above `beta`
    /// a lower bound of the true value.
    fn negamax(
        &mut self,
        board: &Board,
        color: Color,
        alpha: i32,
        beta: i32,
        depth: u8,
    ) -> Scored {
        self.nodes += 1;

        if depth == 0 {
            return leaf(board, color);
        }

        let children = all_possible_moves(board, color, true, false);
        if children.is_empty() {
            // Checkmate or stalemate; the evaluator scores both.
            return leaf(board, color);
        }
        self.best_child(children, color, alpha, beta, depth)
    }

    /// Scores the non-empty `children` of a position with `color` to move and keeps the best.
    fn best_child(
        &mut self,
        children: Vec<Board>,
        color: Color,
        mut alpha: i32,
        beta: i32,
        depth: u8,
    ) -> Scored {
        let mut best = Scored {
            board: children[0],
            score: -SCORE_BOUND,
        };
        let child_depth = depth - 1;

        for child in children {
            let score = match self.cache.probe(&child, child_depth, alpha, beta) {
                Some(score) => score,
                None => {
                    let reply = self.negamax(&child, color.other(), -beta, -alpha, child_depth);
                    let score = -reply.score;
                    self.cache.store(child, child_depth, score, alpha, beta);
                    score
                }
            };

            if score > best.score {
                best = Scored {
                    board: child,
                    score,
                };
            }
            alpha = alpha.max(best.score);
            if alpha > beta {
                break;
            }
        }

        best
    }
}

fn leaf(board: &Board, color: Color) -> Scored {
    Scored {
        board: *board,
        score: evaluate(board, color),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
