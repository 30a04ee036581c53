//! Minimax Chess Engine
//!
//! Negamax with alpha-beta pruning, capture-first move ordering, material
//! evaluation and a soft wall-clock budget. Search depth adapts to the
//! root branching factor: 3 plies normally, 2 when more than 20 legal
//! moves are available.

mod eval;
mod search;

use chesskit_core::{Engine, Position, SearchLimits, SearchResult, legal_moves};

pub use eval::evaluate;
pub use search::{depth_for_branching, pick_best_move};

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let root_moves = legal_moves(pos, pos.side_to_move);
        if root_moves.is_empty() {
            // Game over at the root; the caller must not retry.
            return SearchResult {
                best_move: None,
                score: 0,
                depth: 0,
                nodes: 0,
                stopped: false,
            };
        }

        let depth = depth_for_branching(root_moves.len()).min(limits.depth);
        let outcome = search::pick_best_move(pos, depth, &mut self.nodes, &limits.budget);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
