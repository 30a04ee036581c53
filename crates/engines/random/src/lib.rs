//! Uniform random move selection behind the `Engine` trait.
//!
//! Not a chess player in any meaningful sense. It exists to smoke-test the
//! move generator under arbitrary play and to give the real engines an
//! opponent that always loses.

use chesskit_core::{legal_moves, Engine, Position, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// Picks one of the current legal moves uniformly at random. Stateless;
/// search limits are accepted and ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(pos, pos.side_to_move);
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: moves.len() as u64,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
