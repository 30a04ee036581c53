pub mod attacks;
pub mod board;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use fen::{FenError, decode, encode, validate};
pub use game::*;
pub use movegen::{pseudo_legal_moves, pseudo_moves_for};
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all move-selecting engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` means no legal move exists and the caller
    /// must treat the position as game over.
    pub best_move: Option<Move>,
    /// Evaluation of the chosen line from the searching side's perspective
    pub score: i32,
    /// Depth the search was asked to reach, in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
    /// Whether the search hit its time budget and stopped early
    pub stopped: bool,
}

/// Trait implemented by move-selecting engines (minimax, random, ...).
///
/// Engines borrow the position for a bounded simulate/evaluate/undo
/// sequence and must never leave it mutated afterward.
pub trait Engine: Send {
    /// Search the position under the given limits.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Engine name for display.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
