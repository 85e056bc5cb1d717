pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::{perft, successor};
pub use types::*;

// =============================================================================
// Engine trait, implemented by every automated player
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score from the engine's perspective
    pub score: i32,
    /// Search depth requested
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub prunes: u64,
    /// The move came straight from the opening book
    pub from_book: bool,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Search the position to a fixed depth in plies.
    ///
    /// # Arguments
    /// * `board` - The current position to analyze
    /// * `depth` - Number of plies before quiescence takes over
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult;

    /// Returns the engine's name for display and reports
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
