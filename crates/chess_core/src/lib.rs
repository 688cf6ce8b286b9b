pub mod error;
pub mod position;
pub mod san;
pub mod session;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use error::*;
pub use position::*;
pub use san::{parse_san, to_san};
pub use session::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait — implemented by move-choosing engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the best move, positive favouring White
    pub score: Score,
    /// Nominal search depth in plies, root ply included
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of alpha-beta cutoffs taken
    pub cutoffs: u64,
}

/// Trait that all chess engines must implement.
///
/// Engines search the position in place: they may apply and undo moves on
/// `pos` but must hand it back exactly as they received it. The exclusive
/// borrow keeps two searches from ever sharing one position.
pub trait Engine: Send {
    /// Search the position to the engine's configured depth.
    fn search(&mut self, pos: &mut GamePosition) -> SearchResult;

    /// The move to play, or `None` when the side to move has no legal move.
    fn choose_move(&mut self, pos: &mut GamePosition) -> Option<Move> {
        self.search(pos).best_move
    }

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
