pub mod board;
pub mod board_utils;
pub mod moves;
pub mod pieces;
pub mod player;

// Re-export core game logic (not engine-specific)
pub use board::{Board, BoardBuilder, Tile};
pub use moves::{create_move, Move, MoveKind, MoveStatus};
pub use pieces::{Alliance, KingFlags, Piece, PieceKind};
pub use player::{MoveTransition, Player};

// =============================================================================
// Strategy traits — implemented by all engines (classical, random, etc.)
// =============================================================================

/// Trait that all move-choosing engines implement.
///
/// This allows swapping between the alpha-beta engine, the random
/// baseline, and anything else that picks moves for the side to move.
pub trait MoveStrategy {
    /// Chooses a move for the current player of `board`.
    ///
    /// Returns the null move when the position offers no playable move
    /// (checkmate or stalemate).
    fn execute(&mut self, board: &Board) -> Move;

    /// Total number of boards statically evaluated so far.
    fn num_boards_evaluated(&self) -> u64;

    /// Strategy name for reporting.
    fn name(&self) -> &str;
}

/// Static position scorer. Positive favors White, negative favors
/// Black; `depth` lets mate scores prefer the shorter mate.
pub trait BoardEvaluator {
    fn evaluate(&self, board: &Board, depth: u8) -> i32;
}
