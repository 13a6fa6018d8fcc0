//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning and a hand-tuned
//! positional evaluator. This is the baseline engine the tournament
//! runner pits against others.

mod eval;
mod pawn_structure;
mod search;

pub use eval::StandardBoardEvaluator;
pub use pawn_structure::PawnStructureAnalyzer;
pub use search::AlphaBeta;
