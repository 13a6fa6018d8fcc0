//! Random Move Chess Engine
//!
//! A simple strategy that selects moves uniformly at random from all
//! playable legal moves. Useful for:
//! - Testing infrastructure
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use chess_core::board::Board;
use chess_core::moves::Move;
use chess_core::MoveStrategy;
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A strategy that plays random legal moves.
///
/// This strategy provides no evaluation - it simply picks a random
/// move among those the legality gate accepts. It's the simplest
/// possible engine and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy {
    boards_evaluated: u64,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            boards_evaluated: 0,
        }
    }
}

impl MoveStrategy for RandomStrategy {
    fn execute(&mut self, board: &Board) -> Move {
        let player = board.current_player();
        let playable: Vec<Move> = player
            .legal_moves()
            .iter()
            .filter(|mv| player.make_move(board, mv).status().is_done())
            .cloned()
            .collect();
        self.boards_evaluated += playable.len() as u64;

        playable
            .choose(&mut thread_rng())
            .cloned()
            .unwrap_or_else(Move::null_move)
    }

    fn num_boards_evaluated(&self) -> u64 {
        self.boards_evaluated
    }

    fn name(&self) -> &str {
        "Random"
    }
}
