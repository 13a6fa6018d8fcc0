//! Match runner for playing games between strategies

use chess_core::board::Board;
use chess_core::pieces::Alliance;
use chess_core::MoveStrategy;

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum moves per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two strategies
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two strategies
    ///
    /// Returns the result from strategy1's perspective
    pub fn run_match(
        &self,
        strategy1: &mut dyn MoveStrategy,
        strategy2: &mut dyn MoveStrategy,
    ) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let strategy1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if strategy1_white {
                self.play_game(strategy1, strategy2)
            } else {
                // Flip result since strategy1 is black
                match self.play_game(strategy2, strategy1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            result.record(game_result);

            if self.config.verbose {
                let color = if strategy1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from White's perspective
    fn play_game(
        &self,
        white: &mut dyn MoveStrategy,
        black: &mut dyn MoveStrategy,
    ) -> GameResult {
        let mut board = Board::standard();

        for _move_num in 0..self.config.max_moves {
            let side = board.current_player().alliance();
            let mv = match side {
                Alliance::White => white.execute(&board),
                Alliance::Black => black.execute(&board),
            };

            if mv.is_null() {
                // No move offered: mate, stalemate, or a resignation
                return if board.current_player().is_in_check_mate(&board) {
                    loss_for(side)
                } else if board.current_player().is_in_stale_mate(&board) {
                    GameResult::Draw
                } else {
                    loss_for(side)
                };
            }

            let transition = board.current_player().make_move(&board, &mv);
            if !transition.status().is_done() {
                // A strategy that offers an unplayable move forfeits
                return loss_for(side);
            }
            board = transition
                .into_board()
                .expect("done transition carries the next board");
        }

        // Max moves reached
        GameResult::Draw
    }
}

/// Result from White's perspective when `side` has lost.
fn loss_for(side: Alliance) -> GameResult {
    match side {
        Alliance::White => GameResult::Loss,
        Alliance::Black => GameResult::Win,
    }
}

/// Quick utility to run a single match with default settings
pub fn quick_match(
    strategy1: &mut dyn MoveStrategy,
    strategy2: &mut dyn MoveStrategy,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(strategy1, strategy2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
