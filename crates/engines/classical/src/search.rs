//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes the evaluator's score and Black minimizes it. Moves
//! are ordered by MVV-LVA at every node; the sort is stable, so the
//! chosen move is deterministic for a given position and depth.

use std::cmp::Reverse;

use chess_core::board::Board;
use chess_core::board_utils::{is_end_game, mvv_lva};
use chess_core::moves::Move;
use chess_core::pieces::Alliance;
use chess_core::{BoardEvaluator, MoveStrategy};

use crate::eval::StandardBoardEvaluator;

pub struct AlphaBeta<E = StandardBoardEvaluator> {
    evaluator: E,
    search_depth: u8,
    boards_evaluated: u64,
}

impl AlphaBeta {
    pub fn new(search_depth: u8) -> Self {
        AlphaBeta::with_evaluator(search_depth, StandardBoardEvaluator::new())
    }
}

impl<E: BoardEvaluator> AlphaBeta<E> {
    pub fn with_evaluator(search_depth: u8, evaluator: E) -> Self {
        AlphaBeta {
            evaluator,
            search_depth,
            boards_evaluated: 0,
        }
    }

    fn ordered_moves(board: &Board) -> Vec<Move> {
        let mut moves: Vec<Move> = board.current_player().legal_moves().to_vec();
        moves.sort_by_key(|mv| Reverse(mvv_lva(mv)));
        moves
    }

    /// Minimizing node: Black to move underneath a White decision.
    fn min(&mut self, board: &Board, depth: u8, highest: i32, lowest: i32) -> i32 {
        if depth == 0 || is_end_game(board) {
            self.boards_evaluated += 1;
            return self.evaluator.evaluate(board, depth);
        }
        let mut lowest_seen = lowest;
        for mv in Self::ordered_moves(board) {
            let transition = board.current_player().make_move(board, &mv);
            if !transition.status().is_done() {
                continue;
            }
            let next = transition.into_board().expect("done transition has a board");
            let current = self.max(&next, depth - 1, highest, lowest_seen);
            lowest_seen = lowest_seen.min(current);
            if lowest_seen <= highest {
                break;
            }
        }
        lowest_seen
    }

    /// Maximizing node: White to move underneath a Black decision.
    fn max(&mut self, board: &Board, depth: u8, highest: i32, lowest: i32) -> i32 {
        if depth == 0 || is_end_game(board) {
            self.boards_evaluated += 1;
            return self.evaluator.evaluate(board, depth);
        }
        let mut highest_seen = highest;
        for mv in Self::ordered_moves(board) {
            let transition = board.current_player().make_move(board, &mv);
            if !transition.status().is_done() {
                continue;
            }
            let next = transition.into_board().expect("done transition has a board");
            let current = self.min(&next, depth - 1, highest_seen, lowest);
            highest_seen = highest_seen.max(current);
            if lowest <= highest_seen {
                break;
            }
        }
        highest_seen
    }
}

impl<E: BoardEvaluator> MoveStrategy for AlphaBeta<E> {
    fn execute(&mut self, board: &Board) -> Move {
        let mut best_move = Move::null_move();
        let mut highest = i32::MIN;
        let mut lowest = i32::MAX;
        let alliance = board.current_player().alliance();

        for mv in Self::ordered_moves(board) {
            let transition = board.current_player().make_move(board, &mv);
            if !transition.status().is_done() {
                continue;
            }
            let next = transition.into_board().expect("done transition has a board");
            let child_depth = self.search_depth.saturating_sub(1);
            match alliance {
                Alliance::White => {
                    let value = self.min(&next, child_depth, highest, lowest);
                    if value > highest {
                        highest = value;
                        best_move = mv;
                    }
                }
                Alliance::Black => {
                    let value = self.max(&next, child_depth, highest, lowest);
                    if value < lowest {
                        lowest = value;
                        best_move = mv;
                    }
                }
            }
        }
        best_move
    }

    fn num_boards_evaluated(&self) -> u64 {
        self.boards_evaluated
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
