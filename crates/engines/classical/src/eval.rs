//! Hand-tuned positional evaluation.
//!
//! Scores are absolute: positive favors White, negative favors Black.
//! The score is `score(white) - score(black)` where each side sums
//! material, mobility, threats, king safety, and pawn structure.

use chess_core::board::Board;
use chess_core::pieces::PieceKind;
use chess_core::player::Player;
use chess_core::BoardEvaluator;

use crate::pawn_structure::PawnStructureAnalyzer;

const CHECK_MATE_BONUS: i32 = 100_000;
const CHECK_BONUS: i32 = 45;
const CASTLE_BONUS: i32 = 25;
const MOBILITY_MULTIPLIER: i32 = 5;
const ATTACK_MULTIPLIER: i32 = 1;
const TWO_BISHOP_BONUS: i32 = 25;
const DEPTH_BONUS: i32 = 100;

/// The default evaluator for the alpha-beta engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBoardEvaluator {
    pawn_structure: PawnStructureAnalyzer,
}

impl StandardBoardEvaluator {
    pub fn new() -> Self {
        StandardBoardEvaluator {
            pawn_structure: PawnStructureAnalyzer::new(),
        }
    }

    fn score(&self, board: &Board, player: &Player, depth: u8) -> i32 {
        material(board, player)
            + mobility(board, player)
            + attacks(player)
            + check_mate(board, player, depth)
            + castle(player)
            + self.pawn_structure.pawn_structure_score(board, player)
    }
}

impl BoardEvaluator for StandardBoardEvaluator {
    fn evaluate(&self, board: &Board, depth: u8) -> i32 {
        self.score(board, board.white_player(), depth)
            - self.score(board, board.black_player(), depth)
    }
}

/// Piece values plus the bishop-pair bonus.
fn material(board: &Board, player: &Player) -> i32 {
    let mut score = 0;
    let mut bishops = 0;
    for piece in board.pieces(player.alliance()) {
        score += piece.value();
        if piece.kind == PieceKind::Bishop {
            bishops += 1;
        }
    }
    score + if bishops == 2 { TWO_BISHOP_BONUS } else { 0 }
}

/// Ratio of own to opponent legal move counts, scaled.
fn mobility(board: &Board, player: &Player) -> i32 {
    let own = player.legal_moves().len() as i32;
    let opponent = board
        .player(player.alliance().opponent())
        .legal_moves()
        .len()
        .max(1) as i32;
    MOBILITY_MULTIPLIER * (own * 10 / opponent)
}

/// Rewards attacking moves whose victim is worth at least the attacker.
fn attacks(player: &Player) -> i32 {
    let attack_count = player
        .legal_moves()
        .iter()
        .filter(|mv| {
            mv.is_attack()
                && mv
                    .moved_piece()
                    .zip(mv.attacked_piece())
                    .is_some_and(|(mover, victim)| mover.value() <= victim.value())
        })
        .count() as i32;
    attack_count * ATTACK_MULTIPLIER
}

/// Mate outweighs everything; a nearer mate outweighs a deeper one.
/// A plain check earns a small nudge.
fn check_mate(board: &Board, player: &Player, depth: u8) -> i32 {
    let opponent = board.player(player.alliance().opponent());
    if opponent.is_in_check_mate(board) {
        CHECK_MATE_BONUS * depth_bonus(depth)
    } else if opponent.is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn depth_bonus(depth: u8) -> i32 {
    if depth == 0 {
        1
    } else {
        DEPTH_BONUS * depth as i32
    }
}

fn castle(player: &Player) -> i32 {
    if player.is_castled() {
        CASTLE_BONUS
    } else {
        0
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
