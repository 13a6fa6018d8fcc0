//! Pawn structure scoring: doubled, isolated, and passed pawns.

use chess_core::board::Board;
use chess_core::pieces::{Alliance, PieceKind};
use chess_core::player::Player;

const ISOLATED_PAWN_PENALTY: i32 = -10;
const DOUBLED_PAWN_PENALTY: i32 = -10;
const PASSED_PAWN_BONUS: i32 = 25;

/// Scores one side's pawn formation. Stateless; the evaluator owns one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PawnStructureAnalyzer;

impl PawnStructureAnalyzer {
    pub fn new() -> Self {
        PawnStructureAnalyzer
    }

    pub fn pawn_structure_score(&self, board: &Board, player: &Player) -> i32 {
        let own = pawns_per_file(board, player.alliance());
        self.doubled_pawn_penalty(&own)
            + self.isolated_pawn_penalty(&own)
            + self.passed_pawn_bonus(board, player)
    }

    /// Each extra pawn stacked on a file costs the penalty once.
    fn doubled_pawn_penalty(&self, own: &[i32; 8]) -> i32 {
        own.iter()
            .filter(|&&count| count > 1)
            .map(|count| (count - 1) * DOUBLED_PAWN_PENALTY)
            .sum()
    }

    /// A pawn with no friendly pawn on either adjacent file is isolated.
    fn isolated_pawn_penalty(&self, own: &[i32; 8]) -> i32 {
        let mut penalty = 0;
        for file in 0..8usize {
            if own[file] == 0 {
                continue;
            }
            let left = file > 0 && own[file - 1] > 0;
            let right = file < 7 && own[file + 1] > 0;
            if !left && !right {
                penalty += own[file] * ISOLATED_PAWN_PENALTY;
            }
        }
        penalty
    }

    /// A pawn is passed when no enemy pawn ahead of it stands on its
    /// file or an adjacent one.
    fn passed_pawn_bonus(&self, board: &Board, player: &Player) -> i32 {
        let alliance = player.alliance();
        board
            .pieces(alliance)
            .iter()
            .filter(|piece| piece.kind == PieceKind::Pawn)
            .filter(|pawn| {
                !board
                    .pieces(alliance.opponent())
                    .iter()
                    .filter(|piece| piece.kind == PieceKind::Pawn)
                    .any(|blocker| {
                        let blocker_file = blocker.position % 8;
                        let pawn_file = pawn.position % 8;
                        (blocker_file - pawn_file).abs() <= 1
                            && is_ahead(alliance, pawn.position, blocker.position)
                    })
            })
            .count() as i32
            * PASSED_PAWN_BONUS
    }
}

fn pawns_per_file(board: &Board, alliance: Alliance) -> [i32; 8] {
    let mut counts = [0i32; 8];
    for piece in board.pieces(alliance) {
        if piece.kind == PieceKind::Pawn {
            counts[(piece.position % 8) as usize] += 1;
        }
    }
    counts
}

/// True when `other` stands on a row the pawn still has to cross.
fn is_ahead(alliance: Alliance, pawn_position: i8, other_position: i8) -> bool {
    let pawn_row = pawn_position / 8;
    let other_row = other_position / 8;
    match alliance {
        Alliance::White => other_row < pawn_row,
        Alliance::Black => other_row > pawn_row,
    }
}

#[cfg(test)]
#[path = "pawn_structure_tests.rs"]
mod pawn_structure_tests;
