//! Players: the legal move set for one side, the check bit, and the
//! gate that turns a requested move into a transition.
//!
//! A player is computed once when a board is built. Its legal set is
//! the side's pseudo-legal moves plus whatever castles the position
//! allows; moves that would leave the own king attacked are only
//! rejected later, by re-simulating in `make_move`.

use crate::board::Board;
use crate::board_utils::is_king_pawn_trap;
use crate::moves::{Move, MoveKind, MoveStatus};
use crate::pieces::{Alliance, Piece, PieceKind};

/// Result of `Player::make_move`: the requested move, its status, and
/// the successor board when the move went through.
#[derive(Debug, Clone)]
pub struct MoveTransition {
    transition_move: Move,
    status: MoveStatus,
    to_board: Option<Board>,
}

impl MoveTransition {
    pub const fn status(&self) -> MoveStatus {
        self.status
    }

    pub const fn transition_move(&self) -> &Move {
        &self.transition_move
    }

    pub const fn to_board(&self) -> Option<&Board> {
        self.to_board.as_ref()
    }

    pub fn into_board(self) -> Option<Board> {
        self.to_board
    }
}

/// Per-alliance castle geometry. Tiles are row-major from a8.
struct CastleGeometry {
    king_home: i8,
    king_side_rook: i8,
    king_side_king_to: i8,
    king_side_rook_to: i8,
    king_side_between: &'static [i8],
    king_side_safe: &'static [i8],
    queen_side_rook: i8,
    queen_side_king_to: i8,
    queen_side_rook_to: i8,
    queen_side_between: &'static [i8],
    queen_side_safe: &'static [i8],
    pawn_trap: i8,
}

const BLACK_CASTLE_GEOMETRY: CastleGeometry = CastleGeometry {
    king_home: 4,
    king_side_rook: 7,
    king_side_king_to: 6,
    king_side_rook_to: 5,
    king_side_between: &[5, 6],
    king_side_safe: &[5, 6],
    queen_side_rook: 0,
    queen_side_king_to: 2,
    queen_side_rook_to: 3,
    queen_side_between: &[1, 2, 3],
    queen_side_safe: &[2, 3],
    pawn_trap: 12,
};

const WHITE_CASTLE_GEOMETRY: CastleGeometry = CastleGeometry {
    king_home: 60,
    king_side_rook: 63,
    king_side_king_to: 62,
    king_side_rook_to: 61,
    king_side_between: &[61, 62],
    king_side_safe: &[61, 62],
    queen_side_rook: 56,
    queen_side_king_to: 58,
    queen_side_rook_to: 59,
    queen_side_between: &[57, 58, 59],
    queen_side_safe: &[58, 59],
    pawn_trap: 52,
};

#[derive(Debug, Clone)]
pub struct Player {
    alliance: Alliance,
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl Player {
    /// Derives one side's player from its pseudo-legal moves and the
    /// opponent's. Adds castle moves and computes the check bit.
    ///
    /// Panics when the side has no king on the board.
    pub(crate) fn new(
        board: &Board,
        alliance: Alliance,
        own_standard: &[Move],
        opponent_standard: &[Move],
    ) -> Player {
        let king = board
            .pieces(alliance)
            .iter()
            .copied()
            .find(|piece| piece.kind.is_king())
            .unwrap_or_else(|| panic!("{alliance} has no king, the board is corrupt"));
        let in_check =
            Player::calculate_attacks_on_tile(king.position, opponent_standard.iter()).count() > 0;
        let mut legal_moves = own_standard.to_vec();
        legal_moves.extend(Player::calculate_king_castles(
            board,
            alliance,
            &king,
            in_check,
            opponent_standard,
        ));
        Player {
            alliance,
            king,
            legal_moves,
            in_check,
        }
    }

    /// Moves from `moves` that land on `coordinate`.
    pub fn calculate_attacks_on_tile<'a>(
        coordinate: i8,
        moves: impl Iterator<Item = &'a Move>,
    ) -> impl Iterator<Item = &'a Move> {
        moves.filter(move |mv| mv.destination() == coordinate)
    }

    fn calculate_king_castles(
        board: &Board,
        alliance: Alliance,
        king: &Piece,
        in_check: bool,
        opponent_standard: &[Move],
    ) -> Vec<Move> {
        let PieceKind::King(flags) = king.kind else {
            unreachable!()
        };
        let geometry = match alliance {
            Alliance::White => &WHITE_CASTLE_GEOMETRY,
            Alliance::Black => &BLACK_CASTLE_GEOMETRY,
        };
        let mut castles = Vec::new();
        if !king.is_first_move
            || king.position != geometry.king_home
            || in_check
            || flags.castled
            || is_king_pawn_trap(board, king, geometry.pawn_trap)
        {
            return castles;
        }
        let tiles_clear = |between: &[i8]| between.iter().all(|&tile| board.piece_at(tile).is_none());
        let tiles_safe = |safe: &[i8]| {
            safe.iter().all(|&tile| {
                Player::calculate_attacks_on_tile(tile, opponent_standard.iter()).count() == 0
            })
        };
        let unmoved_rook = |tile: i8| {
            board
                .piece_at(tile)
                .filter(|piece| {
                    piece.kind == PieceKind::Rook
                        && piece.alliance == alliance
                        && piece.is_first_move
                })
        };
        if flags.king_side_capable && tiles_clear(geometry.king_side_between) {
            if let Some(rook) = unmoved_rook(geometry.king_side_rook) {
                if tiles_safe(geometry.king_side_safe) {
                    castles.push(Move::new(
                        *king,
                        geometry.king_side_king_to,
                        MoveKind::KingSideCastle {
                            rook,
                            rook_destination: geometry.king_side_rook_to,
                        },
                    ));
                }
            }
        }
        if flags.queen_side_capable && tiles_clear(geometry.queen_side_between) {
            if let Some(rook) = unmoved_rook(geometry.queen_side_rook) {
                if tiles_safe(geometry.queen_side_safe) {
                    castles.push(Move::new(
                        *king,
                        geometry.queen_side_king_to,
                        MoveKind::QueenSideCastle {
                            rook,
                            rook_destination: geometry.queen_side_rook_to,
                        },
                    ));
                }
            }
        }
        castles
    }

    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub const fn king(&self) -> &Piece {
        &self.king
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    pub const fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub const fn is_castled(&self) -> bool {
        self.king.is_castled()
    }

    /// Checkmate: in check with no move that escapes it.
    pub fn is_in_check_mate(&self, board: &Board) -> bool {
        self.in_check && !self.has_escape_moves(board)
    }

    /// Stalemate: not in check, but every move would expose the king.
    pub fn is_in_stale_mate(&self, board: &Board) -> bool {
        !self.in_check && !self.has_escape_moves(board)
    }

    fn has_escape_moves(&self, board: &Board) -> bool {
        self.legal_moves
            .iter()
            .any(|mv| self.make_move(board, mv).status().is_done())
    }

    /// The legality gate. Rejects moves outside the legal set, then
    /// re-simulates the move and rejects it when the own king ends up
    /// attacked; otherwise hands back the successor board.
    pub fn make_move(&self, board: &Board, mv: &Move) -> MoveTransition {
        if mv.is_null() || !self.is_move_legal(mv) {
            return MoveTransition {
                transition_move: mv.clone(),
                status: MoveStatus::IllegalMove,
                to_board: None,
            };
        }
        let next = mv.execute(board);
        if next.player(self.alliance).is_in_check() {
            return MoveTransition {
                transition_move: mv.clone(),
                status: MoveStatus::LeavesPlayerInCheck,
                to_board: None,
            };
        }
        MoveTransition {
            transition_move: mv.clone(),
            status: MoveStatus::Done,
            to_board: Some(next),
        }
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
