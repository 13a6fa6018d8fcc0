//! Piece values and per-kind pseudo-legal move generation.
//!
//! A `Piece` is a small copyable value: kind, alliance, tile, and a
//! first-move flag. Generation walks fixed offset tables with file-wrap
//! exclusions; legality against check is the player's job, not the
//! piece's. King moves in particular are generated without asking
//! whether the destination is attacked.

use crate::board::Board;
use crate::board_utils::{
    is_valid_tile_coordinate, EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SECOND_RANK,
    SEVENTH_COLUMN, SEVENTH_RANK,
};
use crate::moves::{Move, MoveKind};

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 10_000;

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];
const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];
const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const PAWN_OFFSETS: [i8; 4] = [8, 16, 7, 9];

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Sign of this side's pawn advance along the tile index axis.
    /// White moves toward lower indices.
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    pub const fn opposite_direction(self) -> i8 {
        -self.direction()
    }

    pub const fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// True when a pawn of this alliance promotes on the given tile.
    pub const fn is_pawn_promotion_square(self, coordinate: i8) -> bool {
        match self {
            Alliance::White => coordinate >= 0 && coordinate < 8,
            Alliance::Black => coordinate >= 56 && coordinate < 64,
        }
    }
}

impl std::fmt::Display for Alliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

/// Castle bookkeeping carried on the king itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KingFlags {
    pub castled: bool,
    pub king_side_capable: bool,
    pub queen_side_capable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King(KingFlags),
}

impl PieceKind {
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King(_) => 'K',
        }
    }

    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub alliance: Alliance,
    pub position: i8,
    pub is_first_move: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, alliance: Alliance, position: i8, is_first_move: bool) -> Self {
        Piece {
            kind,
            alliance,
            position,
            is_first_move,
        }
    }

    pub const fn pawn(alliance: Alliance, position: i8) -> Self {
        Piece::new(PieceKind::Pawn, alliance, position, true)
    }

    pub const fn knight(alliance: Alliance, position: i8) -> Self {
        Piece::new(PieceKind::Knight, alliance, position, true)
    }

    pub const fn bishop(alliance: Alliance, position: i8) -> Self {
        Piece::new(PieceKind::Bishop, alliance, position, true)
    }

    pub const fn rook(alliance: Alliance, position: i8) -> Self {
        Piece::new(PieceKind::Rook, alliance, position, true)
    }

    pub const fn queen(alliance: Alliance, position: i8) -> Self {
        Piece::new(PieceKind::Queen, alliance, position, true)
    }

    pub const fn king(
        alliance: Alliance,
        position: i8,
        king_side_capable: bool,
        queen_side_capable: bool,
    ) -> Self {
        Piece::new(
            PieceKind::King(KingFlags {
                castled: false,
                king_side_capable,
                queen_side_capable,
            }),
            alliance,
            position,
            true,
        )
    }

    pub const fn value(&self) -> i32 {
        match self.kind {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King(_) => KING_VALUE,
        }
    }

    pub const fn is_castled(&self) -> bool {
        match self.kind {
            PieceKind::King(flags) => flags.castled,
            _ => false,
        }
    }

    /// The piece as it stands after making `mv`: relocated, first-move
    /// flag cleared, king castle bookkeeping updated.
    pub fn move_piece(&self, mv: &Move) -> Piece {
        let kind = match self.kind {
            PieceKind::King(flags) => PieceKind::King(KingFlags {
                castled: flags.castled || mv.is_castling_move(),
                king_side_capable: false,
                queen_side_capable: false,
            }),
            other => other,
        };
        Piece::new(kind, self.alliance, mv.destination(), false)
    }

    /// Pseudo-legal moves for this piece on `board`. Own-king safety is
    /// not considered here.
    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(board),
            PieceKind::Knight => self.stepping_moves(board, &KNIGHT_OFFSETS, knight_wraps),
            PieceKind::Bishop => self.sliding_moves(board, &BISHOP_OFFSETS),
            PieceKind::Rook => self.sliding_moves(board, &ROOK_OFFSETS),
            PieceKind::Queen => self.sliding_moves(board, &QUEEN_OFFSETS),
            PieceKind::King(_) => self.stepping_moves(board, &KING_OFFSETS, one_step_wraps),
        }
    }

    /// Single-step pieces (knight and king): one offset table, one wrap
    /// predicate over the current tile.
    fn stepping_moves(
        &self,
        board: &Board,
        offsets: &[i8],
        wraps: fn(i8, i8) -> bool,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for &offset in offsets {
            if wraps(self.position, offset) {
                continue;
            }
            let destination = self.position + offset;
            if !is_valid_tile_coordinate(destination) {
                continue;
            }
            match board.piece_at(destination) {
                None => moves.push(Move::new(*self, destination, MoveKind::Major)),
                Some(occupant) => {
                    if occupant.alliance != self.alliance {
                        moves.push(Move::new(
                            *self,
                            destination,
                            MoveKind::MajorAttack { attacked: occupant },
                        ));
                    }
                }
            }
        }
        moves
    }

    /// Ray pieces (bishop, rook, queen): walk each offset until the edge,
    /// a blocker, or a capture.
    fn sliding_moves(&self, board: &Board, offsets: &[i8]) -> Vec<Move> {
        let mut moves = Vec::new();
        for &offset in offsets {
            let mut current = self.position;
            loop {
                if one_step_wraps(current, offset) {
                    break;
                }
                let destination = current + offset;
                if !is_valid_tile_coordinate(destination) {
                    break;
                }
                match board.piece_at(destination) {
                    None => {
                        moves.push(Move::new(*self, destination, MoveKind::Major));
                        current = destination;
                    }
                    Some(occupant) => {
                        if occupant.alliance != self.alliance {
                            moves.push(Move::new(
                                *self,
                                destination,
                                MoveKind::MajorAttack { attacked: occupant },
                            ));
                        }
                        break;
                    }
                }
            }
        }
        moves
    }

    fn pawn_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        let direction = self.alliance.direction();
        for &offset in &PAWN_OFFSETS {
            let destination = self.position + offset * direction;
            if !is_valid_tile_coordinate(destination) {
                continue;
            }
            match offset {
                8 => {
                    if board.piece_at(destination).is_none() {
                        let advance = Move::new(*self, destination, MoveKind::PawnMove);
                        moves.push(decorate_if_promotion(advance, self.alliance, destination));
                    }
                }
                16 => {
                    let on_start_rank = match self.alliance {
                        Alliance::White => SECOND_RANK[self.position as usize],
                        Alliance::Black => SEVENTH_RANK[self.position as usize],
                    };
                    let jumped_over = self.position + 8 * direction;
                    if self.is_first_move
                        && on_start_rank
                        && board.piece_at(jumped_over).is_none()
                        && board.piece_at(destination).is_none()
                    {
                        moves.push(Move::new(*self, destination, MoveKind::PawnJump));
                    }
                }
                7 | 9 => {
                    if pawn_capture_wraps(self.position, offset, self.alliance) {
                        continue;
                    }
                    if let Some(occupant) = board.piece_at(destination) {
                        if occupant.alliance != self.alliance {
                            let attack = Move::new(
                                *self,
                                destination,
                                MoveKind::PawnAttack { attacked: occupant },
                            );
                            moves.push(decorate_if_promotion(attack, self.alliance, destination));
                        }
                    } else if let Some(ep_pawn) = board.en_passant_pawn() {
                        // The jumped pawn stands beside us, one file over in
                        // the capture direction.
                        let beside = match offset {
                            7 => self.position + self.alliance.opposite_direction(),
                            _ => self.position - self.alliance.opposite_direction(),
                        };
                        if ep_pawn.position == beside && ep_pawn.alliance != self.alliance {
                            moves.push(Move::new(
                                *self,
                                destination,
                                MoveKind::PawnEnPassantAttack { attacked: ep_pawn },
                            ));
                        }
                    }
                }
                _ => unreachable!(),
            }
        }
        moves
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind.letter())
    }
}

fn decorate_if_promotion(mv: Move, alliance: Alliance, destination: i8) -> Move {
    if alliance.is_pawn_promotion_square(destination) {
        Move::pawn_promotion(mv)
    } else {
        mv
    }
}

/// Knight offsets that would wrap across the board edge from `position`.
fn knight_wraps(position: i8, offset: i8) -> bool {
    let tile = position as usize;
    (FIRST_COLUMN[tile] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[tile] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[tile] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[tile] && matches!(offset, -15 | -6 | 10 | 17))
}

/// One-step diagonal/horizontal offsets that would wrap (king, sliders).
fn one_step_wraps(position: i8, offset: i8) -> bool {
    let tile = position as usize;
    (FIRST_COLUMN[tile] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN[tile] && matches!(offset, -7 | 1 | 9))
}

/// Pawn capture offsets that would wrap, per capture direction.
fn pawn_capture_wraps(position: i8, offset: i8, alliance: Alliance) -> bool {
    let tile = position as usize;
    match (offset, alliance) {
        (7, Alliance::White) => EIGHTH_COLUMN[tile],
        (7, Alliance::Black) => FIRST_COLUMN[tile],
        (9, Alliance::White) => FIRST_COLUMN[tile],
        (9, Alliance::Black) => EIGHTH_COLUMN[tile],
        _ => false,
    }
}

#[cfg(test)]
#[path = "pieces_tests.rs"]
mod pieces_tests;
