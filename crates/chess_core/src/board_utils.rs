//! Board geometry: dimensions, file/rank membership tables, coordinate
//! helpers, and the small board-wide predicates shared by move generation
//! and search.
//!
//! Tiles are indexed 0..64 row-major with 0 = a8 (top-left from White's
//! view) and 63 = h1. All tables are computed once at compile time.

use crate::board::Board;
use crate::moves::Move;
use crate::pieces::{Piece, PieceKind, KING_VALUE};

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

/// Membership table for one file (column), e.g. `FIRST_COLUMN[8] == true`.
const fn init_column(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut tile = column;
    while tile < NUM_TILES {
        table[tile] = true;
        tile += NUM_TILES_PER_ROW;
    }
    table
}

/// Membership table for one rank, identified by its leftmost tile index.
const fn init_row(row_start: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut tile = row_start;
    loop {
        table[tile] = true;
        tile += 1;
        if tile % NUM_TILES_PER_ROW == 0 {
            break;
        }
    }
    table
}

pub const FIRST_COLUMN: [bool; NUM_TILES] = init_column(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = init_column(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = init_column(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = init_column(7);

pub const EIGHTH_RANK: [bool; NUM_TILES] = init_row(0);
pub const SEVENTH_RANK: [bool; NUM_TILES] = init_row(8);
pub const SIXTH_RANK: [bool; NUM_TILES] = init_row(16);
pub const FIFTH_RANK: [bool; NUM_TILES] = init_row(24);
pub const FOURTH_RANK: [bool; NUM_TILES] = init_row(32);
pub const THIRD_RANK: [bool; NUM_TILES] = init_row(40);
pub const SECOND_RANK: [bool; NUM_TILES] = init_row(48);
pub const FIRST_RANK: [bool; NUM_TILES] = init_row(56);

const ALGEBRAIC_NOTATION: [&str; NUM_TILES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", //
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", //
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", //
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", //
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", //
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", //
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", //
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

pub const fn is_valid_tile_coordinate(coordinate: i8) -> bool {
    coordinate >= 0 && (coordinate as usize) < NUM_TILES
}

/// Algebraic name ("e4") of a tile index. The coordinate must be valid.
pub fn position_at_coordinate(coordinate: i8) -> &'static str {
    ALGEBRAIC_NOTATION[coordinate as usize]
}

/// Tile index of an algebraic name, if it names a tile at all.
pub fn coordinate_at_position(position: &str) -> Option<i8> {
    ALGEBRAIC_NOTATION
        .iter()
        .position(|&name| name == position)
        .map(|index| index as i8)
}

/// Most-Valuable-Victim minus Least-Valuable-Aggressor ordering score.
///
/// Captures are ranked ahead of quiet moves by a wide margin; among
/// captures, taking a big piece with a small one scores highest.
pub fn mvv_lva(mv: &Move) -> i32 {
    let Some(moving_piece) = mv.moved_piece() else {
        return 0;
    };
    if let Some(attacked_piece) = mv.attacked_piece() {
        return (attacked_piece.value() - moving_piece.value() + KING_VALUE) * 100;
    }
    KING_VALUE - moving_piece.value()
}

/// True when a hostile pawn sits on the given tile in front of the king.
/// Used to veto castling into a known pawn-storm trap.
pub fn is_king_pawn_trap(board: &Board, king: &Piece, front_tile: i8) -> bool {
    board
        .piece_at(front_tile)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.alliance != king.alliance)
}

/// The game is over when the side to move has no playable move.
pub fn is_end_game(board: &Board) -> bool {
    let player = board.current_player();
    player.is_in_check_mate(board) || player.is_in_stale_mate(board)
}

#[cfg(test)]
#[path = "board_utils_tests.rs"]
mod board_utils_tests;
