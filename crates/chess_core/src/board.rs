//! The immutable board snapshot and its builder.
//!
//! A board is frozen at construction: the builder collects placements
//! and metadata, then `build` computes both sides' pseudo-legal moves,
//! derives the legal sets (castles included), and stores the two
//! players. Nothing on a built board ever mutates; making a move means
//! executing it into a brand-new board.

use std::sync::OnceLock;

use crate::board_utils::{NUM_TILES, NUM_TILES_PER_ROW};
use crate::moves::Move;
use crate::pieces::{Alliance, Piece};
use crate::player::Player;

/// One square and whatever stands on it. A cheap copyable view.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub coordinate: i8,
    pub piece: Option<Piece>,
}

impl Tile {
    pub const fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.piece {
            None => write!(f, "-"),
            Some(piece) => match piece.alliance {
                Alliance::White => write!(f, "{}", piece.kind.letter()),
                Alliance::Black => write!(f, "{}", piece.kind.letter().to_ascii_lowercase()),
            },
        }
    }
}

#[derive(Debug)]
pub struct Board {
    tiles: [Option<Piece>; NUM_TILES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_player: OnceLock<Player>,
    black_player: OnceLock<Player>,
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Move,
}

impl Clone for Board {
    fn clone(&self) -> Self {
        let clone_lock = |lock: &OnceLock<Player>| {
            let fresh = OnceLock::new();
            if let Some(player) = lock.get() {
                let _ = fresh.set(player.clone());
            }
            fresh
        };
        Board {
            tiles: self.tiles,
            white_pieces: self.white_pieces.clone(),
            black_pieces: self.black_pieces.clone(),
            white_player: clone_lock(&self.white_player),
            black_player: clone_lock(&self.black_player),
            next_move_maker: self.next_move_maker,
            en_passant_pawn: self.en_passant_pawn,
            transition_move: self.transition_move.clone(),
        }
    }
}

impl Board {
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// The canonical opening position, White to move.
    pub fn standard() -> Board {
        let mut builder = BoardBuilder::new()
            .set_piece(Piece::rook(Alliance::Black, 0))
            .set_piece(Piece::knight(Alliance::Black, 1))
            .set_piece(Piece::bishop(Alliance::Black, 2))
            .set_piece(Piece::queen(Alliance::Black, 3))
            .set_piece(Piece::king(Alliance::Black, 4, true, true))
            .set_piece(Piece::bishop(Alliance::Black, 5))
            .set_piece(Piece::knight(Alliance::Black, 6))
            .set_piece(Piece::rook(Alliance::Black, 7));
        for tile in 8..16 {
            builder = builder.set_piece(Piece::pawn(Alliance::Black, tile));
        }
        for tile in 48..56 {
            builder = builder.set_piece(Piece::pawn(Alliance::White, tile));
        }
        builder
            .set_piece(Piece::rook(Alliance::White, 56))
            .set_piece(Piece::knight(Alliance::White, 57))
            .set_piece(Piece::bishop(Alliance::White, 58))
            .set_piece(Piece::queen(Alliance::White, 59))
            .set_piece(Piece::king(Alliance::White, 60, true, true))
            .set_piece(Piece::bishop(Alliance::White, 61))
            .set_piece(Piece::knight(Alliance::White, 62))
            .set_piece(Piece::rook(Alliance::White, 63))
            .set_move_maker(Alliance::White)
            .build()
    }

    pub fn tile(&self, coordinate: i8) -> Tile {
        Tile {
            coordinate,
            piece: self.tiles[coordinate as usize],
        }
    }

    pub fn piece_at(&self, coordinate: i8) -> Option<Piece> {
        self.tiles[coordinate as usize]
    }

    pub fn pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    pub fn white_player(&self) -> &Player {
        self.white_player
            .get()
            .expect("players are set when the board is built")
    }

    pub fn black_player(&self) -> &Player {
        self.black_player
            .get()
            .expect("players are set when the board is built")
    }

    pub fn player(&self, alliance: Alliance) -> &Player {
        match alliance {
            Alliance::White => self.white_player(),
            Alliance::Black => self.black_player(),
        }
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.next_move_maker)
    }

    pub const fn next_move_maker(&self) -> Alliance {
        self.next_move_maker
    }

    pub const fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// The move that produced this board, or the null move for a root
    /// position.
    pub const fn transition_move(&self) -> &Move {
        &self.transition_move
    }

    /// Both sides' legal moves, White's first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.white_player()
            .legal_moves()
            .iter()
            .chain(self.black_player().legal_moves().iter())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for coordinate in 0..NUM_TILES {
            write!(f, "{:>3}", self.tile(coordinate as i8).to_string())?;
            if (coordinate + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

pub struct BoardBuilder {
    config: [Option<Piece>; NUM_TILES],
    next_move_maker: Option<Alliance>,
    en_passant_pawn: Option<Piece>,
    transition_move: Move,
}

impl BoardBuilder {
    pub fn new() -> Self {
        BoardBuilder {
            config: [None; NUM_TILES],
            next_move_maker: None,
            en_passant_pawn: None,
            transition_move: Move::null_move(),
        }
    }

    pub fn set_piece(mut self, piece: Piece) -> Self {
        self.config[piece.position as usize] = Some(piece);
        self
    }

    pub fn set_move_maker(mut self, alliance: Alliance) -> Self {
        self.next_move_maker = Some(alliance);
        self
    }

    pub fn set_en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn set_transition_move(mut self, mv: Move) -> Self {
        self.transition_move = mv;
        self
    }

    /// Freezes the position. Computes pseudo-legal moves for both sides
    /// and derives the players (legal sets, castles, check bits).
    ///
    /// Panics when the move maker is unset or either side lacks a king.
    pub fn build(self) -> Board {
        let next_move_maker = self
            .next_move_maker
            .expect("board cannot be built without a move maker");
        let mut white_pieces = Vec::new();
        let mut black_pieces = Vec::new();
        for piece in self.config.iter().flatten() {
            match piece.alliance {
                Alliance::White => white_pieces.push(*piece),
                Alliance::Black => black_pieces.push(*piece),
            }
        }
        let board = Board {
            tiles: self.config,
            white_pieces,
            black_pieces,
            white_player: OnceLock::new(),
            black_player: OnceLock::new(),
            next_move_maker,
            en_passant_pawn: self.en_passant_pawn,
            transition_move: self.transition_move,
        };
        let white_standard: Vec<Move> = board
            .pieces(Alliance::White)
            .iter()
            .flat_map(|piece| piece.calculate_legal_moves(&board))
            .collect();
        let black_standard: Vec<Move> = board
            .pieces(Alliance::Black)
            .iter()
            .flat_map(|piece| piece.calculate_legal_moves(&board))
            .collect();
        let white = Player::new(&board, Alliance::White, &white_standard, &black_standard);
        let black = Player::new(&board, Alliance::Black, &black_standard, &white_standard);
        board
            .white_player
            .set(white)
            .expect("players are set exactly once");
        board
            .black_player
            .set(black)
            .expect("players are set exactly once");
        board
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
