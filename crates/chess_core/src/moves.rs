//! The move type, its execution against a board, and the transition
//! statuses the legality gate hands back.
//!
//! One `Move` struct covers every move shape; `MoveKind` tags the
//! variant and `execute` dispatches on it. Executing a move never
//! mutates the source board: it builds and freezes a fresh one.

use crate::board::{Board, BoardBuilder};
use crate::board_utils::position_at_coordinate;
use crate::pieces::{Piece, PieceKind};

/// Outcome of asking a player to make a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveKind {
    /// Quiet move of any non-pawn piece.
    Major,
    MajorAttack {
        attacked: Piece,
    },
    /// Single-square pawn advance.
    PawnMove,
    /// Double advance from the start rank; arms en passant.
    PawnJump,
    PawnAttack {
        attacked: Piece,
    },
    /// The captured pawn sits beside the mover, not on the destination.
    PawnEnPassantAttack {
        attacked: Piece,
    },
    /// Wraps the underlying advance or capture; the arriving pawn
    /// becomes a queen.
    PawnPromotion {
        decorated: Box<Move>,
    },
    KingSideCastle {
        rook: Piece,
        rook_destination: i8,
    },
    QueenSideCastle {
        rook: Piece,
        rook_destination: i8,
    },
    /// Sentinel for "no move"; cannot be executed.
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    moved_piece: Option<Piece>,
    destination: i8,
    is_first_move: bool,
    kind: MoveKind,
}

impl Move {
    pub fn new(moved_piece: Piece, destination: i8, kind: MoveKind) -> Self {
        Move {
            moved_piece: Some(moved_piece),
            destination,
            is_first_move: moved_piece.is_first_move,
            kind,
        }
    }

    pub fn pawn_promotion(decorated: Move) -> Self {
        Move {
            moved_piece: decorated.moved_piece,
            destination: decorated.destination,
            is_first_move: decorated.is_first_move,
            kind: MoveKind::PawnPromotion {
                decorated: Box::new(decorated),
            },
        }
    }

    pub const fn null_move() -> Self {
        Move {
            moved_piece: None,
            destination: -1,
            is_first_move: false,
            kind: MoveKind::Null,
        }
    }

    pub fn moved_piece(&self) -> Option<Piece> {
        self.moved_piece
    }

    pub const fn destination(&self) -> i8 {
        self.destination
    }

    /// Tile the moved piece departs from, or -1 for the null move.
    pub fn current_coordinate(&self) -> i8 {
        self.moved_piece.map_or(-1, |piece| piece.position)
    }

    pub const fn kind(&self) -> &MoveKind {
        &self.kind
    }

    pub const fn is_null(&self) -> bool {
        matches!(self.kind, MoveKind::Null)
    }

    pub fn is_attack(&self) -> bool {
        match &self.kind {
            MoveKind::MajorAttack { .. }
            | MoveKind::PawnAttack { .. }
            | MoveKind::PawnEnPassantAttack { .. } => true,
            MoveKind::PawnPromotion { decorated } => decorated.is_attack(),
            _ => false,
        }
    }

    pub fn attacked_piece(&self) -> Option<Piece> {
        match &self.kind {
            MoveKind::MajorAttack { attacked }
            | MoveKind::PawnAttack { attacked }
            | MoveKind::PawnEnPassantAttack { attacked } => Some(*attacked),
            MoveKind::PawnPromotion { decorated } => decorated.attacked_piece(),
            _ => None,
        }
    }

    pub const fn is_castling_move(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::KingSideCastle { .. } | MoveKind::QueenSideCastle { .. }
        )
    }

    /// Builds the successor board this move produces. The mover is
    /// relocated, any captured piece is gone, the move maker flips, and
    /// this move is recorded as the new board's producing move.
    ///
    /// Panics on the null move.
    pub fn execute(&self, board: &Board) -> Board {
        match &self.kind {
            MoveKind::Major | MoveKind::MajorAttack { .. } | MoveKind::PawnMove
            | MoveKind::PawnAttack { .. } => self.execute_standard(board),
            MoveKind::PawnJump => self.execute_pawn_jump(board),
            MoveKind::PawnEnPassantAttack { attacked } => self.execute_en_passant(board, attacked),
            MoveKind::PawnPromotion { decorated } => self.execute_promotion(board, decorated),
            MoveKind::KingSideCastle {
                rook,
                rook_destination,
            }
            | MoveKind::QueenSideCastle {
                rook,
                rook_destination,
            } => self.execute_castle(board, rook, *rook_destination),
            MoveKind::Null => panic!("cannot execute the null move"),
        }
    }

    fn mover(&self) -> Piece {
        self.moved_piece
            .expect("non-null move always carries its piece")
    }

    /// Shared shape of most executes: keep every piece except the mover,
    /// place the moved piece last so it lands on top of any victim.
    fn execute_standard(&self, board: &Board) -> Board {
        let moved = self.mover();
        let mut builder = BoardBuilder::new();
        for piece in board.pieces(moved.alliance) {
            if *piece != moved {
                builder = builder.set_piece(*piece);
            }
        }
        for piece in board.pieces(moved.alliance.opponent()) {
            builder = builder.set_piece(*piece);
        }
        builder
            .set_piece(moved.move_piece(self))
            .set_move_maker(moved.alliance.opponent())
            .set_transition_move(self.clone())
            .build()
    }

    fn execute_pawn_jump(&self, board: &Board) -> Board {
        let moved = self.mover();
        let jumped_pawn = moved.move_piece(self);
        let mut builder = BoardBuilder::new();
        for piece in board.pieces(moved.alliance) {
            if *piece != moved {
                builder = builder.set_piece(*piece);
            }
        }
        for piece in board.pieces(moved.alliance.opponent()) {
            builder = builder.set_piece(*piece);
        }
        builder
            .set_piece(jumped_pawn)
            .set_en_passant_pawn(jumped_pawn)
            .set_move_maker(moved.alliance.opponent())
            .set_transition_move(self.clone())
            .build()
    }

    fn execute_en_passant(&self, board: &Board, attacked: &Piece) -> Board {
        let moved = self.mover();
        let mut builder = BoardBuilder::new();
        for piece in board.pieces(moved.alliance) {
            if *piece != moved {
                builder = builder.set_piece(*piece);
            }
        }
        // The victim is beside the destination, so the overwrite trick
        // does not remove it; skip it explicitly.
        for piece in board.pieces(moved.alliance.opponent()) {
            if piece != attacked {
                builder = builder.set_piece(*piece);
            }
        }
        builder
            .set_piece(moved.move_piece(self))
            .set_move_maker(moved.alliance.opponent())
            .set_transition_move(self.clone())
            .build()
    }

    fn execute_promotion(&self, board: &Board, decorated: &Move) -> Board {
        let moved = self.mover();
        let after_move = decorated.execute(board);
        let mut builder = BoardBuilder::new();
        let arrived = moved.move_piece(self);
        for piece in after_move.all_pieces() {
            if *piece != arrived {
                builder = builder.set_piece(*piece);
            }
        }
        builder
            .set_piece(Piece::new(
                PieceKind::Queen,
                moved.alliance,
                self.destination,
                false,
            ))
            .set_move_maker(moved.alliance.opponent())
            .set_transition_move(self.clone())
            .build()
    }

    fn execute_castle(&self, board: &Board, rook: &Piece, rook_destination: i8) -> Board {
        let moved = self.mover();
        let mut builder = BoardBuilder::new();
        for piece in board.pieces(moved.alliance) {
            if *piece != moved && piece != rook {
                builder = builder.set_piece(*piece);
            }
        }
        for piece in board.pieces(moved.alliance.opponent()) {
            builder = builder.set_piece(*piece);
        }
        builder
            .set_piece(moved.move_piece(self))
            .set_piece(Piece::new(
                PieceKind::Rook,
                moved.alliance,
                rook_destination,
                false,
            ))
            .set_move_maker(moved.alliance.opponent())
            .set_transition_move(self.clone())
            .build()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            MoveKind::Null => write!(f, "--"),
            MoveKind::KingSideCastle { .. } => write!(f, "O-O"),
            MoveKind::QueenSideCastle { .. } => write!(f, "O-O-O"),
            MoveKind::PawnMove | MoveKind::PawnJump => {
                write!(f, "{}", position_at_coordinate(self.destination))
            }
            MoveKind::PawnAttack { .. } | MoveKind::PawnEnPassantAttack { .. } => {
                let from = position_at_coordinate(self.current_coordinate());
                write!(f, "{}x{}", &from[..1], position_at_coordinate(self.destination))
            }
            MoveKind::PawnPromotion { decorated } => write!(f, "{decorated}=Q"),
            MoveKind::Major => write!(
                f,
                "{}{}",
                self.mover().kind.letter(),
                position_at_coordinate(self.destination)
            ),
            MoveKind::MajorAttack { .. } => write!(
                f,
                "{}x{}",
                self.mover().kind.letter(),
                position_at_coordinate(self.destination)
            ),
        }
    }
}

/// Looks up the legal move from `from` to `to` on `board`, or the null
/// move when no such move exists.
pub fn create_move(board: &Board, from: i8, to: i8) -> Move {
    board
        .all_legal_moves()
        .find(|mv| mv.current_coordinate() == from && mv.destination() == to)
        .cloned()
        .unwrap_or_else(Move::null_move)
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
