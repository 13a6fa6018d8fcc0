use super::*;
use crate::board::{Board, BoardBuilder};
use crate::moves::create_move;

fn play(board: Board, from: i8, to: i8) -> Board {
    let mv = create_move(&board, from, to);
    assert!(!mv.is_null(), "no move from {from} to {to}");
    let transition = board.current_player().make_move(&board, &mv);
    assert!(transition.status().is_done(), "move {mv} rejected");
    transition.into_board().unwrap()
}

#[test]
fn test_make_move_done() {
    let board = Board::standard();
    let mv = create_move(&board, 52, 36); // e4
    let transition = board.current_player().make_move(&board, &mv);

    assert_eq!(transition.status(), MoveStatus::Done);
    assert_eq!(transition.transition_move(), &mv);
    let next = transition.to_board().unwrap();
    assert_eq!(next.next_move_maker(), Alliance::Black);
}

#[test]
fn test_make_move_rejects_illegal() {
    let board = Board::standard();
    // fabricated rook lift through its own pawn
    let rook = board.piece_at(63).unwrap();
    let mv = Move::new(rook, 39, MoveKind::Major);
    let transition = board.current_player().make_move(&board, &mv);

    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert!(transition.to_board().is_none());
}

#[test]
fn test_make_move_rejects_null() {
    let board = Board::standard();
    let transition = board
        .current_player()
        .make_move(&board, &Move::null_move());
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
}

#[test]
fn test_pinned_piece_leaves_player_in_check() {
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, false, false))
        .set_piece(Piece::rook(Alliance::White, 52)) // e2, pinned
        .set_piece(Piece::king(Alliance::Black, 0, false, false))
        .set_piece(Piece::rook(Alliance::Black, 12)) // e7
        .set_move_maker(Alliance::White)
        .build();
    let mv = create_move(&board, 52, 51); // rook steps off the e-file
    let transition = board.current_player().make_move(&board, &mv);

    assert_eq!(transition.status(), MoveStatus::LeavesPlayerInCheck);
    assert!(transition.to_board().is_none());
}

#[test]
fn test_fools_mate_is_checkmate() {
    let board = Board::standard();
    let board = play(board, 53, 45); // 1. f3
    let board = play(board, 12, 28); // 1... e5
    let board = play(board, 54, 38); // 2. g4
    let board = play(board, 3, 39); // 2... Qh4#

    let white = board.white_player();
    assert!(white.is_in_check());
    assert!(white.is_in_check_mate(&board));
    assert!(!white.is_in_stale_mate(&board));
}

#[test]
fn test_cornered_king_is_stalemated() {
    // Black king h8, White queen g6: every black move walks into her.
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, false, false))
        .set_piece(Piece::queen(Alliance::White, 22))
        .set_piece(Piece::king(Alliance::Black, 7, false, false))
        .set_move_maker(Alliance::Black)
        .build();
    let black = board.black_player();

    assert!(!black.is_in_check());
    assert!(black.is_in_stale_mate(&board));
    assert!(!black.is_in_check_mate(&board));
}

#[test]
fn test_castle_in_legal_set_when_path_clear() {
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, true, true))
        .set_piece(Piece::rook(Alliance::White, 63))
        .set_piece(Piece::rook(Alliance::White, 56))
        .set_piece(Piece::king(Alliance::Black, 4, false, false))
        .set_move_maker(Alliance::White)
        .build();
    let castles: Vec<_> = board
        .white_player()
        .legal_moves()
        .iter()
        .filter(|mv| mv.is_castling_move())
        .collect();
    assert_eq!(castles.len(), 2);
}

#[test]
fn test_no_castle_through_attacked_square() {
    // Black rook on f8 covers f1, the king's transit square.
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, true, true))
        .set_piece(Piece::rook(Alliance::White, 63))
        .set_piece(Piece::king(Alliance::Black, 4, false, false))
        .set_piece(Piece::rook(Alliance::Black, 5))
        .set_move_maker(Alliance::White)
        .build();
    assert!(!board
        .white_player()
        .legal_moves()
        .iter()
        .any(|mv| mv.is_castling_move()));
}

#[test]
fn test_no_castle_while_in_check() {
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, true, true))
        .set_piece(Piece::rook(Alliance::White, 63))
        .set_piece(Piece::king(Alliance::Black, 4, false, false))
        .set_piece(Piece::rook(Alliance::Black, 12)) // e7, checks down the file
        .set_move_maker(Alliance::White)
        .build();
    assert!(board.white_player().is_in_check());
    assert!(!board
        .white_player()
        .legal_moves()
        .iter()
        .any(|mv| mv.is_castling_move()));
}

#[test]
fn test_no_castle_into_pawn_trap() {
    // Hostile pawn directly in front of the king's home square.
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, true, true))
        .set_piece(Piece::rook(Alliance::White, 63))
        .set_piece(Piece::king(Alliance::Black, 4, false, false))
        .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 52, false))
        .set_move_maker(Alliance::White)
        .build();
    assert!(!board
        .white_player()
        .legal_moves()
        .iter()
        .any(|mv| mv.is_castling_move()));
}

#[test]
fn test_moved_rook_disables_its_castle() {
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, true, true))
        .set_piece(Piece::new(PieceKind::Rook, Alliance::White, 63, false))
        .set_piece(Piece::rook(Alliance::White, 56))
        .set_piece(Piece::king(Alliance::Black, 4, false, false))
        .set_move_maker(Alliance::White)
        .build();
    let castles: Vec<_> = board
        .white_player()
        .legal_moves()
        .iter()
        .filter(|mv| mv.is_castling_move())
        .collect();
    // only the queen side survives
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].destination(), 58);
}

#[test]
fn test_king_excursion_removes_castling_forever() {
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, true, true))
        .set_piece(Piece::rook(Alliance::White, 63))
        .set_piece(Piece::king(Alliance::Black, 4, false, false))
        .set_move_maker(Alliance::White)
        .build();
    assert!(board
        .white_player()
        .legal_moves()
        .iter()
        .any(|mv| mv.is_castling_move()));

    let board = play(board, 60, 59); // Kd1
    let board = play(board, 4, 3); // black shuffles
    let board = play(board, 59, 60); // Ke1, back home
    let board = play(board, 3, 4);

    assert!(!board
        .white_player()
        .legal_moves()
        .iter()
        .any(|mv| mv.is_castling_move()));
}

#[test]
fn test_attacks_on_tile() {
    let board = Board::standard();
    let white_moves = board.white_player().legal_moves();
    // f3 is reached by the g1 knight and the f2 pawn advance
    let attacks: Vec<_> =
        Player::calculate_attacks_on_tile(45, white_moves.iter()).collect();
    assert_eq!(attacks.len(), 2);
}
