use super::*;
use chess_core::board::{Board, BoardBuilder};
use chess_core::pieces::Piece;

fn with_pawns(white: &[i8], black: &[i8]) -> Board {
    let mut builder = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, false, false))
        .set_piece(Piece::king(Alliance::Black, 4, false, false));
    for &tile in white {
        builder = builder.set_piece(Piece::pawn(Alliance::White, tile));
    }
    for &tile in black {
        builder = builder.set_piece(Piece::pawn(Alliance::Black, tile));
    }
    builder.set_move_maker(Alliance::White).build()
}

#[test]
fn test_standard_structure_is_neutral_and_symmetric() {
    let board = Board::standard();
    let analyzer = PawnStructureAnalyzer::new();
    let white = analyzer.pawn_structure_score(&board, board.white_player());
    let black = analyzer.pawn_structure_score(&board, board.black_player());
    assert_eq!(white, black);
    assert_eq!(white, 0);
}

#[test]
fn test_lone_pawn_is_isolated_but_passed() {
    // e2 pawn, no neighbors, no opposition: -10 isolated, +25 passed
    let board = with_pawns(&[52], &[]);
    let analyzer = PawnStructureAnalyzer::new();
    assert_eq!(
        analyzer.pawn_structure_score(&board, board.white_player()),
        15
    );
}

#[test]
fn test_doubled_pawns_are_penalized() {
    // e2 + e3: one doubling, both isolated, both passed
    let board = with_pawns(&[52, 44], &[]);
    let analyzer = PawnStructureAnalyzer::new();
    assert_eq!(
        analyzer.pawn_structure_score(&board, board.white_player()),
        -10 - 20 + 50
    );
}

#[test]
fn test_connected_pawns_are_not_isolated() {
    // d2 + e2: neighbors on adjacent files, both passed
    let board = with_pawns(&[51, 52], &[]);
    let analyzer = PawnStructureAnalyzer::new();
    assert_eq!(
        analyzer.pawn_structure_score(&board, board.white_player()),
        50
    );
}

#[test]
fn test_opposed_pawn_is_not_passed() {
    // white e4 faces black e7
    let board = with_pawns(&[36], &[12]);
    let analyzer = PawnStructureAnalyzer::new();
    assert_eq!(
        analyzer.pawn_structure_score(&board, board.white_player()),
        -10
    );
    assert_eq!(
        analyzer.pawn_structure_score(&board, board.black_player()),
        -10
    );
}

#[test]
fn test_adjacent_file_blocker_denies_passer() {
    // white e4 against black d6: the d-pawn still guards e-file progress
    let board = with_pawns(&[36], &[19]);
    let analyzer = PawnStructureAnalyzer::new();
    assert_eq!(
        analyzer.pawn_structure_score(&board, board.white_player()),
        -10
    );
}
