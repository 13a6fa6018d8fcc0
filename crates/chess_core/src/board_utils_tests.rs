use super::*;

#[test]
fn test_column_tables() {
    // a-file: 0, 8, .., 56
    for tile in (0..NUM_TILES).step_by(NUM_TILES_PER_ROW) {
        assert!(FIRST_COLUMN[tile]);
        assert!(!EIGHTH_COLUMN[tile]);
    }
    // h-file: 7, 15, .., 63
    for tile in (7..NUM_TILES).step_by(NUM_TILES_PER_ROW) {
        assert!(EIGHTH_COLUMN[tile]);
        assert!(!FIRST_COLUMN[tile]);
    }
    assert_eq!(FIRST_COLUMN.iter().filter(|&&member| member).count(), 8);
    assert_eq!(SECOND_COLUMN.iter().filter(|&&member| member).count(), 8);
    assert_eq!(SEVENTH_COLUMN.iter().filter(|&&member| member).count(), 8);
    assert_eq!(EIGHTH_COLUMN.iter().filter(|&&member| member).count(), 8);
}

#[test]
fn test_rank_tables() {
    for tile in 0..8 {
        assert!(EIGHTH_RANK[tile]);
    }
    for tile in 48..56 {
        assert!(SECOND_RANK[tile]);
    }
    for tile in 56..64 {
        assert!(FIRST_RANK[tile]);
    }
    assert_eq!(FOURTH_RANK.iter().filter(|&&member| member).count(), 8);
    assert_eq!(FIFTH_RANK.iter().filter(|&&member| member).count(), 8);
}

#[test]
fn test_valid_tile_coordinate() {
    assert!(is_valid_tile_coordinate(0));
    assert!(is_valid_tile_coordinate(63));
    assert!(!is_valid_tile_coordinate(-1));
    assert!(!is_valid_tile_coordinate(64));
}

#[test]
fn test_algebraic_notation_round_trip() {
    assert_eq!(position_at_coordinate(0), "a8");
    assert_eq!(position_at_coordinate(63), "h1");
    assert_eq!(position_at_coordinate(36), "e4");
    assert_eq!(coordinate_at_position("a8"), Some(0));
    assert_eq!(coordinate_at_position("e4"), Some(36));
    assert_eq!(coordinate_at_position("z9"), None);
}

#[test]
fn test_mvv_lva_ranks_captures_first() {
    use crate::moves::{Move, MoveKind};
    use crate::pieces::{Alliance, Piece};

    let pawn = Piece::pawn(Alliance::White, 52);
    let queen = Piece::queen(Alliance::Black, 36);

    let quiet = Move::new(pawn, 44, MoveKind::PawnMove);
    let capture = Move::new(pawn, 36, MoveKind::PawnAttack { attacked: queen });

    assert!(mvv_lva(&capture) > mvv_lva(&quiet));
    // Taking a queen with a pawn outranks taking a pawn with a queen
    let heavy_takes_light = Move::new(
        Piece::queen(Alliance::White, 59),
        36,
        MoveKind::MajorAttack {
            attacked: Piece::pawn(Alliance::Black, 36),
        },
    );
    assert!(mvv_lva(&capture) > mvv_lva(&heavy_takes_light));
    assert_eq!(mvv_lva(&Move::null_move()), 0);
}

#[test]
fn test_end_game_detection_on_fresh_board() {
    use crate::board::Board;

    let board = Board::standard();
    assert!(!is_end_game(&board));
}
