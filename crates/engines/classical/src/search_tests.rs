use super::*;
use chess_core::board::{Board, BoardBuilder};
use chess_core::moves::create_move;
use chess_core::pieces::{Piece, PieceKind};

fn play_sequence(moves: &[(i8, i8)]) -> Board {
    let mut board = Board::standard();
    for &(from, to) in moves {
        let mv = create_move(&board, from, to);
        board = board
            .current_player()
            .make_move(&board, &mv)
            .into_board()
            .expect("scripted move is legal");
    }
    board
}

#[test]
fn test_finds_fools_mate_for_black() {
    // after 1. f3 e5 2. g4 the queen mates on h4
    let board = play_sequence(&[(53, 45), (12, 28), (54, 38)]);
    let mut strategy = AlphaBeta::new(1);
    let best = strategy.execute(&board);

    assert_eq!(best.current_coordinate(), 3);
    assert_eq!(best.destination(), 39);
}

#[test]
fn test_finds_back_rank_mate_for_white() {
    // Ra1-a8 mates the boxed-in king
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, false, false))
        .set_piece(Piece::rook(Alliance::White, 56))
        .set_piece(Piece::king(Alliance::Black, 7, false, false))
        .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 14, false))
        .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 15, false))
        .set_move_maker(Alliance::White)
        .build();
    let mut strategy = AlphaBeta::new(2);
    let best = strategy.execute(&board);

    assert_eq!(best.current_coordinate(), 56);
    assert_eq!(best.destination(), 0);
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::standard();
    let first = AlphaBeta::new(2).execute(&board);
    let second = AlphaBeta::new(2).execute(&board);
    assert_eq!(first, second);
}

#[test]
fn test_board_counter_is_cumulative() {
    let board = Board::standard();
    let mut strategy = AlphaBeta::new(1);
    assert_eq!(strategy.num_boards_evaluated(), 0);

    strategy.execute(&board);
    let after_first = strategy.num_boards_evaluated();
    assert!(after_first > 0);

    strategy.execute(&board);
    assert!(strategy.num_boards_evaluated() > after_first);
}

#[test]
fn test_deeper_searches_evaluate_at_least_as_many_boards() {
    let board = Board::standard();
    let mut previous = 0;
    for depth in 1..=3 {
        let mut strategy = AlphaBeta::new(depth);
        strategy.execute(&board);
        let evaluated = strategy.num_boards_evaluated();
        assert!(
            evaluated >= previous,
            "depth {} evaluated {} boards, shallower search saw {}",
            depth,
            evaluated,
            previous
        );
        previous = evaluated;
    }
    assert!(previous > 0);
}

#[test]
fn test_mated_root_returns_null_move() {
    let board = play_sequence(&[(53, 45), (12, 28), (54, 38), (3, 39)]);
    assert!(board.white_player().is_in_check_mate(&board));

    let mut strategy = AlphaBeta::new(2);
    assert!(strategy.execute(&board).is_null());
}

#[test]
fn test_custom_evaluator_is_honored() {
    struct MaterialOnly;
    impl chess_core::BoardEvaluator for MaterialOnly {
        fn evaluate(&self, board: &Board, _depth: u8) -> i32 {
            let sum = |alliance| {
                board
                    .pieces(alliance)
                    .iter()
                    .map(|piece| piece.value())
                    .sum::<i32>()
            };
            sum(Alliance::White) - sum(Alliance::Black)
        }
    }

    // White queen takes the hanging rook outright
    let board = BoardBuilder::new()
        .set_piece(Piece::king(Alliance::White, 60, false, false))
        .set_piece(Piece::queen(Alliance::White, 59))
        .set_piece(Piece::king(Alliance::Black, 4, false, false))
        .set_piece(Piece::rook(Alliance::Black, 27)) // d5
        .set_move_maker(Alliance::White)
        .build();
    let mut strategy = AlphaBeta::with_evaluator(1, MaterialOnly);
    let best = strategy.execute(&board);

    assert!(best.is_attack());
    assert_eq!(best.destination(), 27);
}
