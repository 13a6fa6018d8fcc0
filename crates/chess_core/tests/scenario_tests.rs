//! Scripted full-game scenarios driven through the public interface.
//!
//! Each case is a sequence of (from, to) tile moves from the standard
//! position plus the expected state at the end. Cases run in parallel.

use rayon::prelude::*;

use chess_core::board::Board;
use chess_core::board_utils::{coordinate_at_position, is_end_game};
use chess_core::moves::create_move;
use chess_core::pieces::{Alliance, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Expected {
    /// Game still running, given side to move
    Ongoing(Alliance),
    /// Side to move is checkmated
    CheckMate(Alliance),
}

struct Scenario {
    name: &'static str,
    moves: &'static [(&'static str, &'static str)],
    expected: Expected,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "fools_mate",
        moves: &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        expected: Expected::CheckMate(Alliance::White),
    },
    Scenario {
        name: "scholars_mate",
        moves: &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
        expected: Expected::CheckMate(Alliance::Black),
    },
    Scenario {
        name: "italian_opening",
        moves: &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
        ],
        expected: Expected::Ongoing(Alliance::White),
    },
    Scenario {
        name: "white_castles_short",
        moves: &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
            ("e1", "g1"),
        ],
        expected: Expected::Ongoing(Alliance::Black),
    },
    Scenario {
        name: "en_passant_capture",
        moves: &[
            ("e2", "e4"),
            ("a7", "a6"),
            ("e4", "e5"),
            ("d7", "d5"),
            ("e5", "d6"),
        ],
        expected: Expected::Ongoing(Alliance::Black),
    },
];

fn run_scenario(scenario: &Scenario) -> Board {
    let mut board = Board::standard();
    for (ply, (from, to)) in scenario.moves.iter().enumerate() {
        let from = coordinate_at_position(from)
            .unwrap_or_else(|| panic!("{}: bad square {}", scenario.name, from));
        let to = coordinate_at_position(to)
            .unwrap_or_else(|| panic!("{}: bad square {}", scenario.name, to));
        let mv = create_move(&board, from, to);
        assert!(
            !mv.is_null(),
            "{}: ply {} has no move {}->{}",
            scenario.name,
            ply + 1,
            from,
            to
        );
        let transition = board.current_player().make_move(&board, &mv);
        assert!(
            transition.status().is_done(),
            "{}: ply {} rejected with {:?}",
            scenario.name,
            ply + 1,
            transition.status()
        );
        board = transition.into_board().unwrap();
    }
    board
}

#[test]
fn scripted_games_reach_expected_states() {
    SCENARIOS.par_iter().for_each(|scenario| {
        let board = run_scenario(scenario);
        match scenario.expected {
            Expected::Ongoing(side) => {
                assert_eq!(
                    board.current_player().alliance(),
                    side,
                    "{}: wrong side to move",
                    scenario.name
                );
                assert!(!is_end_game(&board), "{}: game ended early", scenario.name);
            }
            Expected::CheckMate(side) => {
                let player = board.player(side);
                assert!(
                    player.is_in_check_mate(&board),
                    "{}: expected {side} to be mated",
                    scenario.name
                );
                assert!(is_end_game(&board), "{}: end not detected", scenario.name);
            }
        }
    });
}

#[test]
fn castling_scenario_leaves_king_castled() {
    let board = run_scenario(&SCENARIOS[3]);
    let white = board.white_player();
    assert!(white.is_castled());
    let king = board
        .piece_at(coordinate_at_position("g1").unwrap())
        .expect("king landed on g1");
    assert!(king.kind.is_king());
    let rook = board
        .piece_at(coordinate_at_position("f1").unwrap())
        .expect("rook landed on f1");
    assert_eq!(rook.kind, PieceKind::Rook);
}

#[test]
fn en_passant_scenario_removes_the_jumped_pawn() {
    let board = run_scenario(&SCENARIOS[4]);
    let d5 = coordinate_at_position("d5").unwrap();
    let d6 = coordinate_at_position("d6").unwrap();
    assert!(board.piece_at(d5).is_none());
    let capturer = board.piece_at(d6).expect("capturing pawn stands on d6");
    assert_eq!(capturer.kind, PieceKind::Pawn);
    assert_eq!(capturer.alliance, Alliance::White);
    assert_eq!(board.pieces(Alliance::Black).len(), 15);
}

#[test]
fn scripted_games_preserve_exactly_two_kings() {
    SCENARIOS.par_iter().for_each(|scenario| {
        let board = run_scenario(scenario);
        let kings = board
            .all_pieces()
            .filter(|piece| piece.kind.is_king())
            .count();
        assert_eq!(kings, 2, "{}: king count drifted", scenario.name);
    });
}
