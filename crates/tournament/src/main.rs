//! Tournament CLI
//!
//! Run matches between strategies and track Elo ratings.

use chess_core::MoveStrategy;
use classical_engine::AlphaBeta;
use random_engine::RandomStrategy;
use std::env;
use tournament::{
    quick_match, EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};

const ELO_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Chess Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D]");
    println!("  tournament gauntlet <challenger> [--games N] [--depth D]");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Minimax with alpha-beta pruning");
    println!("  random        - Uniform random legal moves");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta random --games 20 --depth 3");
    println!("  tournament gauntlet alphabeta --games 10");
}

fn create_strategy(spec: &str, depth: u8) -> Box<dyn MoveStrategy> {
    match spec.to_lowercase().as_str() {
        "alphabeta" | "classical" => Box::new(AlphaBeta::new(depth)),
        "random" => Box::new(RandomStrategy::new()),
        _ => {
            eprintln!("Unknown engine: {}, using alphabeta", spec);
            Box::new(AlphaBeta::new(depth))
        }
    }
}

/// Parses trailing `--games N` / `--depth D` flags.
fn parse_flags(args: &[String], start: usize) -> (u32, u8) {
    let mut num_games: u32 = 10;
    let mut depth: u8 = 3;

    let mut i = start;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    depth = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    (num_games, depth)
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let (num_games, depth) = parse_flags(args, 2);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", num_games, depth);
    println!();

    let mut strategy1 = create_strategy(engine1_spec, depth);
    let mut strategy2 = create_strategy(engine2_spec, depth);

    let config = MatchConfig {
        num_games,
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(strategy1.as_mut(), strategy2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!(
        "Boards evaluated: {} / {}",
        strategy1.num_boards_evaluated(),
        strategy2.num_boards_evaluated()
    );

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let (num_games, depth) = parse_flags(args, 1);

    let challenger_name = challenger_spec.to_lowercase();
    let opponents: Vec<&str> = ["alphabeta", "random"]
        .into_iter()
        .filter(|name| *name != challenger_name)
        .collect();

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}, Depth: {}", num_games, depth);
    println!();

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: num_games,
            search_depth: depth,
            ..Default::default()
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_strategy(challenger_spec, depth);
        let mut opp_strategy = create_strategy(opponent, depth);

        let result = quick_match(challenger.as_mut(), opp_strategy.as_mut(), num_games);

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
