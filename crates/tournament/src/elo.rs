//! Elo bookkeeping for engine matches.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rating assigned to an engine the first time it is seen
pub const DEFAULT_ELO: f64 = 1500.0;

/// Per-game rating swing scale
pub const K_FACTOR: f64 = 32.0;

/// Outcome of one game, from the first player's side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Tally of a multi-game match, from the first player's side
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one finished game.
    pub fn record(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of the available points taken, in 0.0..=1.0. An empty
    /// match scores 0.5 so it never moves a rating.
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One line of match history kept for later analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub timestamp: String,
    pub elo_change: f64,
}

/// Persistent rating table for every engine that has played
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    /// Current rating per engine name
    pub ratings: HashMap<String, f64>,
    /// Lifetime game count per engine name
    pub games_played: HashMap<String, u32>,
    /// Every match ever fed into `update_ratings`
    pub history: Vec<MatchRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Current rating, seeding an unseen engine at [`DEFAULT_ELO`].
    pub fn get_rating(&mut self, engine: &str) -> f64 {
        *self.ratings.entry(engine.to_string()).or_insert(DEFAULT_ELO)
    }

    /// Probability of engine1 taking a point off engine2.
    pub fn expected_score(&mut self, engine1: &str, engine2: &str) -> f64 {
        let r1 = self.get_rating(engine1);
        let r2 = self.get_rating(engine2);
        win_probability(r1, r2)
    }

    /// Fold a finished match into the table. Points move between the
    /// two engines only, so the pool total stays fixed.
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        let expected = self.expected_score(engine1, engine2);
        let elo_change = K_FACTOR * result.total_games() as f64 * (result.score() - expected);

        self.credit(engine1, elo_change, result.total_games());
        self.credit(engine2, -elo_change, result.total_games());

        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: result.clone(),
            timestamp: unix_timestamp(),
            elo_change,
        });
    }

    /// Shift one engine's rating and bump its game count.
    fn credit(&mut self, engine: &str, delta: f64, games: u32) {
        let rating = self.get_rating(engine) + delta;
        self.ratings.insert(engine.to_string(), rating);
        *self.games_played.entry(engine.to_string()).or_insert(0) += games;
    }

    /// All engines sorted strongest first, with their game counts.
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    pub fn print_leaderboard(&self) {
        println!("\n=== Engine Leaderboard ===");
        println!("{:<30} {:>8} {:>8}", "Engine", "Elo", "Games");
        println!("{}", "-".repeat(50));
        for (name, rating, games) in self.leaderboard() {
            println!("{:<30} {:>8.1} {:>8}", name, rating, games);
        }
        println!();
    }
}

/// Standard logistic expectation over a 400-point scale.
fn win_probability(rating1: f64, rating2: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((rating2 - rating1) / 400.0))
}

/// Seconds since the unix epoch, good enough for ordering history.
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_secs().to_string()
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
