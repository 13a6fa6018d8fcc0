//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::elo::MatchResult;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating strategies
    pub participants: Vec<String>,
    /// All match results
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u8,
    pub max_moves_per_game: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: 4,
            max_moves_per_game: 200,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result (from engine1's perspective)
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Game points per participant: 1 per win, 0.5 per draw.
    pub fn standings(&self) -> Vec<(String, f64)> {
        let mut points: HashMap<&str, f64> = HashMap::new();
        for name in &self.participants {
            points.entry(name).or_insert(0.0);
        }
        for entry in &self.matches {
            let first = entry.result.wins as f64 + 0.5 * entry.result.draws as f64;
            let second = entry.result.losses as f64 + 0.5 * entry.result.draws as f64;
            *points.entry(&entry.engine1).or_insert(0.0) += first;
            *points.entry(&entry.engine2).or_insert(0.0) += second;
        }
        let mut standings: Vec<(String, f64)> = points
            .into_iter()
            .map(|(name, score)| (name.to_string(), score))
            .collect();
        standings.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        standings
    }

    /// Generate a text report: the match grid plus final standings.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Config: {} games/match, depth {}\n\n",
            self.config.games_per_match, self.config.search_depth
        ));

        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
            "Engine 1", "Engine 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');
        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report.push_str("\nStandings:\n");
        for (rank, (name, score)) in self.standings().iter().enumerate() {
            report.push_str(&format!("{}. {:<20} {:>6.1}\n", rank + 1, name, score));
        }

        report
    }

    /// Print the report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
