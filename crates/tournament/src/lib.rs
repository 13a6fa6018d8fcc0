//! Tournament Runner
//!
//! This crate provides infrastructure for:
//! - Running matches between different strategies
//! - Tracking Elo ratings across engines
//! - Generating match reports
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the alpha-beta engine and the random baseline
//! cargo run -p tournament -- match alphabeta random --games 20 --depth 3
//!
//! # Run a gauntlet (one engine vs all the others)
//! cargo run -p tournament -- gauntlet alphabeta --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
