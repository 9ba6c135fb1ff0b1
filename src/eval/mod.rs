//! Evaluation module for Gomoku positions
//!
//! The evaluation considers:
//! - Contiguous runs (fives, fours, threes, twos, open singles)
//! - Broken shapes inside five-cell windows
//! - An offensive bias towards the engine's own patterns

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_player};
pub use patterns::{run_score, window_score, PatternScore};
