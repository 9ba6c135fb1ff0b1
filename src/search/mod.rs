//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation near existing stones
//! - Fixed-depth minimax with alpha-beta pruning

pub mod alphabeta;
pub mod moves;

pub use alphabeta::{SearchResult, Searcher};
pub use moves::{generate_moves, CANDIDATE_RADIUS};
