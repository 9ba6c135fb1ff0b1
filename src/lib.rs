//! Gomoku move engine
//!
//! An embeddable decision engine for freestyle five-in-a-row on an
//! `N x M` board (15x15 by default). Callers hand over a board and get
//! back one coordinate for the engine's next stone.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and the shared line scanner
//! - [`rules`]: Win and game-over detection
//! - [`eval`]: Pattern tables and the heuristic evaluation
//! - [`search`]: Candidate generation and minimax with alpha-beta pruning
//! - [`engine`]: Main AI engine integrating all components
//! - [`api`]: Key-value board exchange format for callers
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::default();
//! let mut engine = AIEngine::new(EngineConfig::default()).unwrap();
//!
//! board.place(Pos::new(7, 7), Stone::First);
//!
//! // The engine plays Stone::Second
//! if let Some(pos) = engine.get_move(&mut board) {
//!     board.place(pos, Stone::Second);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Opening rule while at most two stones are on the board
//! 2. Immediate winning move
//! 3. Blocking the opponent's immediate win
//! 4. Fixed-depth minimax with alpha-beta pruning
//!
//! The search is single-threaded and mutates the board it is given,
//! restoring it before returning. Concurrent searches need separate boards.

pub mod api;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{Difficulty, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{EngineError, Result};
