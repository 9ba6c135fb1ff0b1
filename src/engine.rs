//! Main AI Engine integrating all search components
//!
//! The engine plays `Stone::Second` against `Stone::First` and picks a
//! move with a fixed priority:
//!
//! 1. **Opening**: with at most two stones on the board, take the center
//!    or the first free cell around it
//! 2. **Immediate win**: any empty cell that completes five for the engine
//! 3. **Block**: any empty cell that would complete five for the opponent
//! 4. **Alpha-Beta**: fixed-depth minimax over the candidate moves
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut engine = AIEngine::new(EngineConfig::default().with_depth(2)).unwrap();
//! let mut board = Board::default();
//! board.place(Pos::new(7, 7), Stone::First);
//!
//! let result = engine.get_move_with_stats(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::eval::PatternScore;
use crate::rules::is_winning_move;
use crate::search::{SearchResult, Searcher};

/// Stones on the board up to which the opening rule applies
const OPENING_MAX_STONES: usize = 2;

/// Neighbours of the center tried by the opening rule, in priority order:
/// right, down, left, up, down-right, down-left, up-right, up-left.
const OPENING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Phase of the engine that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Opening rule on a nearly empty board
    Opening,
    /// Found immediate winning move
    ImmediateWin,
    /// Occupied the opponent's winning cell
    Block,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// No empty cell left
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation of the move from the engine's point of view
    pub score: i64,
    /// Phase that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Option<Pos>) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: if pos.is_some() {
                SearchType::Opening
            } else {
                SearchType::NoMove
            },
            time_ms: 0,
            nodes: 0,
        }
    }

    #[inline]
    fn immediate_win(pos: Pos) -> Self {
        Self {
            best_move: Some(pos),
            score: PatternScore::FIVE,
            search_type: SearchType::ImmediateWin,
            time_ms: 0,
            nodes: 0,
        }
    }

    #[inline]
    fn block(pos: Pos) -> Self {
        Self {
            best_move: Some(pos),
            score: -PatternScore::FIVE,
            search_type: SearchType::Block,
            time_ms: 0,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: if result.best_move.is_some() {
                SearchType::AlphaBeta
            } else {
                SearchType::NoMove
            },
            time_ms: 0,
            nodes: result.nodes,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Stateless between queries apart from its configuration; every query
/// takes the board by exclusive reference and leaves it as it found it.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, EngineConfig};
///
/// let mut engine = AIEngine::new(EngineConfig::default()).unwrap();
/// let mut board = Board::default();
/// assert_eq!(engine.get_move(&mut board), Some(board.center()));
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine, rejecting invalid configurations.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            searcher: Searcher::new(config.self_weight),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current search depth in plies
    #[must_use]
    pub fn search_depth(&self) -> u8 {
        self.config.search_depth
    }

    /// Set the search depth.
    ///
    /// A depth of 0 is rejected with `InvalidConfiguration` and leaves the
    /// current depth unchanged.
    pub fn set_search_depth(&mut self, depth: u8) -> Result<()> {
        let config = self.config.clone().with_depth(depth);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Get the best move for the engine, or `None` if no move is possible.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    pub fn get_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// The board is used as scratch space during the search and is
    /// restored before this returns.
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let mut result = self.select_move(board);
        result.time_ms = start.elapsed().as_millis() as u64;

        info!(
            best_move = ?result.best_move,
            search_type = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "engine move selected"
        );
        result
    }

    fn select_move(&mut self, board: &mut Board) -> MoveResult {
        // 0. Opening rule for nearly empty boards
        if board.stone_count() <= OPENING_MAX_STONES {
            let pos = Self::opening_move(board);
            debug!(?pos, stones = board.stone_count(), "opening rule");
            return MoveResult::opening(pos);
        }

        // 1. Immediate win
        if let Some(pos) = Self::find_winning_cell(board, Stone::ENGINE) {
            debug!(?pos, "immediate win");
            return MoveResult::immediate_win(pos);
        }

        // 2. Opponent wins next move unless we take the cell
        if let Some(pos) = Self::find_winning_cell(board, Stone::OPPONENT) {
            debug!(?pos, "blocking opponent five");
            return MoveResult::block(pos);
        }

        // 3. Regular alpha-beta search
        let result = self.searcher.search(board, self.config.search_depth);
        MoveResult::from_alphabeta(result)
    }

    /// Center if empty, else its first empty neighbour in
    /// [`OPENING_OFFSETS`] order.
    fn opening_move(board: &Board) -> Option<Pos> {
        let center = board.center();
        if board.is_empty(center) {
            return Some(center);
        }

        OPENING_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| board.offset(center, dr, dc, 1))
            .find(|&pos| board.is_empty(pos))
    }

    /// First empty cell, row-major, where `stone` would complete five.
    fn find_winning_cell(board: &mut Board, stone: Stone) -> Option<Pos> {
        let cells: Vec<Pos> = board.empty_cells().collect();
        cells.into_iter().find(|&pos| {
            let placed = board.place_scoped(pos, stone);
            is_winning_move(&placed, pos, stone)
        })
    }
}
