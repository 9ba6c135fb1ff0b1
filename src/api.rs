//! Key-value board exchange format
//!
//! Callers describe a board as a map from 1-based `"row,col"` keys to one
//! of three tokens: `"None"` (empty), `"users"` (the opponent) and `"api"`
//! (the engine). This module converts that map to and from [`Board`] and
//! answers move queries in the same format. Nothing in here is used by the
//! search itself.
//!
//! # Example
//!
//! ```
//! use gomoku::api::{Cell, GomokuApi, QueryOptions};
//! use gomoku::EngineConfig;
//!
//! let api = GomokuApi::new(15, 15, EngineConfig::default()).unwrap();
//! let mut board = api.init_board();
//! board.insert("8,8".to_string(), Cell::Users);
//!
//! let reply = api.run(&mut board, &QueryOptions::default()).unwrap();
//! assert_eq!(reply.len(), 1);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::engine::AIEngine;
use crate::error::{EngineError, Result};

/// One cell of an exchange-format board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = "None")]
    Empty,
    #[serde(rename = "users")]
    Users,
    #[serde(rename = "api")]
    Api,
}

impl From<Cell> for Stone {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Stone::Empty,
            Cell::Users => Stone::OPPONENT,
            Cell::Api => Stone::ENGINE,
        }
    }
}

impl From<Stone> for Cell {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Empty => Cell::Empty,
            Stone::First => Cell::Users,
            Stone::Second => Cell::Api,
        }
    }
}

/// Exchange-format board: `"row,col"` (1-based) to cell token
pub type ExchangeBoard = BTreeMap<String, Cell>;

/// Per-query options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Also write the chosen move into the caller's board
    pub auto_add: bool,
    /// Overrides the configured search depth for this query
    pub search_depth: Option<u8>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            auto_add: true,
            search_depth: None,
        }
    }
}

/// 1-based exchange key for a 0-based position
pub fn cell_key(pos: Pos) -> String {
    format!("{},{}", u32::from(pos.row) + 1, u32::from(pos.col) + 1)
}

/// Parse a 1-based `"row,col"` key into a 0-based position on a
/// `rows x cols` board.
///
/// Only the canonical form produced by [`cell_key`] is accepted, so every
/// cell has exactly one key: padding, signs and leading zeros are
/// `MalformedKey`.
pub fn parse_key(key: &str, rows: usize, cols: usize) -> Result<Pos> {
    let malformed = || EngineError::MalformedKey(key.to_string());

    let (row, col) = key.split_once(',').ok_or_else(malformed)?;
    let row: i64 = row.parse().map_err(|_| malformed())?;
    let col: i64 = col.parse().map_err(|_| malformed())?;

    if row < 1 || row as u64 > rows as u64 || col < 1 || col as u64 > cols as u64 {
        return Err(EngineError::OutOfBounds {
            row: row.saturating_sub(1).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            col: col.saturating_sub(1).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            rows,
            cols,
        });
    }
    let pos = Pos::new((row - 1) as u8, (col - 1) as u8);
    if cell_key(pos) != key {
        return Err(malformed());
    }
    Ok(pos)
}

/// Fresh exchange board with every cell set to `"None"`.
pub fn init_board(rows: usize, cols: usize) -> Result<ExchangeBoard> {
    Ok(to_exchange(&Board::new(rows, cols)?))
}

/// Convert an exchange board into a [`Board`].
///
/// Every one of the `rows x cols` keys must be present; malformed or
/// out-of-range keys are rejected.
pub fn parse_board(cells: &ExchangeBoard, rows: usize, cols: usize) -> Result<Board> {
    let mut board = Board::new(rows, cols)?;
    let mut seen = vec![false; rows * cols];

    for (key, &cell) in cells {
        let pos = parse_key(key, rows, cols)?;
        seen[usize::from(pos.row) * cols + usize::from(pos.col)] = true;
        board.set(pos, cell.into())?;
    }

    if let Some(missing) = seen.iter().position(|&present| !present) {
        return Err(EngineError::MissingCell {
            row: missing / cols + 1,
            col: missing % cols + 1,
        });
    }
    Ok(board)
}

/// Convert a [`Board`] into the exchange format.
pub fn to_exchange(board: &Board) -> ExchangeBoard {
    board
        .positions()
        .map(|pos| (cell_key(pos), board.at(pos).into()))
        .collect()
}

/// Board dimensions plus engine settings for exchange-format queries.
///
/// Each query builds a fresh engine from this configuration; no state is
/// kept between calls.
#[derive(Debug, Clone)]
pub struct GomokuApi {
    rows: usize,
    cols: usize,
    config: EngineConfig,
}

impl GomokuApi {
    /// Validate dimensions and configuration up front.
    pub fn new(rows: usize, cols: usize, config: EngineConfig) -> Result<Self> {
        Board::new(rows, cols)?;
        config.validate()?;
        Ok(Self { rows, cols, config })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fresh all-empty exchange board of this API's size.
    #[must_use]
    pub fn init_board(&self) -> ExchangeBoard {
        init_board(self.rows, self.cols).unwrap_or_default()
    }

    /// Choose the engine's next move.
    ///
    /// Returns an empty map when no move is possible, otherwise
    /// `{"row,col": "api"}`. With `auto_add` the move is also written into
    /// `cells`.
    pub fn run(&self, cells: &mut ExchangeBoard, options: &QueryOptions) -> Result<ExchangeBoard> {
        let mut board = parse_board(cells, self.rows, self.cols).inspect_err(|err| {
            warn!(%err, "rejected exchange board");
        })?;

        let mut config = self.config.clone();
        if let Some(depth) = options.search_depth {
            config.search_depth = depth;
        }
        let mut engine = AIEngine::new(config)?;

        let mut reply = ExchangeBoard::new();
        if let Some(pos) = engine.get_move(&mut board) {
            let key = cell_key(pos);
            if options.auto_add {
                cells.insert(key.clone(), Cell::Api);
            }
            reply.insert(key, Cell::Api);
        }
        Ok(reply)
    }
}

/// One-shot query with explicit dimensions and the default engine settings
/// (optionally overridden through `options.search_depth`).
pub fn run_api(
    cells: &mut ExchangeBoard,
    rows: usize,
    cols: usize,
    options: &QueryOptions,
) -> Result<ExchangeBoard> {
    GomokuApi::new(rows, cols, EngineConfig::default())?.run(cells, options)
}
