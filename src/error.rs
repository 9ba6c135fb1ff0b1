//! Error types for the engine and its exchange-format boundary

use thiserror::Error;

/// Errors raised while building boards, configuring the engine or
/// converting exchange-format boards.
///
/// "No move available" is not an error: the engine reports it as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Coordinate outside the grid
    #[error("Position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },

    /// Rejected board dimensions or engine settings
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Exchange key that is not `"<row>,<col>"`
    #[error("Malformed board key: {0:?}")]
    MalformedKey(String),

    /// Exchange board without an entry for a cell (1-based)
    #[error("Board is missing cell {row},{col}")]
    MissingCell { row: usize, col: usize },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, EngineError>;
