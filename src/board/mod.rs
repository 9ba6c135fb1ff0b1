//! Board representation for Gomoku

pub mod board;
pub mod scan;


// Re-exports
pub use board::{Board, Placement};
pub use scan::{scan_line, scan_lines, LineRun, DIRECTIONS, SCAN_REACH};

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Largest supported side length (positions are stored as `u8`)
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Cell states. `First` is the opponent (usually the human), `Second` the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    First,
    Second,
}

impl Stone {
    /// Colour the engine plays
    pub const ENGINE: Stone = Stone::Second;
    /// Colour the engine plays against
    pub const OPPONENT: Stone = Stone::First;

    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::First => Stone::Second,
            Stone::Second => Stone::First,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

/// Position on the board (0-based)
///
/// Ordering is row-major, which is also the canonical scan order of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance between two positions
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}
