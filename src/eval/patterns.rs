//! Pattern scores for Gomoku evaluation
//!
//! Two tables feed the evaluator: a contiguous-run table keyed on run
//! length and blocked ends, and a window table for "broken" shapes inside
//! five consecutive cells. A shape may score in both.

use crate::board::LineRun;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Winning patterns
    /// Five or more in a row
    pub const FIVE: i64 = 100_000;

    // Contiguous runs
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i64 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i64 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i64 = 100;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i64 = 10;
    /// Open two: _OO_
    pub const OPEN_TWO: i64 = 5;
    /// Lone stone with both neighbours empty: _O_
    pub const OPEN_ONE: i64 = 1;

    // Window patterns (5 cells, no opposing stone)
    /// Three stones and two gaps, e.g. O_O_O
    pub const BROKEN_THREE: i64 = 50;
    /// Two stones and three gaps, e.g. O__O_
    pub const BROKEN_TWO: i64 = 20;
}

/// Cells in a window pattern
pub const WINDOW_LEN: i32 = 5;

/// Score of one contiguous run.
#[inline]
pub fn run_score(run: LineRun) -> i64 {
    match (run.length, run.blocked_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 0) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 0) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 0) => PatternScore::OPEN_TWO,
        (1, 0) => PatternScore::OPEN_ONE,
        _ => 0,
    }
}

/// Score of a five-cell window holding `stones` of one player and no
/// opposing stone.
#[inline]
pub fn window_score(stones: u8) -> i64 {
    match stones {
        3 => PatternScore::BROKEN_THREE,
        2 => PatternScore::BROKEN_TWO,
        _ => 0,
    }
}
