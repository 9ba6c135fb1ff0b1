//! Line scanning along the four board directions
//!
//! Both the win check and the evaluator read runs through this one
//! primitive, so "five in a row" means the same thing everywhere.

use super::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions).
/// Negative directions are covered by scanning both ways from the origin.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Maximum steps walked on each side of the origin
pub const SCAN_REACH: i32 = 4;

/// Contiguous run through an origin along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRun {
    /// Stones in the run, origin included (at most `2 * SCAN_REACH + 1`)
    pub length: u8,
    /// Ends stopped by the board edge or an opposing stone (0-2)
    pub blocked_ends: u8,
}

impl LineRun {
    #[inline]
    pub fn is_five(self) -> bool {
        self.length >= 5
    }

    #[inline]
    pub fn open_ends(self) -> u8 {
        2 - self.blocked_ends
    }
}

/// Scan the run of `stone` through `origin` along `(dr, dc)`.
///
/// The origin itself counts as `stone`, whatever the cell holds, so the
/// same call answers "does placing here make five" and "how long is the
/// run this stone belongs to".
pub fn scan_line(board: &Board, origin: Pos, (dr, dc): (i32, i32), stone: Stone) -> LineRun {
    let mut run = LineRun {
        length: 1,
        blocked_ends: 0,
    };

    for sign in [1, -1] {
        for step in 1..=SCAN_REACH {
            match board.offset(origin, dr * sign, dc * sign, step) {
                Some(p) if board.at(p) == stone => run.length += 1,
                Some(p) if board.at(p) == Stone::Empty => break,
                // Edge or opponent stone
                _ => {
                    run.blocked_ends += 1;
                    break;
                }
            }
        }
    }

    run
}

/// Runs through `origin` in all four directions, in [`DIRECTIONS`] order
pub fn scan_lines(board: &Board, origin: Pos, stone: Stone) -> [LineRun; 4] {
    DIRECTIONS.map(|dir| scan_line(board, origin, dir, stone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_stone_open() {
        let mut board = Board::default();
        let pos = Pos::new(7, 7);
        board.place(pos, Stone::First);

        for run in scan_lines(&board, pos, Stone::First) {
            assert_eq!(run.length, 1);
            assert_eq!(run.blocked_ends, 0);
        }
    }

    #[test]
    fn test_run_blocked_by_opponent_and_edge() {
        let mut board = Board::default();
        // Row 0: X X X O
        for c in 0..3 {
            board.place(Pos::new(0, c), Stone::Second);
        }
        board.place(Pos::new(0, 3), Stone::First);

        let run = scan_line(&board, Pos::new(0, 1), (0, 1), Stone::Second);
        assert_eq!(run.length, 3);
        assert_eq!(run.blocked_ends, 2);
        assert_eq!(run.open_ends(), 0);
    }

    #[test]
    fn test_origin_counts_as_player() {
        let mut board = Board::default();
        for c in [3, 4, 6, 7] {
            board.place(Pos::new(5, c), Stone::First);
        }
        // (5, 5) is still empty: scanning from it reports the would-be run
        let run = scan_line(&board, Pos::new(5, 5), (0, 1), Stone::First);
        assert_eq!(run.length, 5);
        assert!(run.is_five());
        assert!(board.is_empty(Pos::new(5, 5)));
    }

    #[test]
    fn test_reach_is_bounded() {
        let mut board = Board::default();
        for c in 0..15 {
            board.place(Pos::new(2, c), Stone::Second);
        }
        let run = scan_line(&board, Pos::new(2, 7), (0, 1), Stone::Second);
        assert_eq!(run.length as i32, 2 * SCAN_REACH + 1);
        assert_eq!(run.blocked_ends, 0);
    }

    #[test]
    fn test_anti_diagonal() {
        let mut board = Board::default();
        for i in 0..3u8 {
            board.place(Pos::new(4 + i, 8 - i), Stone::First);
        }
        let run = scan_line(&board, Pos::new(5, 7), (1, -1), Stone::First);
        assert_eq!(run.length, 3);
        assert_eq!(run.blocked_ends, 0);
    }
}
