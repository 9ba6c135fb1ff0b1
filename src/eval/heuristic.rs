//! Heuristic evaluation function for Gomoku board positions
//!
//! Every cell is treated as a line origin in all four directions. A stone
//! of the player scores its contiguous run from the run table, and the
//! five-cell window starting at the origin scores from the window table.
//! A physical line therefore contributes once per origin inside it, so
//! scores grow with how often a shape appears rather than being one count
//! per line.

use crate::board::{scan_line, Board, Pos, Stone, DIRECTIONS};

use super::patterns::{run_score, window_score, WINDOW_LEN};

/// Evaluate the board from the engine's (`Stone::Second`) point of view.
///
/// Returns `score(Second) * self_weight - score(First)`; positive values
/// favour the engine.
#[must_use]
pub fn evaluate(board: &Board, self_weight: f64) -> i64 {
    let own = evaluate_player(board, Stone::ENGINE);
    let opp = evaluate_player(board, Stone::OPPONENT);
    (own as f64 * self_weight) as i64 - opp
}

/// Pattern score for one player, summed over every origin and direction.
pub fn evaluate_player(board: &Board, stone: Stone) -> i64 {
    let mut score = 0;

    for origin in board.positions() {
        let on_origin = board.at(origin) == stone;
        for &dir in &DIRECTIONS {
            if on_origin {
                score += run_score(scan_line(board, origin, dir, stone));
            }
            score += window_bonus(board, origin, dir, stone);
        }
    }

    score
}

/// Broken-shape bonus for the window of `WINDOW_LEN` cells starting at
/// `origin`. Windows running off the board or holding an opposing stone
/// score nothing.
fn window_bonus(board: &Board, origin: Pos, (dr, dc): (i32, i32), stone: Stone) -> i64 {
    let mut stones = 0u8;

    for step in 0..WINDOW_LEN {
        let Some(p) = board.offset(origin, dr, dc, step) else {
            return 0;
        };
        match board.at(p) {
            Stone::Empty => {}
            s if s == stone => stones += 1,
            _ => return 0,
        }
    }

    window_score(stones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_empty_board_is_zero() {
        let board = Board::default();
        assert_eq!(evaluate_player(&board, Stone::First), 0);
        assert_eq!(evaluate_player(&board, Stone::Second), 0);
        assert_eq!(evaluate(&board, 1.2), 0);
    }

    #[test]
    fn test_single_stone_in_open() {
        let mut board = Board::default();
        board.place(Pos::new(7, 7), Stone::First);
        // Four directions of open singles; windows with one stone score nothing.
        assert_eq!(evaluate_player(&board, Stone::First), 4 * PatternScore::OPEN_ONE);
        assert_eq!(evaluate_player(&board, Stone::Second), 0);
    }

    #[test]
    fn test_open_two_counts_per_origin() {
        let mut board = Board::default();
        board.place(Pos::new(7, 7), Stone::Second);
        board.place(Pos::new(7, 8), Stone::Second);

        // Horizontal: each stone scores the open two.
        let runs = 2 * PatternScore::OPEN_TWO;
        // Other directions: each stone is an open single.
        let singles = 2 * 3 * PatternScore::OPEN_ONE;
        // Horizontal windows containing both stones: starts at cols 4..=7.
        let windows = 4 * PatternScore::BROKEN_TWO;
        assert_eq!(
            evaluate_player(&board, Stone::Second),
            runs + singles + windows
        );
    }

    #[test]
    fn test_broken_three_window() {
        let mut board = Board::default();
        // Row 3: O _ O _ O starting at col 4
        for c in [4, 6, 8] {
            board.place(Pos::new(3, c), Stone::First);
        }
        // Every stone is an open single in all four directions.
        let singles = 3 * 4 * PatternScore::OPEN_ONE;
        // One horizontal window (start col 4) holds all three stones; starts
        // 2, 3, 5 and 6 hold two.
        let windows = PatternScore::BROKEN_THREE + 4 * PatternScore::BROKEN_TWO;
        assert_eq!(evaluate_player(&board, Stone::First), singles + windows);

        // An opposing stone at col 5 closes the singles beside it and kills
        // every window starting at cols 1..=5.
        board.place(Pos::new(3, 5), Stone::Second);
        let singles = 3 * 3 * PatternScore::OPEN_ONE + PatternScore::OPEN_ONE;
        assert_eq!(
            evaluate_player(&board, Stone::First),
            singles + PatternScore::BROKEN_TWO
        );
    }

    #[test]
    fn test_self_weight_bias() {
        let mut board = Board::default();
        // Same open two for each side, away from the edges
        board.place(Pos::new(7, 7), Stone::First);
        board.place(Pos::new(7, 8), Stone::First);
        board.place(Pos::new(2, 7), Stone::Second);
        board.place(Pos::new(2, 8), Stone::Second);

        // Equal raw scores: the engine side wins ties
        assert_eq!(
            evaluate_player(&board, Stone::First),
            evaluate_player(&board, Stone::Second)
        );
        assert!(evaluate(&board, 1.2) > 0);
        assert_eq!(evaluate(&board, 1.0), 0);
    }

    #[test]
    fn test_threat_outweighs_material() {
        let mut board = Board::default();
        // Opponent open three in the middle
        for c in 6..9 {
            board.place(Pos::new(7, c), Stone::First);
        }
        // Engine stones scattered
        board.place(Pos::new(1, 1), Stone::Second);
        board.place(Pos::new(1, 13), Stone::Second);
        board.place(Pos::new(13, 1), Stone::Second);
        assert!(evaluate(&board, 1.2) < 0);
    }

    #[test]
    fn test_five_dominates() {
        let mut board = Board::default();
        for c in 0..5 {
            board.place(Pos::new(14, c), Stone::Second);
        }
        assert!(evaluate(&board, 1.2) >= PatternScore::FIVE);
    }
}
