//! Win condition checking
//!
//! Win condition: five or more stones of one colour in a row, in any of
//! the four directions. There is no overline exclusion.

use crate::board::{scan_lines, Board, Pos, Stone};

/// Five-in-a-row check through a single position.
///
/// Assumes `stone` has just been (hypothetically) placed at `pos`; only
/// the four lines through `pos` are examined.
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos, stone: Stone) -> bool {
    if stone == Stone::Empty {
        return false;
    }
    scan_lines(board, pos, stone).iter().any(|run| run.is_five())
}

/// Check if there's 5+ in a row anywhere for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    board
        .occupied()
        .any(|(pos, s)| s == stone && is_winning_move(board, pos, s))
}

/// Owner of an existing five-in-a-row, `First` checked before `Second`.
pub fn winner(board: &Board) -> Option<Stone> {
    [Stone::First, Stone::Second]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}

/// True iff some stone on the board completes five for its owner, or the
/// board is full.
///
/// Walks every occupied cell, so the search only calls it at nodes it is
/// about to expand or score.
pub fn is_game_over(board: &Board) -> bool {
    board.is_full()
        || board
            .occupied()
            .any(|(pos, stone)| is_winning_move(board, pos, stone))
}
