//! Candidate move generation
//!
//! Only empty cells near existing stones are searched, which keeps the
//! branching factor at the size of the active frontier instead of the
//! whole board.

use crate::board::{Board, Pos};

/// Chebyshev radius around occupied cells considered for moves
pub const CANDIDATE_RADIUS: i32 = 2;

/// Empty cells within [`CANDIDATE_RADIUS`] of any stone, in row-major order.
///
/// With no stones (or no empty cell near them) this falls back to the
/// center if it is empty, else the first empty cell in row-major order.
/// A full board yields no moves.
pub fn generate_moves(board: &Board) -> Vec<Pos> {
    let mut near = vec![false; board.rows() * board.cols()];
    let idx = |pos: Pos| usize::from(pos.row) * board.cols() + usize::from(pos.col);

    for (pos, _) in board.occupied() {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                if let Some(p) = board.offset(pos, dr, dc, 1) {
                    near[idx(p)] = true;
                }
            }
        }
    }

    let moves: Vec<Pos> = board
        .empty_cells()
        .filter(|&pos| near[idx(pos)])
        .collect();
    if !moves.is_empty() {
        return moves;
    }

    let center = board.center();
    if board.is_empty(center) {
        return vec![center];
    }
    board.empty_cells().take(1).collect()
}
