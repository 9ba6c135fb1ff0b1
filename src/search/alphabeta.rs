//! Minimax search with alpha-beta pruning
//!
//! The engine (`Stone::Second`) is the maximizing side and the opponent
//! (`Stone::First`) the minimizing side. Hypothetical stones are placed on
//! the caller's board through [`Placement`](crate::board::Placement) guards,
//! so the board is back in its original state whenever a frame returns,
//! pruning breaks included.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::default();
//! board.place(Pos::new(7, 7), Stone::First);
//!
//! let mut searcher = Searcher::new(1.2);
//! let result = searcher.search(&mut board, 1);
//! assert!(result.best_move.is_some());
//! ```

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::is_game_over;

use super::moves::generate_moves;

/// Infinity score for alpha-beta bounds
const INF: i64 = i64::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: i64,
    /// Depth searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Sibling lists cut short by alpha-beta
    pub cutoffs: u64,
}

/// Fixed-depth minimax searcher.
///
/// Holds no position state between calls; only the evaluation weight and
/// per-search counters.
#[derive(Debug, Clone)]
pub struct Searcher {
    self_weight: f64,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    /// Create a searcher evaluating leaves with the given self weight.
    #[must_use]
    pub fn new(self_weight: f64) -> Self {
        Self {
            self_weight,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Search `depth` plies for the engine's best move.
    ///
    /// Candidates are tried in row-major order and ties keep the first move
    /// found. The board is mutated during the search and restored before
    /// returning.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mov in generate_moves(board) {
            let score = {
                let mut placed = board.place_scoped(mov, Stone::ENGINE);
                self.minimax(&mut placed, depth.saturating_sub(1), false, alpha, INF)
            };

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        debug!(
            ?best_move,
            score = best_score,
            depth,
            nodes = self.nodes,
            cutoffs = self.cutoffs,
            "alpha-beta search finished"
        );

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        self.nodes += 1;

        if depth == 0 || is_game_over(board) {
            return evaluate(board, self.self_weight);
        }

        let moves = generate_moves(board);
        if moves.is_empty() {
            return evaluate(board, self.self_weight);
        }

        if maximizing {
            let mut best = -INF;
            for mov in moves {
                let score = {
                    let mut placed = board.place_scoped(mov, Stone::ENGINE);
                    self.minimax(&mut placed, depth - 1, false, alpha, beta)
                };
                best = best.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mov in moves {
                let score = {
                    let mut placed = board.place_scoped(mov, Stone::OPPONENT);
                    self.minimax(&mut placed, depth - 1, true, alpha, beta)
                };
                best = best.min(score);
                beta = beta.min(score);
                if alpha >= beta {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_search_empty_board() {
        let mut searcher = Searcher::new(1.2);
        let mut board = Board::default();

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut searcher = Searcher::new(1.2);
        let mut board = Board::default();

        for i in 0..4 {
            board.place(Pos::new(7, i), Stone::Second);
        }

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 4)));
        assert!(result.score >= PatternScore::FIVE);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut searcher = Searcher::new(1.2);
        let mut board = Board::default();

        for i in 0..4 {
            board.place(Pos::new(7, i), Stone::First);
        }
        board.place(Pos::new(9, 0), Stone::Second);

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 4)));
    }

    #[test]
    fn test_search_restores_board() {
        let mut searcher = Searcher::new(1.2);
        let mut board = Board::default();
        board.place(Pos::new(7, 7), Stone::First);
        board.place(Pos::new(7, 8), Stone::Second);
        board.place(Pos::new(8, 7), Stone::First);
        let before = board.clone();

        let result = searcher.search(&mut board, 2);
        assert!(result.best_move.is_some());
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_deterministic() {
        let mut board = Board::default();
        board.place(Pos::new(6, 6), Stone::First);
        board.place(Pos::new(7, 7), Stone::Second);
        board.place(Pos::new(6, 7), Stone::First);

        let first = Searcher::new(1.2).search(&mut board, 2);
        let second = Searcher::new(1.2).search(&mut board, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_node_count() {
        let mut searcher = Searcher::new(1.2);
        let mut board = Board::default();
        board.place(Pos::new(7, 7), Stone::First);

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.depth, 2);
        // At least one child per root candidate
        assert!(result.nodes >= 24);
    }

    #[test]
    fn test_search_full_board() {
        let mut searcher = Searcher::new(1.2);
        let mut board = Board::new(3, 3).unwrap();
        for pos in board.positions().collect::<Vec<_>>() {
            board.place(pos, Stone::First);
        }

        let result = searcher.search(&mut board, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_depth_one_prefers_own_shape() {
        let mut searcher = Searcher::new(1.2);
        let mut board = Board::default();
        board.place(Pos::new(7, 7), Stone::Second);
        board.place(Pos::new(7, 8), Stone::Second);

        // A single ply scores each candidate by static evaluation; extending
        // the open two to an open three is the best shape available.
        let result = searcher.search(&mut board, 1);
        let m = result.best_move.unwrap();
        assert_eq!(m.row, 7);
        assert!(m.col == 6 || m.col == 9);
    }
}
