//! Board structure with place/undo support

use std::ops::{Deref, DerefMut};

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::{EngineError, Result};

/// Game board: a fixed `rows x cols` grid of stones.
///
/// Dimensions never change after construction. The search mutates cells in
/// place and restores them through [`Placement`] guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells
    cells: Vec<Stone>,
    /// Number of non-empty cells
    stones: usize,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with `InvalidConfiguration` when a dimension is zero or larger
    /// than [`MAX_BOARD_SIZE`].
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        for (name, len) in [("rows", rows), ("cols", cols)] {
            if len == 0 || len > MAX_BOARD_SIZE {
                return Err(EngineError::InvalidConfiguration(format!(
                    "{name} must be in 1..={MAX_BOARD_SIZE}, got {len}"
                )));
            }
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Stone::Empty; rows * cols],
            stones: 0,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a signed coordinate lies on the board
    #[inline]
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    #[inline]
    fn contains(&self, pos: Pos) -> bool {
        usize::from(pos.row) < self.rows && usize::from(pos.col) < self.cols
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        usize::from(pos.row) * self.cols + usize::from(pos.col)
    }

    fn out_of_bounds(&self, pos: Pos) -> EngineError {
        EngineError::OutOfBounds {
            row: i32::from(pos.row),
            col: i32::from(pos.col),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Bounds-checked read
    pub fn get(&self, pos: Pos) -> Result<Stone> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(self.at(pos))
    }

    /// Bounds-checked unconditional overwrite (no occupancy check)
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<()> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        self.place(pos, stone);
        Ok(())
    }

    /// Stone at an on-board position.
    ///
    /// Panics if `pos` is off the board; use [`Board::get`] for untrusted input.
    #[inline]
    pub fn at(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.at(pos) == Stone::Empty
    }

    /// Overwrite an on-board cell. Placing `Stone::Empty` removes a stone.
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        let previous = std::mem::replace(&mut self.cells[idx], stone);
        match (previous.is_empty(), stone.is_empty()) {
            (true, false) => self.stones += 1,
            (false, true) => self.stones -= 1,
            _ => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.place(pos, Stone::Empty);
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The previous contents of the cell are restored when the guard drops,
    /// on every exit path.
    #[inline]
    pub fn place_scoped(&mut self, pos: Pos, stone: Stone) -> Placement<'_> {
        let previous = self.at(pos);
        self.place(pos, stone);
        Placement {
            board: self,
            pos,
            previous,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// True iff no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Center cell (`rows / 2`, `cols / 2`)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new((self.rows / 2) as u8, (self.cols / 2) as u8)
    }

    /// Position `steps` cells away from `pos` along `(dr, dc)`, if on the board
    #[inline]
    pub fn offset(&self, pos: Pos, dr: i32, dc: i32, steps: i32) -> Option<Pos> {
        let r = i32::from(pos.row) + dr * steps;
        let c = i32::from(pos.col) + dc * steps;
        if self.is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (rows, cols) = (self.rows as u8, self.cols as u8);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    /// Occupied positions with their stones, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.positions()
            .map(|pos| (pos, self.at(pos)))
            .filter(|(_, stone)| !stone.is_empty())
    }

    /// Empty positions, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|&pos| self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            cells: vec![Stone::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
            stones: 0,
        }
    }
}

/// A hypothetical stone on a borrowed board, undone on drop.
///
/// Derefs to the board so the search can recurse through it.
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Stone,
}

impl Placement<'_> {
    /// Position of the placed stone
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.place(self.pos, self.previous);
    }
}
