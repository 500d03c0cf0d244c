//! Square board of arbitrary side length

use std::fmt;

use super::{Pos, Stone};

/// Game board: `size` rows of `size` cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    /// Occupied cell count, kept so `is_full` does not rescan
    stones: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get stone at position
    ///
    /// Positions off the board read as `Empty`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            Stone::Empty
        }
    }

    /// Accessor by signed coordinate, `None` when off the board
    pub fn cell(&self, row: i64, col: i64) -> Option<Stone> {
        if Pos::is_valid(row, col, self.size) {
            Some(self.get(Pos::new(row as usize, col as usize)))
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Put a stone on an empty cell.
    ///
    /// Callers check bounds and emptiness first; a stone is never overwritten.
    #[inline]
    pub(crate) fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.contains(pos) && self.is_empty(pos));
        debug_assert!(stone != Stone::Empty);
        let idx = self.index(pos);
        self.cells[idx] = stone;
        self.stones += 1;
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Read-only rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Stone]> + '_ {
        // chunks() panics on 0; an empty board simply has no rows
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, stone) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                let ch = match stone {
                    Stone::Empty => '.',
                    Stone::Black => 'X',
                    Stone::White => 'O',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
