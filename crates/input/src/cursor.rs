//! Keyboard cursor over the tile grid.

use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Highlighted tile, clamped to the current board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    pos: Position,
    rows: usize,
    cols: usize,
}

impl BoardCursor {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pos: Position::new(0, 0),
            rows,
            cols,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Adapt to a new board size, keeping the cursor in bounds.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.pos.row = self.pos.row.min(rows.saturating_sub(1));
        self.pos.col = self.pos.col.min(cols.saturating_sub(1));
    }

    /// Jump to a tile (e.g. the one under a mouse click). Out-of-range
    /// positions are ignored.
    pub fn set(&mut self, pos: Position) -> bool {
        if pos.row >= self.rows || pos.col >= self.cols {
            return false;
        }
        self.pos = pos;
        true
    }

    /// Move one step, wrapping around the board edges.
    pub fn step(&mut self, dir: Direction) {
        if self.rows == 0 || self.cols == 0 {
            return;
        }
        match dir {
            Direction::Up => self.pos.row = (self.pos.row + self.rows - 1) % self.rows,
            Direction::Down => self.pos.row = (self.pos.row + 1) % self.rows,
            Direction::Left => self.pos.col = (self.pos.col + self.cols - 1) % self.cols,
            Direction::Right => self.pos.col = (self.pos.col + 1) % self.cols,
        }
    }
}
