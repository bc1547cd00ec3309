//! Board module - manages the tile grid
//!
//! The board is a `rows x cols` grid of tiles stored as a flat, row-major
//! vector. Every value appears on exactly two tiles.
//! Coordinates: (row, col) where row 0 is the top row and col 0 the leftmost.
//!
//! Layout follows the factor pair of the tile count closest to a square: the
//! largest `rows <= sqrt(grid_size)` that divides the count evenly.

use tui_memory_types::{Difficulty, Position, TileFace, TileValue};

use crate::error::{GameError, Result};
use crate::rng::GameRng;

/// Validated round configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    grid_size: usize,
    time_limit: u32,
}

impl GameConfig {
    /// Validate a tile count and time limit (seconds).
    ///
    /// The tile count must be even and at least 2 so every tile has a partner.
    pub fn new(grid_size: usize, time_limit: u32) -> Result<Self> {
        let invalid = |reason| GameError::InvalidConfiguration {
            grid_size,
            time_limit,
            reason,
        };

        if grid_size < 2 {
            return Err(invalid("grid size must be at least 2"));
        }
        if grid_size % 2 != 0 {
            return Err(invalid("grid size must be even"));
        }
        if grid_size / 2 > TileValue::MAX as usize {
            return Err(invalid("grid size is too large"));
        }
        if time_limit == 0 {
            return Err(invalid("time limit must be positive"));
        }

        Ok(Self {
            grid_size,
            time_limit,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn total_pairs(&self) -> usize {
        self.grid_size / 2
    }

    pub fn dims(&self) -> GridDims {
        grid_dimensions(self.grid_size)
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            grid_size: difficulty.grid_size(),
            time_limit: difficulty.time_limit_secs(),
        }
    }
}

/// Grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Factor `grid_size` into the pair closest to a square.
///
/// Counts with no divisor between 2 and their square root fall back to a
/// single row. Zero yields an empty `0 x 0` grid.
///
/// # Examples
///
/// ```
/// use tui_memory_core::board::{grid_dimensions, GridDims};
///
/// assert_eq!(grid_dimensions(16), GridDims { rows: 4, cols: 4 });
/// assert_eq!(grid_dimensions(12), GridDims { rows: 3, cols: 4 });
/// assert_eq!(grid_dimensions(2), GridDims { rows: 1, cols: 2 });
/// ```
pub fn grid_dimensions(grid_size: usize) -> GridDims {
    if grid_size == 0 {
        return GridDims { rows: 0, cols: 0 };
    }

    let mut rows = isqrt(grid_size);
    while rows > 1 && grid_size % rows != 0 {
        rows -= 1;
    }

    GridDims {
        rows,
        cols: grid_size / rows,
    }
}

fn isqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    // Float rounding can land one off for large inputs.
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// A single board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: TileValue,
    pub face: TileFace,
    /// Stamp of the most recent reveal; zero if never revealed this round.
    pub reveal_id: u32,
}

impl Tile {
    pub const fn new(value: TileValue) -> Self {
        Self {
            value,
            face: TileFace::Hidden,
            reveal_id: 0,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.face == TileFace::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.face == TileFace::Matched
    }
}

/// The game board - flat, row-major tile storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: GridDims,
    tiles: Vec<Tile>,
    /// Monotonic counter handed out to tiles as they are revealed.
    next_reveal_id: u32,
}

impl Board {
    /// Deal a shuffled board for the given configuration.
    ///
    /// Pair ids `1..=pairs` are each placed twice, shuffled uniformly, and
    /// assigned left-to-right, top-to-bottom.
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut values: Vec<TileValue> = (1..=config.total_pairs() as TileValue)
            .flat_map(|value| [value, value])
            .collect();
        rng.shuffle(&mut values);
        Self::from_values(config.dims(), &values)
    }

    /// Build a board with a fixed value layout (row-major).
    ///
    /// Extra values are ignored; missing slots get value 0.
    pub fn from_values(dims: GridDims, values: &[TileValue]) -> Self {
        let tiles = (0..dims.len())
            .map(|i| Tile::new(values.get(i).copied().unwrap_or(0)))
            .collect();
        Self {
            dims,
            tiles,
            next_reveal_id: 0,
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Calculate flat index from a position; `None` if out of bounds
    #[inline(always)]
    pub fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.dims.rows || pos.col >= self.dims.cols {
            return None;
        }
        Some(pos.row * self.dims.cols + pos.col)
    }

    /// Inverse of [`Board::index`]
    pub fn position(&self, index: usize) -> Position {
        Position::new(index / self.dims.cols, index % self.dims.cols)
    }

    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Turn a hidden tile face up and stamp it with a fresh reveal id.
    ///
    /// Returns the new reveal id, or `None` if the tile is missing or not hidden.
    pub fn reveal(&mut self, pos: Position) -> Option<u32> {
        let i = self.index(pos)?;
        if !self.tiles[i].is_hidden() {
            return None;
        }
        self.next_reveal_id = self.next_reveal_id.wrapping_add(1);
        let tile = &mut self.tiles[i];
        tile.face = TileFace::Revealed;
        tile.reveal_id = self.next_reveal_id;
        Some(tile.reveal_id)
    }

    /// Turn a revealed tile face down again.
    ///
    /// Only succeeds while the tile is still showing the reveal identified by
    /// `reveal_id`; matched tiles and later reveals are left alone.
    pub fn hide_if_unchanged(&mut self, pos: Position, reveal_id: u32) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        let tile = &mut self.tiles[i];
        if tile.face != TileFace::Revealed || tile.reveal_id != reveal_id {
            return false;
        }
        tile.face = TileFace::Hidden;
        true
    }

    /// Permanently mark a tile as matched
    pub fn mark_matched(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.tiles[i].face = TileFace::Matched;
                true
            }
            None => false,
        }
    }

    /// Positions of every face-down tile, in board order
    pub fn hidden_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_hidden())
            .map(|(i, _)| self.position(i))
            .collect()
    }

    pub fn count_faces(&self, face: TileFace) -> usize {
        self.tiles.iter().filter(|tile| tile.face == face).count()
    }
}
