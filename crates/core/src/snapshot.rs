use tui_memory_types::{Difficulty, Position, RoundStatus, TileFace, TileValue};

/// What the presentation layer may know about a tile.
///
/// The value is only present while the tile is face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileSnapshot {
    pub face: TileFace,
    pub value: Option<TileValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major, `rows * cols` entries.
    pub tiles: Vec<TileSnapshot>,
    pub pending: Option<Position>,
    pub generation: u32,
    pub seed: u64,
    pub difficulty: Option<Difficulty>,
    pub score: i32,
    pub seconds_remaining: u32,
    pub time_limit: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub status: RoundStatus,
    pub paused: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.tiles.clear();
        self.pending = None;
        self.generation = 0;
        self.seed = 0;
        self.difficulty = None;
        self.score = 0;
        self.seconds_remaining = 0;
        self.time_limit = 0;
        self.matched_pairs = 0;
        self.total_pairs = 0;
        self.status = RoundStatus::Playing;
        self.paused = false;
    }

    pub fn tile(&self, pos: Position) -> Option<&TileSnapshot> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.tiles.get(pos.row * self.cols + pos.col)
    }

    /// True while the clock is running.
    pub fn playable(&self) -> bool {
        !self.status.is_over() && !self.paused
    }

    /// Hash of everything visible; used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}
