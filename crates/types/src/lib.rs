//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_REWARD` | 10 | Added when two revealed tiles share a value |
//! | `MISMATCH_PENALTY` | 5 | Subtracted when two revealed tiles differ |
//! | `HINT_COST` | 5 | Subtracted per hint; also the minimum score to ask for one |
//!
//! # Timing
//!
//! Timing values are in milliseconds of game time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CLOCK_TICK_MS` | 1000 | One countdown step |
//! | `FLIP_BACK_MS` | 1000 | Mismatched pair stays visible this long |
//! | `HINT_REVEAL_MS` | 2000 | Hinted tiles stay visible this long |
//! | `FRAME_MS` | 50 | Event poll interval of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Difficulty, GameAction, Position};
//!
//! let easy = Difficulty::Easy;
//! assert_eq!(easy.grid_size(), 16);
//! assert_eq!(easy.time_limit_secs(), 45);
//!
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//!
//! let action = GameAction::Select(Position::new(1, 2));
//! assert_eq!(action.as_str(), "select");
//! ```

use std::fmt;

/// Points awarded for a matched pair.
pub const MATCH_REWARD: i32 = 10;

/// Points deducted for a mismatched pair.
pub const MISMATCH_PENALTY: i32 = 5;

/// Points deducted per hint. A hint needs at least this many points.
pub const HINT_COST: i32 = 5;

/// Length of one countdown step.
pub const CLOCK_TICK_MS: u32 = 1000;

/// Delay before a mismatched pair is hidden again.
pub const FLIP_BACK_MS: u32 = 1000;

/// Delay before hinted tiles are hidden again.
pub const HINT_REVEAL_MS: u32 = 2000;

/// Event poll interval for the terminal loop.
pub const FRAME_MS: u32 = 50;

/// Paired identifier carried by a tile. Values run from 1 to `grid_size / 2`.
pub type TileValue = u16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(MATCH_REWARD, 10);
        assert_eq!(MISMATCH_PENALTY, 5);
        assert_eq!(HINT_COST, 5);
        assert_eq!(CLOCK_TICK_MS, 1000);
        assert_eq!(FLIP_BACK_MS, 1000);
        assert_eq!(HINT_REVEAL_MS, 2000);
    }

    #[test]
    fn difficulty_presets() {
        assert_eq!(Difficulty::Easy.grid_size(), 16);
        assert_eq!(Difficulty::Easy.time_limit_secs(), 45);
        assert_eq!(Difficulty::Medium.grid_size(), 36);
        assert_eq!(Difficulty::Medium.time_limit_secs(), 60);
        assert_eq!(Difficulty::Hard.grid_size(), 64);
        assert_eq!(Difficulty::Hard.time_limit_secs(), 90);
    }

    #[test]
    fn difficulty_parse_accepts_names_and_digits() {
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("2"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str(" Hard "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("insane"), None);
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(3, 1).to_string(), "(3, 1)");
    }
}

/// Board coordinate, zero-based from the top-left tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Difficulty presets offered at startup.
///
/// - **Easy**: 16 tiles (4x4), 45 seconds
/// - **Medium**: 36 tiles (6x6), 60 seconds
/// - **Hard**: 64 tiles (8x8), 90 seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn grid_size(&self) -> usize {
        match self {
            Difficulty::Easy => 16,
            Difficulty::Medium => 36,
            Difficulty::Hard => 64,
        }
    }

    pub fn time_limit_secs(&self) -> u32 {
        match self {
            Difficulty::Easy => 45,
            Difficulty::Medium => 60,
            Difficulty::Hard => 90,
        }
    }

    /// Parse a difficulty from its name or its menu number (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("1"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Some(Difficulty::Easy),
            "medium" | "m" | "2" => Some(Difficulty::Medium),
            "hard" | "h" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Round lifecycle.
///
/// `Won` and `Lost` are terminal until the game is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::Playing)
    }
}

/// Visible state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileFace {
    #[default]
    Hidden,
    /// Face up, either pending, mismatched, or hinted.
    Revealed,
    /// Permanently face up.
    Matched,
}

/// Game actions that can be applied to modify game state
///
/// These are the discrete events the presentation layer forwards. Clock ticks
/// are not actions; they are driven by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the tile at the given position
    Select(Position),
    /// Spend points to briefly reveal two hidden tiles
    Hint,
    /// Toggle the paused clock
    Pause,
    /// Start a fresh round with the current configuration
    Reset,
    /// Start a fresh round with a preset
    SetDifficulty(Difficulty),
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::Hint => "hint",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
            GameAction::SetDifficulty(_) => "setDifficulty",
        }
    }
}

/// Sound intent. The core never plays audio itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Correct,
    Incorrect,
    TimeUp,
}

impl SoundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundKind::Correct => "correct",
            SoundKind::Incorrect => "incorrect",
            SoundKind::TimeUp => "timeUp",
        }
    }
}

/// State-change notification emitted by the core.
///
/// The presentation layer drains these after each call into the game and
/// reacts (bell, status line, redraw).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board was dealt.
    NewRound {
        generation: u32,
        rows: usize,
        cols: usize,
    },
    TileRevealed {
        pos: Position,
        value: TileValue,
    },
    TileHidden {
        pos: Position,
    },
    TileMatched {
        pos: Position,
    },
    ScoreChanged(i32),
    ClockChanged(u32),
    RoundWon {
        final_score: i32,
    },
    RoundLost {
        final_score: i32,
    },
    PlaySound(SoundKind),
    ShowMessage(String),
}
