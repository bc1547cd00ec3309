//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory game's rules, state management, and timing.
//! It has **no dependencies** on terminal, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed deals the same boards and hint picks
//! - **Testable**: Time is an explicit millisecond cursor, not a wall clock
//! - **Portable**: The terminal client is just one possible presentation layer
//!
//! # Module Structure
//!
//! - [`board`]: Tile grid, layout factoring, configuration validation
//! - [`game_state`]: Selection, matching, hints, countdown, round lifecycle
//! - [`rng`]: Seeded shuffling and hint picks
//! - [`scheduler`]: Cancellable delayed hides keyed to the round generation
//! - [`scoring`]: Point rules
//! - [`snapshot`]: Read-only view handed to the presentation layer
//!
//! # Game Rules
//!
//! - Reveal two tiles per attempt. Equal values stay face up (+10 points),
//!   different values flip back after one second (-5 points).
//! - A hint costs 5 points and shows two random hidden tiles for two seconds.
//! - Matching every pair wins; the countdown reaching zero loses.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameState, RoundStatus};
//! use tui_memory_types::Position;
//!
//! let mut game = GameState::new_game(16, 45, 12345).unwrap();
//! assert_eq!((game.rows(), game.cols()), (4, 4));
//!
//! game.select_tile(Position::new(0, 0));
//! assert_eq!(game.pending(), Some(Position::new(0, 0)));
//!
//! // One second of play time moves the countdown.
//! game.advance(1000);
//! assert_eq!(game.seconds_remaining(), 44);
//! assert_eq!(game.status(), RoundStatus::Playing);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{grid_dimensions, Board, GameConfig, GridDims, Tile};
pub use error::GameError;
pub use game_state::{GameState, SelectOutcome};
pub use rng::GameRng;
pub use scheduler::{Scheduler, TaskKind};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use tui_memory_types::RoundStatus;
