//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`UiCommand`]s and tracks the board
//! cursor that keyboard players use to pick tiles.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::{BoardCursor, Direction};
pub use map::{handle_key_event, left_click, should_quit, UiCommand};
