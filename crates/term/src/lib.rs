//! Terminal presentation for the memory game.
//!
//! This is a small, game-oriented rendering layer. It avoids widget/layout
//! frameworks and renders into a framebuffer that is then diffed and flushed
//! to the terminal.
//!
//! - `game_view` is pure: snapshot in, framebuffer out
//! - `renderer` owns the terminal (raw mode, alternate screen, mouse, bell)
//! - `render_throttle` decides when a redraw is worth it

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, HudState, Viewport, HELP_LINES};
pub use render_throttle::{RenderThrottle, IDLE_REFRESH_MS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
