//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the client
//! pieces shared by the binary and the integration tests.

pub mod app;
pub mod config;
pub mod logging;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
