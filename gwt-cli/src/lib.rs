//! gwt: keyboard-driven terminal UI for git worktrees
//!
//! The binary lives in `main.rs`; the state machine is exposed here so it can
//! be driven without a terminal.

pub mod error;
pub mod logging;
pub mod tui;
