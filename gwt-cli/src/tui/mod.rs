//! TUI module

mod app;
pub mod editor;
mod input;
mod runtime;
pub mod state;
mod theme;
mod ui;
pub mod widgets;

pub use app::{App, AppSettings};
pub use runtime::run;
