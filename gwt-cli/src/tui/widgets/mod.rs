//! Reusable widgets

pub mod text_input;
pub mod virtual_list;

pub use text_input::{handle_text_input, TextInput, TextInputResult};
pub use virtual_list::{SelectList, VirtualList};
