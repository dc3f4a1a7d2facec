//! Widgets
//!
//! Small ratatui building blocks used by the screensaver surface.

mod text_block;

pub use text_block::{slice_columns, TextBlock, TextBlockState};
