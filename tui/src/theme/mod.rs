//! Theme and Colors
//!
//! Green phosphor on black, like an old monochrome monitor.

use ratatui::style::{Color, Style};

/// Text and cursor
pub const PHOSPHOR_GREEN: Color = Color::Rgb(0, 255, 0);

/// Screen background
pub const BACKGROUND: Color = Color::Rgb(0, 0, 0);

/// Style for the whole screen
pub fn screen_style() -> Style {
    Style::default().fg(PHOSPHOR_GREEN).bg(BACKGROUND)
}
