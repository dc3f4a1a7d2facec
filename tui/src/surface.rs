//! Terminal Display Surface
//!
//! Holds the text the engine last rendered plus the scroll state, and draws
//! both through [`TextBlock`] inside a small margin.

use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthStr;

use screensaver_core::DisplaySurface;

use crate::theme;
use crate::widgets::{TextBlock, TextBlockState};

/// Columns left blank on each side
pub const MARGIN_X: u16 = 2;
/// Rows left blank above and below
pub const MARGIN_Y: u16 = 1;

#[derive(Debug)]
pub struct TerminalSurface {
    text: String,
    content_width: usize,
    size: (u16, u16),
    block_state: TextBlockState,
}

impl TerminalSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            text: String::new(),
            content_width: 0,
            size: (width, height),
            block_state: TextBlockState {
                follow_end: true,
                ..Default::default()
            },
        }
    }

    /// Terminal resized; extents are re-read by the engine on its next tick
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }

    /// Region the text is drawn into
    pub fn text_area(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.size.1).inner(Margin {
            horizontal: MARGIN_X,
            vertical: MARGIN_Y,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current horizontal scroll offset
    pub fn scroll_x(&self) -> usize {
        self.block_state.scroll_x
    }

    /// Draw into `buf`, whose area is the full terminal
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, theme::screen_style());
        let inner = area.inner(Margin {
            horizontal: MARGIN_X,
            vertical: MARGIN_Y,
        });
        TextBlock::new(&self.text)
            .style(theme::screen_style())
            .render(inner, buf, &mut self.block_state);
    }
}

impl DisplaySurface for TerminalSurface {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.content_width = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
    }

    fn viewport_width(&self) -> usize {
        self.text_area().width as usize
    }

    fn content_width(&self) -> usize {
        self.content_width
    }

    fn set_scroll_offset(&mut self, offset: usize) {
        self.block_state.scroll_x = offset;
    }

    fn scroll_to_end(&mut self) {
        self.block_state.scroll_to_end();
    }
}
