//! TextBlock Widget
//!
//! A borderless, non-wrapping text region that scrolls in both directions.
//! Long lines are clipped, not wrapped, so they can be panned horizontally.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthChar;

/// Scroll state for a text block
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlockState {
    /// First visible column
    pub scroll_x: usize,
    /// First visible line
    pub scroll_y: usize,
    /// Keep the last line in view (overrides `scroll_y`)
    pub follow_end: bool,
    /// Total content lines after the last render
    pub total_lines: usize,
}

impl TextBlockState {
    /// Scroll vertically by delta (positive = down); stops following the end
    pub fn scroll(&mut self, delta: i32) {
        let new_offset = self.scroll_y as i64 + i64::from(delta);
        self.scroll_y = new_offset.max(0) as usize;
        self.follow_end = false;
    }

    /// Follow the bottom of the content with no horizontal offset
    pub fn scroll_to_end(&mut self) {
        self.follow_end = true;
        self.scroll_x = 0;
    }
}

/// A borderless, clipped text block
pub struct TextBlock<'a> {
    content: &'a str,
    style: Style,
}

impl<'a> TextBlock<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> StatefulWidget for TextBlock<'a> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        buf.set_style(area, self.style);

        state.total_lines = self.content.lines().count();

        let height = area.height as usize;
        let max_scroll = state.total_lines.saturating_sub(height);
        state.scroll_y = if state.follow_end {
            max_scroll
        } else {
            state.scroll_y.min(max_scroll)
        };

        for (i, line) in self
            .content
            .lines()
            .skip(state.scroll_y)
            .take(height)
            .enumerate()
        {
            let visible = slice_columns(line, state.scroll_x, area.width as usize);
            buf.set_string(area.x, area.y + i as u16, &visible, self.style);
        }
    }
}

/// Columns `[start, start + width)` of `line`
///
/// A wide glyph cut by either edge is replaced by spaces so the remaining
/// columns keep their positions.
pub fn slice_columns(line: &str, start: usize, width: usize) -> String {
    let end = start + width;
    let mut out = String::new();
    let mut col = 0;

    for ch in line.chars() {
        if col >= end {
            break;
        }
        let w = ch.width().unwrap_or(0);
        let ch_end = col + w;

        if col >= start && ch_end <= end {
            out.push(ch);
        } else if ch_end > start {
            // Partially visible wide glyph
            let visible = ch_end.min(end) - col.max(start);
            out.extend(std::iter::repeat(' ').take(visible));
        }
        col = ch_end;
    }

    out
}
