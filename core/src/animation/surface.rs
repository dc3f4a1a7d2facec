//! Display Surface seam
//!
//! The engine never touches a terminal directly. Anything that can show a
//! block of text and report its extents can host the animation.

/// A rectangular text viewport the engine pushes frames into
pub trait DisplaySurface {
    /// Replace the displayed text with a new frame
    fn set_text(&mut self, text: &str);

    /// Visible width in columns
    fn viewport_width(&self) -> usize;

    /// Width in columns of the widest line of the current text
    fn content_width(&self) -> usize;

    /// Horizontal scroll position in columns
    fn set_scroll_offset(&mut self, offset: usize);

    /// Follow the end of the content (latest line visible, no pan offset)
    fn scroll_to_end(&mut self);

    /// Furthest the content can be panned
    fn max_scroll(&self) -> usize {
        self.content_width().saturating_sub(self.viewport_width())
    }
}
