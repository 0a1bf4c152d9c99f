// Subsystem: docs/subsystems/viewport_scroll - Viewport mapping & scroll arithmetic
// Chunk: docs/chunks/content_tab_bar - Horizontal tab scrolling
//!
//! Horizontal scroll state for a tab strip.
//!
//! `TabsScrollbar` tracks how far the strip is scrolled and clamps the offset
//! to the content. Like the row scroller it is plain arithmetic: the
//! renderer reads `scroll_left()` and draws the scrollbar thumb from the
//! three widths.

/// Scroll state of one tab strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabsScrollbar {
    /// Distance from the left of the content to the left of the viewport
    scroll_left: f32,
    /// Visible width of the strip
    viewport_width: f32,
    /// Total width of all tabs
    content_width: f32,
}

impl TabsScrollbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// The largest valid scroll offset.
    pub fn max_scroll_left(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Returns true if the content overflows the viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_width > self.viewport_width
    }

    /// Updates both widths and re-clamps the offset.
    pub fn set_scroll_dimensions(&mut self, viewport_width: f32, content_width: f32) {
        self.viewport_width = viewport_width.max(0.0);
        self.content_width = content_width.max(0.0);
        self.set_scroll_left(self.scroll_left);
    }

    /// Sets the scroll offset, clamped to `[0, max_scroll_left]`.
    pub fn set_scroll_left(&mut self, px: f32) {
        self.scroll_left = px.clamp(0.0, self.max_scroll_left());
    }

    /// Scrolls by `delta` pixels (positive = right).
    pub fn scroll_by(&mut self, delta: f32) {
        self.set_scroll_left(self.scroll_left + delta);
    }

    /// Scrolls so the span `[left, left + width)` is visible.
    ///
    /// A span that overflows on the right and fits is scrolled in by exactly
    /// the overflow. A span left of the viewport, or one wider than the
    /// viewport, gets its left edge aligned with the viewport.
    ///
    /// Returns `true` if the offset changed.
    pub fn reveal(&mut self, left: f32, width: f32) -> bool {
        let old = self.scroll_left;
        let visible = self.viewport_width;
        let fits = width <= visible;

        if fits && self.scroll_left + visible < left + width {
            let overflow = (left + width) - (self.scroll_left + visible);
            self.set_scroll_left(self.scroll_left + overflow);
        } else if self.scroll_left > left || !fits {
            self.set_scroll_left(left);
        }

        self.scroll_left != old
    }
}
