// Chunk: docs/chunks/content_tab_bar - Content tab bar rendering and interaction
//!
//! Tab measurement.
//!
//! Following the humble-view approach, geometry is computed from label text
//! and a monospace glyph width with pure functions, so layout is testable
//! without a renderer.

use unicode_width::UnicodeWidthStr;

use crate::options::{TabCloseButton, TabSizing};

/// Minimum width of a tab in pixels
pub const TAB_MIN_WIDTH: f32 = 80.0;

/// Minimum width of a tab when tabs may shrink
pub const TAB_SHRINK_MIN_WIDTH: f32 = 60.0;

/// Maximum width of a tab in pixels
pub const TAB_MAX_WIDTH: f32 = 200.0;

/// Horizontal padding inside each tab
pub const TAB_PADDING_H: f32 = 12.0;

/// Size of the close button (square)
pub const CLOSE_BUTTON_SIZE: f32 = 16.0;

/// Gap between close button and tab label
pub const CLOSE_BUTTON_GAP: f32 = 4.0;

/// Size of the dirty indicator dot
pub const INDICATOR_SIZE: f32 = 6.0;

/// Gap between indicator and label
pub const INDICATOR_GAP: f32 = 4.0;

/// Size of the file icon
pub const ICON_SIZE: f32 = 16.0;

/// Gap between icon and label
pub const ICON_GAP: f32 = 4.0;

/// Default glyph width used when the host has not measured its font
pub const DEFAULT_GLYPH_WIDTH: f32 = 8.0;

/// A width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
}

impl Dimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Option-driven decorations that change a tab's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabDecorations {
    pub close_button: TabCloseButton,
    pub sizing: TabSizing,
    /// Room is reserved for a file icon
    pub has_icon_theme: bool,
}

/// Calculates the width of a tab from its label.
///
/// The label is the name followed, when present, by a space and the
/// description. Widths are measured in display columns so wide characters
/// count double.
pub fn calculate_tab_width(
    name: &str,
    description: &str,
    decorations: &TabDecorations,
    glyph_width: f32,
) -> f32 {
    let mut columns = name.width();
    if !description.is_empty() {
        columns += 1 + description.width();
    }
    let label_width = columns as f32 * glyph_width;

    // padding + indicator + gap + [icon + gap] + label + [gap + close] + padding
    let mut content_width = TAB_PADDING_H + INDICATOR_SIZE + INDICATOR_GAP + label_width + TAB_PADDING_H;
    if decorations.has_icon_theme {
        content_width += ICON_SIZE + ICON_GAP;
    }
    if decorations.close_button != TabCloseButton::Off {
        content_width += CLOSE_BUTTON_GAP + CLOSE_BUTTON_SIZE;
    }

    let min_width = match decorations.sizing {
        TabSizing::Fit => TAB_MIN_WIDTH,
        TabSizing::Shrink => TAB_SHRINK_MIN_WIDTH,
    };
    content_width.clamp(min_width, TAB_MAX_WIDTH)
}
