// Chunk: docs/chunks/content_tab_bar - Content tab bar rendering and interaction
//!
//! The rendered state of a single tab.
//!
//! A `TabWidget` is bound to a document by its position in the strip: widget
//! `i` shows document `i`. It carries everything a renderer needs (flags,
//! label text, geometry, resolved colours) and no behaviour of its own.

use bitflags::bitflags;

use crate::geometry::TabDecorations;
use crate::theme::Color;

bitflags! {
    /// Independent visual flags of a tab.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TabState: u8 {
        /// The tab's document is the group's active document
        const ACTIVE       = 0b0000_0001;
        /// The document has unsaved changes
        const DIRTY        = 0b0000_0010;
        /// The tab lives in the hard-pinned strip
        const HARD_PINNED  = 0b0000_0100;
        /// The document is pinned rather than a preview
        const PINNED       = 0b0000_1000;
        /// A drag is hovering over the tab
        const DRAGGED_OVER = 0b0001_0000;
        /// The tab is the source of the current drag
        const DRAGGING     = 0b0010_0000;
        /// The pointer is over the tab
        const HOVER        = 0b0100_0000;
    }
}

/// An outline drawn around a tab or the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color,
    pub width: f32,
    pub dashed: bool,
    /// Inset from the element edge (negative draws inside)
    pub offset: f32,
}

/// Colours resolved for one tab. `None` leaves the property unset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border_right: Option<Color>,
    /// Active-tab indicator along the bottom edge
    pub border_bottom: Option<Color>,
    /// Active-tab indicator along the top edge
    pub border_top: Option<Color>,
    /// Modified-tab indicator along the top edge
    pub dirty_border_top: Option<Color>,
    pub outline: Option<Outline>,
}

/// One tab in a strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabWidget {
    pub state: TabState,
    pub name: String,
    pub description: String,
    /// Tooltip
    pub title: String,
    pub aria_label: String,
    /// Preview (unpinned) tabs render their label in italics
    pub italic: bool,
    pub width: f32,
    /// Position of the tab's left edge within the strip content
    pub offset_left: f32,
    /// Left margin that keeps hard-pinned tabs stacked while scrolling
    pub sticky_offset: f32,
    pub decorations: TabDecorations,
    pub style: TabStyle,
}

impl TabWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.contains(TabState::ACTIVE)
    }

    pub fn is_dirty(&self) -> bool {
        self.state.contains(TabState::DIRTY)
    }

    /// Right edge of the tab within the strip content.
    pub fn right(&self) -> f32 {
        self.offset_left + self.width
    }

    /// Returns true if content x-coordinate `x` falls on this tab.
    pub fn contains(&self, x: f32) -> bool {
        x >= self.offset_left && x < self.right()
    }

    /// The text shown on the tab: name, then description if any.
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.description)
        }
    }
}
