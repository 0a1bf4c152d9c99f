// Chunk: docs/chunks/content_tab_bar - Tab styling
//!
//! Redraw of tab labels, geometry and colours.

use super::{TabStrip, TabsContext};
use crate::geometry::{calculate_tab_width, TabDecorations};
use crate::tab_widget::{Outline, TabState};
use crate::theme::{ColorResolver, ColorToken};

/// Width of the dashed drop outline in high-contrast themes
const DROP_OUTLINE_WIDTH: f32 = 2.0;
const TAB_DROP_OUTLINE_OFFSET: f32 = -5.0;
const CONTAINER_DROP_OUTLINE_OFFSET: f32 = -3.0;

impl TabStrip {
    /// Redraws every tab: labels, widths, offsets, and colours.
    pub fn redraw(&mut self, ctx: &TabsContext<'_>) {
        let options = ctx.options();
        let decorations = TabDecorations {
            close_button: options.tab_close_button,
            sizing: options.tab_sizing,
            has_icon_theme: options.has_icon_theme(),
        };
        let group_active = ctx.is_group_active(self.group);
        let border_right = ctx
            .theme
            .color(ColorToken::TabBorder)
            .or_else(|| ctx.theme.color(ColorToken::ContrastBorder));

        if !self.container.drop_feedback {
            self.container.background = ctx.theme.color(ColorToken::EditorGroupHeaderTabsBackground);
        }

        let mut offset = 0.0;
        let mut hard_pinned_width = 0.0;
        let mut other_width = 0.0;

        for index in 0..self.tabs.len() {
            self.redraw_label(index, ctx);

            let hard_pinned = self.documents[index].is_hard_pinned();
            let tab = &mut self.tabs[index];
            tab.decorations = decorations;
            tab.width = calculate_tab_width(&tab.name, &tab.description, &decorations, self.glyph_width);
            tab.offset_left = offset;
            offset += tab.width;
            tab.style.border_right = border_right;

            tab.state.set(TabState::HARD_PINNED, hard_pinned);
            if hard_pinned {
                // Stack hard-pinned tabs after each other while scrolling
                tab.sticky_offset = hard_pinned_width;
                hard_pinned_width += tab.width;
            } else {
                tab.sticky_offset = 0.0;
                other_width += tab.width;
            }

            self.redraw_active_and_dirty(index, group_active, ctx);
        }

        tracing::trace!(
            group = %self.group,
            kind = ?self.kind,
            tabs = self.tabs.len(),
            hard_pinned_width,
            other_width,
            "tab strip redrawn"
        );
    }

    /// Copies the computed label of tab `index` onto its widget.
    pub(super) fn redraw_label(&mut self, index: usize, ctx: &TabsContext<'_>) {
        let (Some(label), Some(document), Some(tab)) = (
            self.labels.get(index),
            self.documents.get(index),
            self.tabs.get_mut(index),
        ) else {
            return;
        };

        let pinned = ctx
            .group(self.group)
            .is_some_and(|group| group.is_pinned(&**document));

        tab.name = label.name.clone();
        tab.description = label.description.clone();
        tab.title = label.title.clone();
        tab.aria_label = format!("{}, tab", label.name);
        tab.italic = !pinned;
        tab.state.set(TabState::PINNED, pinned);
    }

    /// Applies the active, dirty and hover colours of tab `index`.
    pub(super) fn redraw_active_and_dirty(&mut self, index: usize, group_active: bool, ctx: &TabsContext<'_>) {
        let Some(document) = self.documents.get(index) else {
            return;
        };
        let tab_active = ctx
            .group(self.group)
            .is_some_and(|group| group.is_active(&**document));
        let dirty = document.is_dirty();
        let highlight_modified = ctx.options().highlight_modified_tabs;
        let theme = ctx.theme;

        let Some(tab) = self.tabs.get_mut(index) else {
            return;
        };
        tab.state.set(TabState::ACTIVE, tab_active);
        tab.state.set(TabState::DIRTY, dirty);

        let style = &mut tab.style;
        style.outline = None;
        style.dirty_border_top = if dirty && highlight_modified {
            theme.color(modified_border_token(group_active, tab_active))
        } else {
            None
        };

        if tab_active {
            style.background = theme.color(if group_active {
                ColorToken::TabActiveBackground
            } else {
                ColorToken::TabUnfocusedActiveBackground
            });
            style.border_bottom = theme.color(if group_active {
                ColorToken::TabActiveBorder
            } else {
                ColorToken::TabUnfocusedActiveBorder
            });
            // The modified indicator takes the top edge when present
            style.border_top = if style.dirty_border_top.is_none() {
                theme.color(if group_active {
                    ColorToken::TabActiveBorderTop
                } else {
                    ColorToken::TabUnfocusedActiveBorderTop
                })
            } else {
                None
            };
            style.foreground = theme.color(if group_active {
                ColorToken::TabActiveForeground
            } else {
                ColorToken::TabUnfocusedActiveForeground
            });
        } else {
            style.background = theme.color(ColorToken::TabInactiveBackground);
            style.border_bottom = None;
            style.border_top = None;
            style.foreground = theme.color(if group_active {
                ColorToken::TabInactiveForeground
            } else {
                ColorToken::TabUnfocusedInactiveForeground
            });
        }

        if tab.state.contains(TabState::HOVER) {
            let (background, border) = if group_active {
                (ColorToken::TabHoverBackground, ColorToken::TabHoverBorder)
            } else {
                (ColorToken::TabUnfocusedHoverBackground, ColorToken::TabUnfocusedHoverBorder)
            };
            if let Some(color) = theme.color(background) {
                tab.style.background = Some(color);
            }
            if let Some(color) = theme.color(border) {
                tab.style.border_bottom = Some(color);
            }
        }
    }

    /// Shows or hides drop feedback on tab `index`.
    pub(super) fn update_tab_drop_feedback(&mut self, index: usize, is_dnd: bool, ctx: &TabsContext<'_>) {
        if !is_dnd {
            let group_active = ctx.is_group_active(self.group);
            self.redraw_active_and_dirty(index, group_active, ctx);
            return;
        }

        let Some(tab) = self.tabs.get_mut(index) else {
            return;
        };
        tab.style.background = ctx.theme.color(ColorToken::EditorDragAndDropBackground);
        tab.style.outline = drop_outline(ctx.theme, TAB_DROP_OUTLINE_OFFSET);
    }

    /// Shows or hides drop feedback on the empty strip space.
    pub(super) fn update_container_drop_feedback(&mut self, is_dnd: bool, ctx: &TabsContext<'_>) {
        self.container.drop_feedback = is_dnd;
        if is_dnd {
            self.container.background = ctx.theme.color(ColorToken::EditorDragAndDropBackground);
            self.container.outline = drop_outline(ctx.theme, CONTAINER_DROP_OUTLINE_OFFSET);
        } else {
            self.container.background = ctx.theme.color(ColorToken::EditorGroupHeaderTabsBackground);
            self.container.outline = None;
        }
    }
}

fn modified_border_token(group_active: bool, tab_active: bool) -> ColorToken {
    match (group_active, tab_active) {
        (true, true) => ColorToken::TabActiveModifiedBorder,
        (true, false) => ColorToken::TabInactiveModifiedBorder,
        (false, true) => ColorToken::TabUnfocusedActiveModifiedBorder,
        (false, false) => ColorToken::TabUnfocusedInactiveModifiedBorder,
    }
}

/// Dashed outline for high-contrast themes; `None` when the theme has no
/// contrast border.
fn drop_outline(theme: &dyn ColorResolver, offset: f32) -> Option<Outline> {
    theme.color(ColorToken::ActiveContrastBorder).map(|color| Outline {
        color,
        width: DROP_OUTLINE_WIDTH,
        dashed: true,
        offset,
    })
}
