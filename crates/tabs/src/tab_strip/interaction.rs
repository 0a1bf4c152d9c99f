// Chunk: docs/chunks/tab_bar_interaction - Click, keyboard, and scroll handling
//!
//! Pointer, keyboard and scroll input on a tab strip.
//!
//! Input only ever asks the group model to do something (open, close, pin);
//! the model's notifications then come back through the coordinator and
//! update the widgets.

use lite_edit_input::{Key, KeyEvent, MouseButton, MouseEvent, ScrollDelta};

use super::{TabStrip, TabsContext};
use crate::group::OpenOptions;
use crate::tab_widget::TabState;

/// An input event already hit-tested to a tab or the container.
#[derive(Debug, Clone, PartialEq)]
pub enum TabInput {
    MouseDown {
        index: usize,
        event: MouseEvent,
        /// The press started on the tab's action bar (close button)
        on_action_bar: bool,
    },
    MouseUp { index: usize, event: MouseEvent },
    DoubleClick { index: usize },
    /// Double click on the strip container
    ContainerDoubleClick { over_empty_space: bool },
    KeyUp { index: usize, event: KeyEvent },
    CloseButton { index: usize },
    Scroll(ScrollDelta),
    HoverEnter { index: usize },
    HoverLeave { index: usize },
}

impl TabStrip {
    /// Handles one input event. Returns `true` if it was consumed.
    pub fn handle_input(&mut self, input: TabInput, ctx: &mut TabsContext<'_>) -> bool {
        match input {
            TabInput::MouseDown {
                index,
                event,
                on_action_bar,
            } => {
                if event.button != MouseButton::Primary || on_action_bar {
                    return false;
                }
                self.open_at(index, OpenOptions::default(), ctx)
            }
            TabInput::MouseUp { index, event } => {
                if event.button != MouseButton::Middle {
                    return false;
                }
                self.close_at(index, ctx)
            }
            TabInput::CloseButton { index } => self.close_at(index, ctx),
            TabInput::DoubleClick { index } => {
                let Some(document) = self.documents.get(index).cloned() else {
                    return false;
                };
                ctx.groups.pin_document(self.group, &document);
                true
            }
            TabInput::ContainerDoubleClick { over_empty_space } => {
                if !over_empty_space {
                    return false;
                }
                let count = ctx.group(self.group).map_or(0, |group| group.count());
                ctx.groups.open_untitled(
                    self.group,
                    OpenOptions {
                        index: Some(count),
                        pinned: true,
                        preserve_focus: false,
                    },
                );
                true
            }
            TabInput::KeyUp { index, event } => self.handle_key(index, &event, ctx),
            TabInput::Scroll(delta) => {
                // Vertical wheels scroll the strip horizontally
                let amount = if delta.dx.abs() >= delta.dy.abs() {
                    delta.dx
                } else {
                    delta.dy
                };
                self.scrollbar.scroll_by(amount as f32);
                true
            }
            TabInput::HoverEnter { index } => self.set_hover(index, true, ctx),
            TabInput::HoverLeave { index } => self.set_hover(index, false, ctx),
        }
    }

    fn handle_key(&mut self, index: usize, event: &KeyEvent, ctx: &mut TabsContext<'_>) -> bool {
        if index >= self.documents.len() {
            return false;
        }
        let last = self.documents.len() - 1;

        let target = match event.key {
            Key::Return | Key::Char(' ') => return self.open_at(index, OpenOptions::default(), ctx),
            Key::Left | Key::Up => index.checked_sub(1),
            Key::Right | Key::Down => Some(index + 1).filter(|next| *next <= last),
            Key::Home => Some(0),
            Key::End => Some(last),
            _ => return false,
        };

        match target {
            Some(target) => self.open_at(
                target,
                OpenOptions {
                    preserve_focus: true,
                    ..OpenOptions::default()
                },
                ctx,
            ),
            // At either end: consumed, nothing to open
            None => true,
        }
    }

    fn open_at(&mut self, index: usize, options: OpenOptions, ctx: &mut TabsContext<'_>) -> bool {
        let Some(document) = self.documents.get(index).cloned() else {
            return false;
        };
        ctx.groups.open_document(self.group, document, options);
        true
    }

    fn close_at(&mut self, index: usize, ctx: &mut TabsContext<'_>) -> bool {
        let Some(document) = self.documents.get(index).cloned() else {
            return false;
        };
        self.block_reveal_active_tab_once();
        ctx.groups.close_document(self.group, &document);
        true
    }

    fn set_hover(&mut self, index: usize, hover: bool, ctx: &TabsContext<'_>) -> bool {
        let Some(tab) = self.tabs.get_mut(index) else {
            return false;
        };
        tab.state.set(TabState::HOVER, hover);
        let group_active = ctx.is_group_active(self.group);
        self.redraw_active_and_dirty(index, group_active, ctx);
        true
    }
}
