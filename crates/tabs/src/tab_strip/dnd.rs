// Chunk: docs/chunks/tab_drag_and_drop - Tab drag-and-drop
//!
//! Drag-and-drop for a tab strip.
//!
//! Three payloads can arrive: a tab (from any group), a whole group, or
//! external data such as files. Local payloads travel through the shared
//! [`DragTransfer`](crate::DragTransfer) channels; the platform event only
//! contributes modifiers and external data. Every exit path of a drop clears
//! the channel it consumed.

use lite_edit_input::{DataTransfer, DragEvent, DropEffect, EffectAllowed};

use super::{TabStrip, TabsContext};
use crate::document::{DocumentRef, GroupId};
use crate::group::{MergeGroupMode, MergeGroupOptions};
use crate::tab_widget::TabState;
use crate::transfer::{DragPayload, DraggedDocument, DraggedGroup};

/// Where in a strip a drag event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Over the tab at this strip index
    Tab(usize),
    /// Over the strip container
    Container {
        /// False when the event bubbled up from a tab
        over_empty_space: bool,
    },
}

/// What a drop did.
#[derive(Debug, Clone)]
pub enum DropOutcome {
    /// Nothing was dropped
    Ignored,
    MovedDocument {
        document: DocumentRef,
        source: GroupId,
        index: usize,
    },
    CopiedDocument {
        document: DocumentRef,
        source: GroupId,
        index: usize,
    },
    MergedGroup {
        source: GroupId,
        mode: MergeGroupMode,
        index: usize,
    },
    /// External data to hand to the resource drop handler
    External { data: DataTransfer, index: usize },
}

impl DropOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, DropOutcome::Ignored)
    }
}

impl TabStrip {
    /// Starts dragging the tab at `index`.
    ///
    /// Publishes the tab on the document channel and adds its resource to
    /// `data` so other applications can accept it. Returns `false` for an
    /// index without a tab.
    pub fn drag_start(&mut self, index: usize, data: &mut DataTransfer) -> bool {
        let Some(document) = self.documents.get(index).cloned() else {
            return false;
        };

        self.transfer.groups.clear();
        self.transfer.documents.set(vec![DraggedDocument {
            document: document.clone(),
            group: self.group,
        }]);

        data.effect_allowed = EffectAllowed::CopyMove;
        if let Some(resource) = document.resource() {
            data.add_resources([resource]);
        }

        if let Some(tab) = self.tabs.get_mut(index) {
            tab.state.insert(TabState::DRAGGING);
        }
        // Clear the dragging look once the platform has taken its snapshot
        self.drag_feedback_task.schedule();

        tracing::debug!(group = %self.group, document = %document.id(), "tab drag started");
        true
    }

    /// A drag entered `target`. Returns the effect to show the user.
    pub fn drag_enter(&mut self, target: DropTarget, event: &DragEvent, ctx: &TabsContext<'_>) -> DropEffect {
        match target {
            DropTarget::Tab(index) => self.tab_drag_enter(index, event, ctx),
            DropTarget::Container { over_empty_space } => self.container_drag_enter(over_empty_space, event, ctx),
        }
    }

    fn tab_drag_enter(&mut self, index: usize, event: &DragEvent, ctx: &TabsContext<'_>) -> DropEffect {
        let Some(tab) = self.tabs.get_mut(index) else {
            return DropEffect::None;
        };
        tab.state.insert(TabState::DRAGGED_OVER);

        let Some(payload) = self.supported_payload(event) else {
            return DropEffect::None;
        };

        // A tab dropped on itself goes nowhere
        if let DragPayload::LocalDocument(dragged) = &payload {
            let over_self = dragged.group == self.group
                && self
                    .documents
                    .get(index)
                    .is_some_and(|document| document.id() == dragged.document.id());
            if over_self {
                return DropEffect::None;
            }
        }

        self.update_tab_drop_feedback(index, true, ctx);
        self.drop_effect_hint(&payload, event)
    }

    fn container_drag_enter(&mut self, over_empty_space: bool, event: &DragEvent, ctx: &TabsContext<'_>) -> DropEffect {
        self.container.scroll_while_dragging = true;

        if !over_empty_space {
            self.update_container_drop_feedback(false, ctx);
            return DropEffect::None;
        }

        let Some(payload) = self.supported_payload(event) else {
            return DropEffect::None;
        };

        // The last tab dropped after itself goes nowhere
        if let DragPayload::LocalDocument(dragged) = &payload {
            let already_last = dragged.group == self.group
                && self
                    .documents
                    .last()
                    .is_some_and(|document| document.id() == dragged.document.id());
            if already_last {
                return DropEffect::None;
            }
        }

        self.update_container_drop_feedback(true, ctx);
        self.drop_effect_hint(&payload, event)
    }

    /// The drag left `target` without dropping.
    pub fn drag_leave(&mut self, target: DropTarget, ctx: &TabsContext<'_>) {
        match target {
            DropTarget::Tab(index) => {
                if let Some(tab) = self.tabs.get_mut(index) {
                    tab.state.remove(TabState::DRAGGED_OVER);
                }
                self.update_tab_drop_feedback(index, false, ctx);
            }
            DropTarget::Container { .. } => {
                self.update_container_drop_feedback(false, ctx);
                self.container.scroll_while_dragging = false;
            }
        }
    }

    /// The drag gesture that started here ended (dropped or cancelled).
    pub fn drag_end(&mut self, target: DropTarget, ctx: &TabsContext<'_>) {
        self.drag_leave(target, ctx);
        self.transfer.documents.clear();
        if matches!(target, DropTarget::Container { .. }) {
            self.transfer.groups.clear();
        }
    }

    /// Drops the current payload on `target`.
    ///
    /// Local tabs are moved (or copied with the copy gesture across groups),
    /// local groups are merged, and external data is returned for the
    /// caller's drop handler. The target group is focused after a local drop.
    pub fn drop(&mut self, target: DropTarget, event: &DragEvent, ctx: &mut TabsContext<'_>) -> DropOutcome {
        let local_index = match target {
            DropTarget::Tab(index) => {
                if let Some(tab) = self.tabs.get_mut(index) {
                    tab.state.remove(TabState::DRAGGED_OVER);
                }
                self.update_tab_drop_feedback(index, false, ctx);
                index
            }
            DropTarget::Container { over_empty_space } => {
                if !over_empty_space {
                    self.update_container_drop_feedback(false, ctx);
                    self.container.scroll_while_dragging = false;
                    return DropOutcome::Ignored;
                }
                self.documents.len()
            }
        };
        self.update_container_drop_feedback(false, ctx);
        self.container.scroll_while_dragging = false;

        let index = self.group_index(local_index, ctx);

        if self.is_own_group_dragged() {
            self.transfer.clear_all();
            return DropOutcome::Ignored;
        }

        if let Some(dragged) = self.transfer.documents.first() {
            self.transfer.documents.clear();
            return self.drop_document(dragged, index, event, ctx);
        }

        if let Some(dragged) = self.transfer.groups.first() {
            self.transfer.groups.clear();
            return self.drop_group(dragged, index, event, ctx);
        }

        match &event.data {
            Some(data) if data.has_types() => {
                tracing::debug!(group = %self.group, index, resources = data.resources.len(), "external drop");
                DropOutcome::External {
                    data: data.clone(),
                    index,
                }
            }
            _ => DropOutcome::Ignored,
        }
    }

    fn drop_document(
        &mut self,
        dragged: DraggedDocument,
        index: usize,
        event: &DragEvent,
        ctx: &mut TabsContext<'_>,
    ) -> DropOutcome {
        if ctx.group(dragged.group).is_none() {
            tracing::warn!(source = %dragged.group, "dropped tab from a group that no longer exists");
            return DropOutcome::Ignored;
        }

        let outcome = if self.is_move_operation(event, dragged.group) {
            ctx.groups
                .move_document(dragged.group, &dragged.document, self.group, index);
            DropOutcome::MovedDocument {
                document: dragged.document,
                source: dragged.group,
                index,
            }
        } else {
            ctx.groups
                .copy_document(dragged.group, &dragged.document, self.group, index);
            DropOutcome::CopiedDocument {
                document: dragged.document,
                source: dragged.group,
                index,
            }
        };

        ctx.groups.focus_group(self.group);
        tracing::debug!(group = %self.group, index, ?outcome, "tab dropped");
        outcome
    }

    fn drop_group(
        &mut self,
        dragged: DraggedGroup,
        index: usize,
        event: &DragEvent,
        ctx: &mut TabsContext<'_>,
    ) -> DropOutcome {
        if ctx.group(dragged.group).is_none() {
            tracing::warn!(source = %dragged.group, "dropped group no longer exists");
            return DropOutcome::Ignored;
        }

        let mode = if self.is_move_operation(event, dragged.group) {
            MergeGroupMode::Move
        } else {
            MergeGroupMode::CopyEditors
        };
        ctx.groups.merge_group(
            dragged.group,
            self.group,
            MergeGroupOptions {
                index: Some(index),
                mode,
            },
        );
        ctx.groups.focus_group(self.group);

        tracing::debug!(group = %self.group, source = %dragged.group, index, ?mode, "group merged by drop");
        DropOutcome::MergedGroup {
            source: dragged.group,
            mode,
            index,
        }
    }

    /// The payload of `event`, unless it is this strip's own group.
    fn supported_payload(&self, event: &DragEvent) -> Option<DragPayload> {
        // Our own group being dragged wins over any leftover tab payload
        if self.is_own_group_dragged() {
            return None;
        }
        self.transfer.payload(event)
    }

    fn is_own_group_dragged(&self) -> bool {
        self.transfer
            .groups
            .first()
            .is_some_and(|dragged| dragged.group == self.group)
    }

    fn drop_effect_hint(&self, payload: &DragPayload, event: &DragEvent) -> DropEffect {
        let source = match payload {
            DragPayload::ExternalData(_) => return DropEffect::Copy,
            DragPayload::LocalDocument(dragged) => dragged.group,
            DragPayload::LocalGroup(dragged) => dragged.group,
        };
        if self.is_move_operation(event, source) {
            DropEffect::Move
        } else {
            DropEffect::Copy
        }
    }

    /// Within one group a drop always moves; across groups the copy gesture
    /// turns it into a copy.
    fn is_move_operation(&self, event: &DragEvent, source: GroupId) -> bool {
        source == self.group || !event.modifiers.is_copy_gesture(self.platform)
    }

    /// Translates a strip-local drop index into a position in the group.
    ///
    /// An index past the last tab lands just after this strip's last
    /// document, or at the end of the group when the strip is empty.
    pub(super) fn group_index(&self, local_index: usize, ctx: &TabsContext<'_>) -> usize {
        let Some(group) = ctx.group(self.group) else {
            return local_index;
        };

        if let Some(index) = self
            .documents
            .get(local_index)
            .and_then(|document| group.index_of(&**document))
        {
            return index;
        }

        match self.documents.last().and_then(|document| group.index_of(&**document)) {
            Some(index) => index + 1,
            None => group.count(),
        }
    }
}
