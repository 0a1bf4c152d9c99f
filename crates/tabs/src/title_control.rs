// Chunk: docs/chunks/content_tab_bar - Editor group title area
//!
//! The title area of one editor group: two tab strips plus header chrome.
//!
//! Hard-pinned documents live in their own always-visible strip at the start
//! of the header; everything else goes to the normal, scrollable strip. The
//! coordinator owns both strips and routes every group notification to the
//! strip that owns the document. Ownership is decided by a single predicate,
//! [`TabStripKind::of`], used both for routing and for splitting the group's
//! documents between the strips.

use std::rc::Rc;

use lite_edit_input::{DataTransfer, DragEvent, DropEffect, EffectAllowed, Platform};

use crate::chrome::{BreadcrumbsControl, EditorActionsToolbar, BREADCRUMBS_HEIGHT};
use crate::document::{Document, DocumentRef, GroupId};
use crate::geometry::Dimension;
use crate::group::{IgnoreExternalDrops, ResourceDropHandler};
use crate::options::EditorPartOptions;
use crate::tab_strip::{DropOutcome, DropTarget, TabInput, TabStrip, TabStripKind, TabsContext};
use crate::transfer::{DragTransfer, DraggedGroup};

/// Title area of one editor group.
pub struct TitleCoordinator {
    group: GroupId,
    hard_pinned: TabStrip,
    normal: TabStrip,
    dimension: Option<Dimension>,
    breadcrumbs: Option<Box<dyn BreadcrumbsControl>>,
    toolbar: Option<Box<dyn EditorActionsToolbar>>,
    drop_handler: Box<dyn ResourceDropHandler>,
    transfer: Rc<DragTransfer>,
}

impl TitleCoordinator {
    /// Creates the title area for `group`, sharing the UI thread's drag
    /// transfer.
    pub fn new(group: GroupId) -> Self {
        Self::with_transfer(group, DragTransfer::global())
    }

    /// Creates the title area with an explicit drag transfer.
    pub fn with_transfer(group: GroupId, transfer: Rc<DragTransfer>) -> Self {
        Self {
            group,
            hard_pinned: TabStrip::new(TabStripKind::HardPinned, group, Rc::clone(&transfer)),
            normal: TabStrip::new(TabStripKind::Normal, group, Rc::clone(&transfer)),
            dimension: None,
            breadcrumbs: None,
            toolbar: None,
            drop_handler: Box::new(IgnoreExternalDrops),
            transfer,
        }
    }

    pub fn with_breadcrumbs(mut self, breadcrumbs: Box<dyn BreadcrumbsControl>) -> Self {
        self.breadcrumbs = Some(breadcrumbs);
        self
    }

    pub fn with_toolbar(mut self, toolbar: Box<dyn EditorActionsToolbar>) -> Self {
        self.toolbar = Some(toolbar);
        self
    }

    /// Sets the handler for files and other external drops.
    pub fn with_drop_handler(mut self, handler: Box<dyn ResourceDropHandler>) -> Self {
        self.drop_handler = handler;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.hard_pinned = self.hard_pinned.with_platform(platform);
        self.normal = self.normal.with_platform(platform);
        self
    }

    pub fn with_glyph_width(mut self, glyph_width: f32) -> Self {
        self.hard_pinned = self.hard_pinned.with_glyph_width(glyph_width);
        self.normal = self.normal.with_glyph_width(glyph_width);
        self
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.dimension
    }

    pub fn strip(&self, kind: TabStripKind) -> &TabStrip {
        match kind {
            TabStripKind::HardPinned => &self.hard_pinned,
            TabStripKind::Normal => &self.normal,
        }
    }

    pub fn strip_mut(&mut self, kind: TabStripKind) -> &mut TabStrip {
        match kind {
            TabStripKind::HardPinned => &mut self.hard_pinned,
            TabStripKind::Normal => &mut self.normal,
        }
    }

    fn owner_mut(&mut self, document: &dyn Document) -> &mut TabStrip {
        self.strip_mut(TabStripKind::of(document))
    }

    fn other_mut(&mut self, document: &dyn Document) -> &mut TabStrip {
        match TabStripKind::of(document) {
            TabStripKind::HardPinned => &mut self.normal,
            TabStripKind::Normal => &mut self.hard_pinned,
        }
    }

    /// Splits the group's documents into (hard-pinned, normal), keeping
    /// group order within each.
    fn partition(&self, ctx: &TabsContext<'_>) -> (Vec<DocumentRef>, Vec<DocumentRef>) {
        ctx.group(self.group)
            .map(|group| {
                group
                    .documents()
                    .iter()
                    .cloned()
                    .partition(|document| TabStripKind::of(&**document) == TabStripKind::HardPinned)
            })
            .unwrap_or_default()
    }

    fn sync_strip(&mut self, kind: TabStripKind, ctx: &TabsContext<'_>) {
        let (hard_pinned, normal) = self.partition(ctx);
        match kind {
            TabStripKind::HardPinned => self.hard_pinned.sync(hard_pinned, ctx),
            TabStripKind::Normal => self.normal.sync(normal, ctx),
        }
    }

    fn sync_all(&mut self, ctx: &TabsContext<'_>) {
        let (hard_pinned, normal) = self.partition(ctx);
        self.hard_pinned.sync(hard_pinned, ctx);
        self.normal.sync(normal, ctx);
    }

    // =========================================================================
    // Group notifications
    // =========================================================================

    /// The group opened `document`.
    pub fn open_document(&mut self, document: &DocumentRef, ctx: &mut TabsContext<'_>) {
        self.sync_strip(TabStripKind::of(&**document), ctx);
        // Labels are group-wide, so the other strip may need new descriptions
        self.other_mut(&**document).update_labels(ctx);
        self.after_document_set_changed(ctx);
    }

    /// The group closed `document`.
    pub fn close_document(&mut self, document: &DocumentRef, ctx: &mut TabsContext<'_>) {
        self.sync_strip(TabStripKind::of(&**document), ctx);
        self.other_mut(&**document).update_labels(ctx);
        self.after_document_set_changed(ctx);
    }

    /// The group closed several documents at once.
    pub fn close_documents(&mut self, documents: &[DocumentRef], ctx: &mut TabsContext<'_>) {
        if documents.is_empty() {
            return;
        }
        self.sync_all(ctx);
        self.after_document_set_changed(ctx);
    }

    /// The group closed everything.
    pub fn close_all_documents(&mut self, ctx: &mut TabsContext<'_>) {
        self.sync_all(ctx);
        self.after_document_set_changed(ctx);
    }

    /// The group moved `document` from group index `from` to `to`.
    pub fn move_document(&mut self, document: &DocumentRef, from: usize, to: usize, ctx: &mut TabsContext<'_>) {
        let kind = TabStripKind::of(&**document);
        let (hard_pinned, normal) = self.partition(ctx);
        let target_order = match kind {
            TabStripKind::HardPinned => hard_pinned,
            TabStripKind::Normal => normal,
        };

        let local_from = self.strip(kind).index_of(&**document);
        let local_to = target_order.iter().position(|d| d.id() == document.id());

        match (local_from, local_to) {
            (Some(local_from), Some(local_to)) => {
                tracing::trace!(group = %self.group, from, to, local_from, local_to, "tab moved");
                self.strip_mut(kind).move_tab(local_from, local_to, ctx);
            }
            _ => self.sync_strip(kind, ctx),
        }
    }

    /// The group pinned `document` (it is no longer a preview).
    pub fn pin_document(&mut self, document: &DocumentRef, ctx: &mut TabsContext<'_>) {
        self.owner_mut(&**document).pin(&**document, ctx);
    }

    /// `document` switched between the hard-pinned and normal strips.
    ///
    /// Both strips are rebuilt; the normal strip keeps its scroll position.
    pub fn hard_pin_document(&mut self, document: &DocumentRef, ctx: &mut TabsContext<'_>) {
        let scroll_left = self.normal.scrollbar().scroll_left();
        self.sync_all(ctx);
        self.normal.set_scroll_left(scroll_left);
        tracing::debug!(
            group = %self.group,
            document = %document.id(),
            hard_pinned = document.is_hard_pinned(),
            "tab switched strips"
        );
    }

    /// The group gained or lost focus, or its active document changed.
    pub fn set_active(&mut self, group_active: bool, ctx: &mut TabsContext<'_>) {
        self.hard_pinned.set_active(group_active, ctx);
        self.normal.set_active(group_active, ctx);
        self.update_toolbar(ctx);
    }

    pub fn update_label(&mut self, document: &DocumentRef, ctx: &mut TabsContext<'_>) {
        self.owner_mut(&**document).update_label(&**document, ctx);
        self.other_mut(&**document).update_labels(ctx);
        self.layout(self.dimension, ctx);
    }

    pub fn update_labels(&mut self, ctx: &mut TabsContext<'_>) {
        self.hard_pinned.update_labels(ctx);
        self.normal.update_labels(ctx);
        self.layout(self.dimension, ctx);
    }

    pub fn update_dirty(&mut self, document: &DocumentRef, ctx: &mut TabsContext<'_>) {
        self.owner_mut(&**document).update_dirty(&**document, ctx);
    }

    /// Applies an options change. `ctx` must already report `new`.
    pub fn update_options(&mut self, old: &EditorPartOptions, new: &EditorPartOptions, ctx: &mut TabsContext<'_>) {
        self.hard_pinned.update_options(old, new, ctx);
        self.normal.update_options(old, new, ctx);
        if new.labels_changed(old) || new.rendering_changed(old) {
            self.layout(self.dimension, ctx);
        }
    }

    pub fn update_styles(&mut self, ctx: &mut TabsContext<'_>) {
        self.hard_pinned.update_styles(ctx);
        self.normal.update_styles(ctx);
    }

    /// Breadcrumbs were switched on or off in settings.
    pub fn handle_breadcrumbs_enablement_change(&mut self, ctx: &mut TabsContext<'_>) {
        ctx.groups.relayout_group(self.group);
    }

    fn after_document_set_changed(&mut self, ctx: &mut TabsContext<'_>) {
        self.update_breadcrumbs(ctx);
        self.update_toolbar(ctx);
    }

    fn update_breadcrumbs(&mut self, ctx: &mut TabsContext<'_>) {
        let visibility_changed = self
            .breadcrumbs
            .as_mut()
            .is_some_and(|breadcrumbs| breadcrumbs.update());
        if visibility_changed {
            ctx.groups.relayout_group(self.group);
        }
    }

    fn update_toolbar(&mut self, ctx: &mut TabsContext<'_>) {
        let active = ctx.group(self.group).and_then(|group| group.active_document());

        if let Some(toolbar) = self.toolbar.as_mut() {
            toolbar.update(ctx.is_group_active(self.group), active.as_ref());
        }

        // Hard-pinned tabs are always visible; nothing to reveal. A one-shot
        // reveal block on the normal strip stays set until its next layout pass.
        if active.is_some_and(|document| document.is_hard_pinned()) {
            return;
        }
        self.layout(self.dimension, ctx);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Lays out the header within `dimension`.
    ///
    /// Visible breadcrumbs take their height off the strips. The hard-pinned
    /// strip gets its content width (at most the header width); the normal
    /// strip gets what is left after the toolbar.
    pub fn layout(&mut self, dimension: Option<Dimension>, ctx: &TabsContext<'_>) {
        self.dimension = dimension;

        let Some(dimension) = dimension else {
            self.hard_pinned.layout(None, ctx);
            self.normal.layout(None, ctx);
            return;
        };

        let mut strip_height = dimension.height;
        if let Some(breadcrumbs) = self.breadcrumbs.as_mut() {
            if !breadcrumbs.is_hidden() {
                breadcrumbs.layout(Dimension::new(dimension.width, BREADCRUMBS_HEIGHT));
                strip_height = (dimension.height - BREADCRUMBS_HEIGHT).max(0.0);
            }
        }

        let toolbar_width = self.toolbar.as_ref().map_or(0.0, |toolbar| toolbar.width());
        let hard_pinned_width = self.hard_pinned.content_width().min(dimension.width);
        let normal_width = (dimension.width - hard_pinned_width - toolbar_width).max(0.0);

        self.hard_pinned
            .layout(Some(Dimension::new(hard_pinned_width, strip_height)), ctx);
        self.normal
            .layout(Some(Dimension::new(normal_width, strip_height)), ctx);
    }

    /// Runs work deferred to this frame in both strips.
    pub fn animation_frame(&mut self, ctx: &TabsContext<'_>) {
        self.hard_pinned.animation_frame(ctx);
        self.normal.animation_frame(ctx);
    }

    pub fn dispose(&mut self) {
        self.hard_pinned.dispose();
        self.normal.dispose();
    }

    // =========================================================================
    // Input and drag-and-drop routing
    // =========================================================================

    pub fn handle_input(&mut self, kind: TabStripKind, input: TabInput, ctx: &mut TabsContext<'_>) -> bool {
        self.strip_mut(kind).handle_input(input, ctx)
    }

    pub fn drag_start(&mut self, kind: TabStripKind, index: usize, data: &mut DataTransfer) -> bool {
        self.strip_mut(kind).drag_start(index, data)
    }

    /// Starts dragging the whole group from the header.
    pub fn container_drag_start(&mut self, data: &mut DataTransfer) {
        self.transfer.documents.clear();
        self.transfer.groups.set(vec![DraggedGroup { group: self.group }]);
        data.effect_allowed = EffectAllowed::CopyMove;
        tracing::debug!(group = %self.group, "group drag started");
    }

    pub fn drag_enter(
        &mut self,
        kind: TabStripKind,
        target: DropTarget,
        event: &DragEvent,
        ctx: &TabsContext<'_>,
    ) -> DropEffect {
        self.strip_mut(kind).drag_enter(target, event, ctx)
    }

    pub fn drag_leave(&mut self, kind: TabStripKind, target: DropTarget, ctx: &TabsContext<'_>) {
        self.strip_mut(kind).drag_leave(target, ctx);
    }

    pub fn drag_end(&mut self, kind: TabStripKind, target: DropTarget, ctx: &TabsContext<'_>) {
        self.strip_mut(kind).drag_end(target, ctx);
    }

    /// Drops on `kind`'s strip. External data goes to the drop handler.
    pub fn drop(
        &mut self,
        kind: TabStripKind,
        target: DropTarget,
        event: &DragEvent,
        ctx: &mut TabsContext<'_>,
    ) -> DropOutcome {
        let outcome = self.strip_mut(kind).drop(target, event, ctx);

        if let DropOutcome::External { data, index } = &outcome {
            self.drop_handler
                .handle_drop(data, self.group, *index, &mut *ctx.groups);
            ctx.groups.focus_group(self.group);
        }

        outcome
    }
}
