// Chunk: docs/chunks/content_tab_bar - Content tab bar rendering and interaction
// Chunk: docs/chunks/tab_bar_interaction - Label derivation and reveal
//!
//! A single horizontal strip of tabs for one editor group.
//!
//! The strip keeps three parallel, equally long sequences: the documents it
//! shows, their labels and their widgets. Entry `i` of each belongs
//! together. Widgets are only ever added or removed at the tail; whenever
//! the document order changes the owner calls [`TabStrip::sync`] again.
//!
//! Geometry work is deferred: [`TabStrip::layout`] only schedules a pass,
//! and the pass runs when the host calls [`TabStrip::animation_frame`].

mod dnd;
mod interaction;
mod style;

use std::collections::HashMap;
use std::rc::Rc;

use lite_edit_input::Platform;
use lite_edit_labels::{Describe, LabelFormat, LabelResolver, TabLabel, Verbosity};

use crate::document::{Document, DocumentId, DocumentRef, GroupId};
use crate::frame::FrameTask;
use crate::geometry::{Dimension, DEFAULT_GLYPH_WIDTH};
use crate::group::{EditorGroup, EditorGroupsAccessor};
use crate::options::EditorPartOptions;
use crate::scrollbar::TabsScrollbar;
use crate::tab_widget::{Outline, TabState, TabWidget};
use crate::theme::{Color, ColorResolver};
use crate::transfer::DragTransfer;

pub use dnd::{DropOutcome, DropTarget};
pub use interaction::TabInput;

/// Which of a group's two strips a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabStripKind {
    /// Always-visible tabs stacked at the start of the header
    HardPinned,
    Normal,
}

impl TabStripKind {
    /// Returns the strip that owns `document`.
    pub fn of(document: &dyn Document) -> Self {
        if document.is_hard_pinned() {
            TabStripKind::HardPinned
        } else {
            TabStripKind::Normal
        }
    }
}

/// Context passed to strip operations.
///
/// Gives access to the group model and the theme for the duration of one
/// event, the way the editor context does for focus targets.
pub struct TabsContext<'a> {
    /// The editor groups (queries and commands)
    pub groups: &'a mut dyn EditorGroupsAccessor,
    /// Colour lookup
    pub theme: &'a dyn ColorResolver,
}

impl<'a> TabsContext<'a> {
    pub fn new(groups: &'a mut dyn EditorGroupsAccessor, theme: &'a dyn ColorResolver) -> Self {
        Self { groups, theme }
    }

    pub fn group(&self, id: GroupId) -> Option<&dyn EditorGroup> {
        self.groups.group(id)
    }

    pub fn options(&self) -> &EditorPartOptions {
        self.groups.part_options()
    }

    pub fn is_group_active(&self, id: GroupId) -> bool {
        self.groups.is_active_group(id)
    }
}

/// State of the area that holds the tabs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerState {
    /// Set while a supported drag hovers over empty strip space
    pub drop_feedback: bool,
    pub background: Option<Color>,
    pub outline: Option<Outline>,
    /// The strip scrolls while something is dragged across it
    pub scroll_while_dragging: bool,
}

/// One strip of tabs.
pub struct TabStrip {
    kind: TabStripKind,
    group: GroupId,
    platform: Platform,
    glyph_width: f32,

    documents: Vec<DocumentRef>,
    labels: Vec<TabLabel<DocumentRef>>,
    tabs: Vec<TabWidget>,

    container: ContainerState,
    scrollbar: TabsScrollbar,
    dimension: Option<Dimension>,

    layout_task: FrameTask,
    /// Clears DRAGGING on the frame after a drag starts
    drag_feedback_task: FrameTask,
    /// One-shot: the next layout pass skips revealing the active tab
    block_reveal_active_tab: bool,
    layout_passes: usize,

    transfer: Rc<DragTransfer>,
}

impl TabStrip {
    pub fn new(kind: TabStripKind, group: GroupId, transfer: Rc<DragTransfer>) -> Self {
        Self {
            kind,
            group,
            platform: Platform::current(),
            glyph_width: DEFAULT_GLYPH_WIDTH,
            documents: Vec::new(),
            labels: Vec::new(),
            tabs: Vec::new(),
            container: ContainerState::default(),
            scrollbar: TabsScrollbar::new(),
            dimension: None,
            layout_task: FrameTask::new(),
            drag_feedback_task: FrameTask::new(),
            block_reveal_active_tab: false,
            layout_passes: 0,
            transfer,
        }
    }

    /// Sets which modifier turns a drop into a copy.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the glyph width used to measure labels.
    pub fn with_glyph_width(mut self, glyph_width: f32) -> Self {
        self.glyph_width = glyph_width;
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn kind(&self) -> TabStripKind {
        self.kind
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn documents(&self) -> &[DocumentRef] {
        &self.documents
    }

    pub fn labels(&self) -> &[TabLabel<DocumentRef>] {
        &self.labels
    }

    pub fn tabs(&self) -> &[TabWidget] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&TabWidget> {
        self.tabs.get(index)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn container(&self) -> &ContainerState {
        &self.container
    }

    pub fn scrollbar(&self) -> &TabsScrollbar {
        &self.scrollbar
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.dimension
    }

    /// Returns the strip-local index of `document`.
    pub fn index_of(&self, document: &dyn Document) -> Option<usize> {
        self.documents.iter().position(|d| d.id() == document.id())
    }

    /// Total width of all tabs.
    pub fn content_width(&self) -> f32 {
        self.tabs.iter().map(|tab| tab.width).sum()
    }

    /// Returns the index of the tab under strip x-coordinate `x`.
    pub fn tab_at(&self, x: f32) -> Option<usize> {
        let content_x = x + self.scrollbar.scroll_left();
        self.tabs.iter().position(|tab| tab.contains(content_x))
    }

    pub fn is_layout_pending(&self) -> bool {
        self.layout_task.is_pending()
    }

    pub fn is_reveal_blocked(&self) -> bool {
        self.block_reveal_active_tab
    }

    /// Number of deferred layout passes that have run.
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    pub fn is_disposed(&self) -> bool {
        self.layout_task.is_disposed()
    }

    /// Returns the strip-local index of the group's active document, if this
    /// strip shows it.
    pub fn active_index(&self, ctx: &TabsContext<'_>) -> Option<usize> {
        let active = ctx.group(self.group)?.active_document()?;
        self.index_of(&*active)
    }

    // =========================================================================
    // Document lifecycle
    // =========================================================================

    /// Matches the widgets to `documents` and redraws everything.
    ///
    /// Widgets are appended or removed at the tail until there is one per
    /// document; then labels are recomputed and every tab is redrawn. An
    /// empty list clears the strip.
    pub fn sync(&mut self, documents: Vec<DocumentRef>, ctx: &TabsContext<'_>) {
        if self.is_disposed() {
            return;
        }

        self.documents = documents;

        if self.documents.is_empty() {
            self.tabs.clear();
            self.labels.clear();
            tracing::trace!(group = %self.group, kind = ?self.kind, "tab strip cleared");
            return;
        }

        while self.tabs.len() < self.documents.len() {
            self.tabs.push(TabWidget::new());
        }
        // Remove from the end so the remaining indexes stay in order
        while self.tabs.len() > self.documents.len() {
            self.tabs.pop();
        }

        self.compute_labels(ctx);
        self.redraw(ctx);

        tracing::debug!(group = %self.group, kind = ?self.kind, tabs = self.tabs.len(), "tab strip synced");
    }

    /// Moves the tab at `from` to `to` and redraws.
    pub fn move_tab(&mut self, from: usize, to: usize, ctx: &TabsContext<'_>) {
        let len = self.documents.len();
        if from >= len || to >= len || from == to {
            return;
        }

        if from < self.labels.len() && to < self.labels.len() {
            let label = self.labels.remove(from);
            self.labels.insert(to, label);
        }
        let document = self.documents.remove(from);
        self.documents.insert(to, document);

        self.redraw(ctx);
    }

    /// Redraws the label of `document` after it was pinned.
    pub fn pin(&mut self, document: &dyn Document, ctx: &TabsContext<'_>) {
        if let Some(index) = self.index_of(document) {
            self.redraw_label(index, ctx);
        }
    }

    /// Recolours every tab for the group's new focus state.
    pub fn set_active(&mut self, group_active: bool, ctx: &TabsContext<'_>) {
        for index in 0..self.tabs.len() {
            self.redraw_active_and_dirty(index, group_active, ctx);
        }
    }

    /// Recomputes all labels after `document` changed its name or description.
    pub fn update_label(&mut self, _document: &dyn Document, ctx: &TabsContext<'_>) {
        self.update_labels(ctx);
    }

    /// Recomputes all labels and redraws them.
    pub fn update_labels(&mut self, ctx: &TabsContext<'_>) {
        if self.documents.is_empty() {
            return;
        }
        self.compute_labels(ctx);
        // Widths follow the label text, so geometry is recomputed too
        self.redraw(ctx);
    }

    pub fn update_dirty(&mut self, document: &dyn Document, ctx: &TabsContext<'_>) {
        if let Some(index) = self.index_of(document) {
            let group_active = ctx.is_group_active(self.group);
            self.redraw_active_and_dirty(index, group_active, ctx);
        }
    }

    /// Applies an options change. `ctx` must already report the new options.
    pub fn update_options(&mut self, old: &EditorPartOptions, new: &EditorPartOptions, ctx: &TabsContext<'_>) {
        if new.labels_changed(old) {
            self.compute_labels(ctx);
        }
        if new.rendering_changed(old) {
            self.redraw(ctx);
        }
    }

    /// Redraws after a theme change.
    pub fn update_styles(&mut self, ctx: &TabsContext<'_>) {
        self.redraw(ctx);
    }

    fn compute_labels(&mut self, ctx: &TabsContext<'_>) {
        let format = ctx.options().label_format;
        let group_documents: Vec<DocumentRef> = ctx
            .group(self.group)
            .map(|group| group.documents().to_vec())
            .unwrap_or_default();

        // Disambiguate against the whole group so both strips agree.
        let mut by_id: HashMap<DocumentId, TabLabel<DocumentRef>> = LabelResolver::new(format)
            .resolve(&group_documents)
            .into_iter()
            .map(|label| (label.document.id(), label))
            .collect();

        self.labels = self
            .documents
            .iter()
            .map(|document| {
                by_id
                    .remove(&document.id())
                    .unwrap_or_else(|| standalone_label(document, format))
            })
            .collect();
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Records the strip dimension and schedules a layout pass.
    ///
    /// Nothing is scheduled unless this strip shows the group's active
    /// document and has a dimension. Repeated calls before the next frame
    /// coalesce into one pass.
    pub fn layout(&mut self, dimension: Option<Dimension>, ctx: &TabsContext<'_>) {
        self.dimension = dimension;

        if self.dimension.is_none() || self.active_index(ctx).is_none() {
            return;
        }

        if self.layout_task.schedule() {
            tracing::trace!(group = %self.group, kind = ?self.kind, "tab layout scheduled");
        }
    }

    /// Runs work deferred to this frame.
    pub fn animation_frame(&mut self, ctx: &TabsContext<'_>) {
        if self.drag_feedback_task.fire() {
            for tab in &mut self.tabs {
                tab.state.remove(TabState::DRAGGING);
            }
        }

        if self.layout_task.fire() {
            if let Some(dimension) = self.dimension {
                self.layout_passes += 1;
                self.do_layout(dimension, ctx);
            }
        }
    }

    fn do_layout(&mut self, dimension: Dimension, ctx: &TabsContext<'_>) {
        let Some(active) = self.active_index(ctx) else {
            return;
        };

        self.scrollbar.set_scroll_dimensions(dimension.width, self.content_width());

        if std::mem::take(&mut self.block_reveal_active_tab) {
            tracing::trace!(group = %self.group, kind = ?self.kind, "active tab reveal skipped");
            return;
        }

        let tab = &self.tabs[active];
        if self.scrollbar.reveal(tab.offset_left, tab.width) {
            tracing::trace!(
                group = %self.group,
                scroll_left = self.scrollbar.scroll_left(),
                "revealed active tab"
            );
        }
    }

    /// Skips revealing the active tab on the next layout pass.
    ///
    /// Set before closing through the tab itself, so a quick series of closes
    /// does not make the strip jump after each one.
    pub fn block_reveal_active_tab_once(&mut self) {
        self.block_reveal_active_tab = true;
    }

    /// Sets the horizontal scroll offset (clamped).
    pub fn set_scroll_left(&mut self, px: f32) {
        self.scrollbar.set_scroll_left(px);
    }

    /// Cancels pending work and drops all tabs. Later frames do nothing.
    pub fn dispose(&mut self) {
        self.layout_task.dispose();
        self.drag_feedback_task.dispose();
        self.tabs.clear();
        self.labels.clear();
        self.documents.clear();
        tracing::debug!(group = %self.group, kind = ?self.kind, "tab strip disposed");
    }
}

/// Label for a document the group does not list.
fn standalone_label(document: &DocumentRef, format: LabelFormat) -> TabLabel<DocumentRef> {
    let (verbosity, disambiguate) = format.flags();
    let description = if disambiguate {
        String::new()
    } else {
        document.description(verbosity).unwrap_or_default()
    };

    TabLabel {
        document: document.clone(),
        name: document.name(),
        description,
        title: document.title(Verbosity::Long).unwrap_or_default(),
    }
}
