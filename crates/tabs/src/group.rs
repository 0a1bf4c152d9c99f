// Chunk: docs/chunks/content_tab_bar - Editor group model boundary
//!
//! The editor-group model the tab strip reads from and sends commands to.
//!
//! The strip only queries groups and issues requests; the model applies
//! them and later notifies the [`crate::TitleCoordinator`] of the resulting
//! change (open, close, move, ...), which is what updates the widgets.

use lite_edit_input::DataTransfer;

use crate::document::{DocumentRef, GroupId};
use crate::options::EditorPartOptions;
use crate::Document;

/// Read access to one editor group.
pub trait EditorGroup {
    fn id(&self) -> GroupId;

    /// All documents of the group, in tab order.
    fn documents(&self) -> &[DocumentRef];

    /// The document currently shown in the group.
    fn active_document(&self) -> Option<DocumentRef>;

    /// Whether the document is pinned (not a preview) in this group.
    fn is_pinned(&self, document: &dyn Document) -> bool;

    fn count(&self) -> usize {
        self.documents().len()
    }

    fn document_at(&self, index: usize) -> Option<DocumentRef> {
        self.documents().get(index).cloned()
    }

    fn index_of(&self, document: &dyn Document) -> Option<usize> {
        self.documents()
            .iter()
            .position(|candidate| candidate.id() == document.id())
    }

    fn contains(&self, document: &dyn Document) -> bool {
        self.index_of(document).is_some()
    }

    /// Whether the document is the group's active document.
    fn is_active(&self, document: &dyn Document) -> bool {
        self.active_document()
            .is_some_and(|active| active.id() == document.id())
    }
}

/// Options for opening a document in a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenOptions {
    /// Insert position; `None` keeps the group's default placement.
    pub index: Option<usize>,
    /// Open as pinned rather than as a preview.
    pub pinned: bool,
    /// Activate without moving keyboard focus to the editor.
    pub preserve_focus: bool,
}

/// How the documents of a merged group arrive in the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeGroupMode {
    /// Documents leave the source group
    #[default]
    Move,
    /// Documents are copied; the source group keeps them
    CopyEditors,
}

/// Options for merging one group into another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeGroupOptions {
    /// Insert position in the target group
    pub index: Option<usize>,
    pub mode: MergeGroupMode,
}

/// The workbench-wide view of all editor groups.
pub trait EditorGroupsAccessor {
    fn group(&self, id: GroupId) -> Option<&dyn EditorGroup>;

    /// The group that currently has focus.
    fn active_group(&self) -> Option<GroupId>;

    fn part_options(&self) -> &EditorPartOptions;

    fn open_document(&mut self, group: GroupId, document: DocumentRef, options: OpenOptions);

    /// Opens a fresh untitled document in the group.
    fn open_untitled(&mut self, group: GroupId, options: OpenOptions);

    fn close_document(&mut self, group: GroupId, document: &DocumentRef);

    fn pin_document(&mut self, group: GroupId, document: &DocumentRef);

    fn move_document(&mut self, source: GroupId, document: &DocumentRef, target: GroupId, index: usize);

    fn copy_document(&mut self, source: GroupId, document: &DocumentRef, target: GroupId, index: usize);

    fn merge_group(&mut self, source: GroupId, target: GroupId, options: MergeGroupOptions);

    fn focus_group(&mut self, group: GroupId);

    /// Asks the group to lay itself out again (header height changed).
    fn relayout_group(&mut self, group: GroupId);

    /// Returns true if `group` has focus.
    fn is_active_group(&self, group: GroupId) -> bool {
        self.active_group() == Some(group)
    }
}

/// Handles drops of data that did not originate from a tab or group.
pub trait ResourceDropHandler {
    /// Opens whatever `data` carries in `target` at `index`.
    fn handle_drop(
        &mut self,
        data: &DataTransfer,
        target: GroupId,
        index: usize,
        groups: &mut dyn EditorGroupsAccessor,
    );
}

/// Drop handler that ignores external data.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreExternalDrops;

impl ResourceDropHandler for IgnoreExternalDrops {
    fn handle_drop(
        &mut self,
        _data: &DataTransfer,
        target: GroupId,
        index: usize,
        _groups: &mut dyn EditorGroupsAccessor,
    ) {
        tracing::debug!(%target, index, "external drop ignored");
    }
}
