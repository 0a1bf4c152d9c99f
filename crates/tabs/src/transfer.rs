// Chunk: docs/chunks/tab_drag_and_drop - Local drag payload channels
//!
//! In-flight drag payloads for tabs and groups.
//!
//! A drag starts in one strip and ends in another with no shared context in
//! between, so local payloads travel through a [`DragTransfer`] that lives for
//! the whole UI session. Each channel holds at most one payload and is valid
//! for a single gesture: the receiving strip clears it on drop and the source
//! clears it on drag end.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lite_edit_input::{DataTransfer, DragEvent};

use crate::document::{DocumentRef, GroupId};

/// A single-slot typed channel.
pub struct TransferChannel<T> {
    slot: RefCell<Option<Vec<T>>>,
}

impl<T: Clone> TransferChannel<T> {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// Replaces the channel contents.
    pub fn set(&self, data: Vec<T>) {
        *self.slot.borrow_mut() = Some(data);
    }

    pub fn has(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Returns a copy of the payload, leaving it in place.
    pub fn get(&self) -> Option<Vec<T>> {
        self.slot.borrow().clone()
    }

    /// Returns the first item of the payload, if any.
    pub fn first(&self) -> Option<T> {
        self.slot.borrow().as_ref().and_then(|data| data.first().cloned())
    }

    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

impl<T: Clone> Default for TransferChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TransferChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.slot.borrow().as_ref().map(Vec::len);
        f.debug_struct("TransferChannel").field("len", &len).finish()
    }
}

/// A tab being dragged.
#[derive(Debug, Clone)]
pub struct DraggedDocument {
    pub document: DocumentRef,
    /// The group the drag started in
    pub group: GroupId,
}

/// A whole group being dragged by its tab container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggedGroup {
    pub group: GroupId,
}

/// What a drag carries, resolved from the channels and the event.
#[derive(Debug, Clone)]
pub enum DragPayload {
    LocalDocument(DraggedDocument),
    LocalGroup(DraggedGroup),
    ExternalData(DataTransfer),
}

impl DragPayload {
    pub fn is_local(&self) -> bool {
        !matches!(self, DragPayload::ExternalData(_))
    }
}

/// Session-wide drag channels.
#[derive(Debug, Default)]
pub struct DragTransfer {
    pub documents: TransferChannel<DraggedDocument>,
    pub groups: TransferChannel<DraggedGroup>,
}

thread_local! {
    static GLOBAL_TRANSFER: Rc<DragTransfer> = Rc::new(DragTransfer::default());
}

impl DragTransfer {
    /// Returns the transfer shared by every strip on the UI thread.
    pub fn global() -> Rc<DragTransfer> {
        GLOBAL_TRANSFER.with(Rc::clone)
    }

    /// Resolves the payload of a drag: a local tab first, then a local group,
    /// then whatever external data the event carries.
    pub fn payload(&self, event: &DragEvent) -> Option<DragPayload> {
        if let Some(document) = self.documents.first() {
            return Some(DragPayload::LocalDocument(document));
        }
        if let Some(group) = self.groups.first() {
            return Some(DragPayload::LocalGroup(group));
        }
        event
            .data
            .as_ref()
            .filter(|data| data.has_types())
            .map(|data| DragPayload::ExternalData(data.clone()))
    }

    pub fn clear_all(&self) {
        self.documents.clear();
        self.groups.clear();
    }
}
