// Chunk: docs/chunks/content_tab_bar - Documents shown as tabs
//!
//! The document and group identities the tab strip works with.
//!
//! The strip never creates or destroys documents. It holds shared handles
//! (`DocumentRef`) and compares them by [`DocumentId`].

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use lite_edit_labels::Describe;

/// Stable identifier of an open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// Stable identifier of an editor group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// An open document as seen by the tab strip.
///
/// Labels come from the [`Describe`] supertrait. Whether a document is
/// pinned (as opposed to a preview) is a property of the group that holds it,
/// see [`crate::EditorGroup::is_pinned`].
pub trait Document: Describe + fmt::Debug {
    fn id(&self) -> DocumentId;

    /// Whether the document has unsaved changes.
    fn is_dirty(&self) -> bool;

    /// Whether the document lives in the hard-pinned strip.
    fn is_hard_pinned(&self) -> bool;

    /// The file backing this document, if any. Used for outbound drags.
    fn resource(&self) -> Option<PathBuf> {
        None
    }
}

/// Shared handle to a document.
pub type DocumentRef = Rc<dyn Document>;

/// Returns true if both handles refer to the same document.
pub fn same_document(a: &dyn Document, b: &dyn Document) -> bool {
    a.id() == b.id()
}
