//! Fake workbench shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::PathBuf;
use std::rc::Rc;

use lite_edit_input::DataTransfer;
use lite_edit_tabs::{
    Describe, Document, DocumentId, DocumentRef, EditorGroup, EditorGroupsAccessor, EditorPartOptions, GroupId,
    MergeGroupMode, MergeGroupOptions, OpenOptions, ResourceDropHandler, Verbosity,
};

#[derive(Debug)]
pub struct FakeDocument {
    id: DocumentId,
    name: String,
    dir: String,
    pub dirty: Cell<bool>,
    pub hard_pinned: Cell<bool>,
}

impl Describe for FakeDocument {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn description(&self, verbosity: Verbosity) -> Option<String> {
        if self.dir.is_empty() {
            return None;
        }
        match verbosity {
            Verbosity::Short => self.dir.rsplit('/').next().map(str::to_string),
            Verbosity::Medium | Verbosity::Long => Some(self.dir.clone()),
        }
    }

    fn title(&self, _verbosity: Verbosity) -> Option<String> {
        Some(format!("{}/{}", self.dir, self.name))
    }
}

impl Document for FakeDocument {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn is_hard_pinned(&self) -> bool {
        self.hard_pinned.get()
    }

    fn resource(&self) -> Option<PathBuf> {
        Some(PathBuf::from(format!("{}/{}", self.dir, self.name)))
    }
}

pub fn doc(id: u64, name: &str, dir: &str) -> Rc<FakeDocument> {
    Rc::new(FakeDocument {
        id: DocumentId(id),
        name: name.to_string(),
        dir: dir.to_string(),
        dirty: Cell::new(false),
        hard_pinned: Cell::new(false),
    })
}

pub fn doc_ref(document: &Rc<FakeDocument>) -> DocumentRef {
    document.clone()
}

#[derive(Debug)]
pub struct FakeGroup {
    pub id: GroupId,
    pub documents: Vec<DocumentRef>,
    pub active: Option<DocumentId>,
    pub pinned: HashSet<DocumentId>,
}

impl FakeGroup {
    pub fn new(id: u32) -> Self {
        Self {
            id: GroupId(id),
            documents: Vec::new(),
            active: None,
            pinned: HashSet::new(),
        }
    }

    fn insert(&mut self, document: DocumentRef, index: usize) {
        let index = index.min(self.documents.len());
        self.documents.insert(index, document);
    }

    fn remove(&mut self, id: DocumentId) -> Option<(usize, DocumentRef)> {
        let index = self.documents.iter().position(|d| d.id() == id)?;
        Some((index, self.documents.remove(index)))
    }
}

impl EditorGroup for FakeGroup {
    fn id(&self) -> GroupId {
        self.id
    }

    fn documents(&self) -> &[DocumentRef] {
        &self.documents
    }

    fn active_document(&self) -> Option<DocumentRef> {
        let active = self.active?;
        self.documents.iter().find(|d| d.id() == active).cloned()
    }

    fn is_pinned(&self, document: &dyn Document) -> bool {
        self.pinned.contains(&document.id())
    }
}

/// A request the strips sent to the workbench.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Open(GroupId, DocumentId, OpenOptions),
    OpenUntitled(GroupId, OpenOptions),
    Close(GroupId, DocumentId),
    Pin(GroupId, DocumentId),
    Move {
        source: GroupId,
        document: DocumentId,
        target: GroupId,
        index: usize,
    },
    Copy {
        source: GroupId,
        document: DocumentId,
        target: GroupId,
        index: usize,
    },
    Merge(GroupId, GroupId, MergeGroupOptions),
    Focus(GroupId),
    Relayout(GroupId),
}

#[derive(Debug, Default)]
pub struct FakeWorkbench {
    pub groups: Vec<FakeGroup>,
    pub active_group: Option<GroupId>,
    pub options: EditorPartOptions,
    pub calls: Vec<Call>,
}

impl FakeWorkbench {
    /// A workbench with one focused group holding `documents`, the last one
    /// active.
    pub fn with_group(documents: &[DocumentRef]) -> Self {
        let mut group = FakeGroup::new(1);
        group.documents = documents.to_vec();
        group.active = documents.last().map(|d| d.id());
        Self {
            groups: vec![group],
            active_group: Some(GroupId(1)),
            ..Default::default()
        }
    }

    pub fn add_group(&mut self, id: u32, documents: &[DocumentRef]) {
        let mut group = FakeGroup::new(id);
        group.documents = documents.to_vec();
        group.active = documents.first().map(|d| d.id());
        self.groups.push(group);
    }

    pub fn group_mut(&mut self, id: GroupId) -> &mut FakeGroup {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .expect("group exists")
    }

    pub fn fake_group(&self, id: GroupId) -> &FakeGroup {
        self.groups.iter().find(|g| g.id == id).expect("group exists")
    }

    pub fn document_ids(&self, id: GroupId) -> Vec<u64> {
        self.fake_group(id).documents.iter().map(|d| d.id().0).collect()
    }

    /// Adds `document` to the group's tail and activates it, without logging.
    pub fn push(&mut self, id: GroupId, document: DocumentRef) {
        let group = self.group_mut(id);
        group.active = Some(document.id());
        group.documents.push(document);
    }

    /// Removes `document`, activating its neighbour, without logging.
    pub fn remove(&mut self, id: GroupId, document: DocumentId) {
        let group = self.group_mut(id);
        if let Some((index, _)) = group.remove(document) {
            if group.active == Some(document) {
                let next = index.min(group.documents.len().saturating_sub(1));
                group.active = group.documents.get(next).map(|d| d.id());
            }
        }
    }

    pub fn activate(&mut self, id: GroupId, document: DocumentId) {
        self.group_mut(id).active = Some(document);
    }
}

impl EditorGroupsAccessor for FakeWorkbench {
    fn group(&self, id: GroupId) -> Option<&dyn EditorGroup> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .map(|g| g as &dyn EditorGroup)
    }

    fn active_group(&self) -> Option<GroupId> {
        self.active_group
    }

    fn part_options(&self) -> &EditorPartOptions {
        &self.options
    }

    fn open_document(&mut self, group: GroupId, document: DocumentRef, options: OpenOptions) {
        self.calls.push(Call::Open(group, document.id(), options));
        let fake = self.group_mut(group);
        if !fake.documents.iter().any(|d| d.id() == document.id()) {
            let index = options.index.unwrap_or(fake.documents.len());
            fake.insert(document.clone(), index);
        }
        if options.pinned {
            fake.pinned.insert(document.id());
        }
        fake.active = Some(document.id());
    }

    fn open_untitled(&mut self, group: GroupId, options: OpenOptions) {
        self.calls.push(Call::OpenUntitled(group, options));
    }

    fn close_document(&mut self, group: GroupId, document: &DocumentRef) {
        self.calls.push(Call::Close(group, document.id()));
        self.remove(group, document.id());
    }

    fn pin_document(&mut self, group: GroupId, document: &DocumentRef) {
        self.calls.push(Call::Pin(group, document.id()));
        self.group_mut(group).pinned.insert(document.id());
    }

    fn move_document(&mut self, source: GroupId, document: &DocumentRef, target: GroupId, index: usize) {
        self.calls.push(Call::Move {
            source,
            document: document.id(),
            target,
            index,
        });
        if let Some((_, moved)) = self.group_mut(source).remove(document.id()) {
            self.group_mut(target).insert(moved, index);
        }
    }

    fn copy_document(&mut self, source: GroupId, document: &DocumentRef, target: GroupId, index: usize) {
        self.calls.push(Call::Copy {
            source,
            document: document.id(),
            target,
            index,
        });
        self.group_mut(target).insert(document.clone(), index);
    }

    fn merge_group(&mut self, source: GroupId, target: GroupId, options: MergeGroupOptions) {
        self.calls.push(Call::Merge(source, target, options));
        let documents = self.fake_group(source).documents.clone();
        if options.mode == MergeGroupMode::Move {
            self.group_mut(source).documents.clear();
        }
        let mut index = options.index.unwrap_or(usize::MAX);
        for document in documents {
            self.group_mut(target).insert(document, index);
            index = index.saturating_add(1);
        }
    }

    fn focus_group(&mut self, group: GroupId) {
        self.calls.push(Call::Focus(group));
        self.active_group = Some(group);
    }

    fn relayout_group(&mut self, group: GroupId) {
        self.calls.push(Call::Relayout(group));
    }
}

/// Records external drops.
#[derive(Debug, Default, Clone)]
pub struct RecordingDropHandler {
    pub drops: Rc<RefCell<Vec<(DataTransfer, GroupId, usize)>>>,
}

impl ResourceDropHandler for RecordingDropHandler {
    fn handle_drop(
        &mut self,
        data: &DataTransfer,
        target: GroupId,
        index: usize,
        _groups: &mut dyn EditorGroupsAccessor,
    ) {
        self.drops.borrow_mut().push((data.clone(), target, index));
    }
}

/// Installs a test log writer once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
