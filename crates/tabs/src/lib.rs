// Chunk: docs/chunks/content_tab_bar - Tab strip controllers
//! lite-edit-tabs: the tab strips of an editor group.
//!
//! This crate keeps the tabs of one editor group in sync with the group's
//! documents. It is headless: every tab is a [`TabWidget`] value carrying the
//! resolved flags, label text, geometry and colours, and a renderer draws
//! those values however it likes.
//!
//! The pieces, bottom-up:
//!
//! - [`TabStrip`]: one strip of tabs. Syncs widgets to documents, computes
//!   labels through [`lite_edit_labels`], defers layout to the next frame,
//!   reveals the active tab, and implements tab drag-and-drop.
//! - [`TitleCoordinator`]: the title area of a group. Owns the hard-pinned
//!   and the normal strip and routes group notifications to the right one.
//! - [`DragTransfer`]: the channels a local drag carries its tab or group on.
//!
//! The group model stays outside: strips query it through [`EditorGroup`]
//! and send requests through [`EditorGroupsAccessor`], both passed in a
//! [`TabsContext`] together with the [`ColorResolver`].

pub mod chrome;
pub mod document;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod group;
pub mod options;
pub mod scrollbar;
pub mod tab_strip;
pub mod tab_widget;
pub mod theme;
pub mod title_control;
pub mod transfer;

pub use chrome::{BreadcrumbsControl, EditorActionsToolbar, BREADCRUMBS_HEIGHT};
pub use document::{same_document, Document, DocumentId, DocumentRef, GroupId};
pub use error::{OptionsError, OptionsResult};
pub use frame::FrameTask;
pub use geometry::{calculate_tab_width, Dimension, TabDecorations};
pub use group::{
    EditorGroup, EditorGroupsAccessor, IgnoreExternalDrops, MergeGroupMode, MergeGroupOptions, OpenOptions,
    ResourceDropHandler,
};
pub use options::{
    load_options, load_options_or_default, load_options_or_default_from, options_file_path, save_options,
    EditorPartOptions, TabCloseButton, TabSizing,
};
pub use scrollbar::TabsScrollbar;
pub use tab_strip::{ContainerState, DropOutcome, DropTarget, TabInput, TabStrip, TabStripKind, TabsContext};
pub use tab_widget::{Outline, TabState, TabStyle, TabWidget};
pub use theme::{Color, ColorResolver, ColorToken, Theme};
pub use title_control::TitleCoordinator;
pub use transfer::{DragPayload, DragTransfer, DraggedDocument, DraggedGroup, TransferChannel};

// Re-exported so hosts can name label types without a direct dependency.
pub use lite_edit_labels::{Describe, LabelFormat, TabLabel, Verbosity};
