// Chunk: docs/chunks/tab_bar_interaction - Label derivation and disambiguation
//! lite-edit-labels: tab label computation for the lite-edit tab strip.
//!
//! Given the ordered documents of an editor group, this crate computes the
//! label each tab shows: a name, an optional description that tells
//! same-named documents apart, and a full title for tooltips.
//!
//! # Example
//!
//! ```
//! use lite_edit_labels::{compute_labels, Describe, LabelFormat, Verbosity};
//!
//! #[derive(Clone)]
//! struct File(&'static str, &'static str);
//!
//! impl Describe for File {
//!     fn name(&self) -> String {
//!         self.0.to_string()
//!     }
//!     fn description(&self, _verbosity: Verbosity) -> Option<String> {
//!         Some(self.1.to_string())
//!     }
//!     fn title(&self, _verbosity: Verbosity) -> Option<String> {
//!         Some(format!("{}/{}", self.1, self.0))
//!     }
//! }
//!
//! let files = [File("main.rs", "/a"), File("main.rs", "/b"), File("util.rs", "/c")];
//! let labels = compute_labels(&files, LabelFormat::Auto);
//!
//! assert_eq!(labels[0].description, "/a");
//! assert_eq!(labels[1].description, "/b");
//! assert_eq!(labels[2].description, "");
//! ```
//!
//! # Disambiguation
//!
//! With the automatic format, descriptions are only shown where they carry
//! information: unique names get none, and duplicate names get the shortest
//! part of their path that no sibling shares (see [`shorten`]).

mod format;
mod resolver;
mod shorten;

pub use format::{Describe, LabelFormat, Verbosity};
pub use resolver::{compute_labels, LabelResolver, TabLabel};
pub use shorten::{shorten, shorten_with, ELLIPSIS};
