// Chunk: docs/chunks/tab_bar_interaction - Label derivation and disambiguation

use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// How much path or context information a label carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verbosity {
    Short,
    Medium,
    Long,
}

/// The user-facing label format option.
///
/// Stored in the options file as `"short"`, `"medium"`, `"long"` or
/// `"default"`. Anything unrecognised reads as [`LabelFormat::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LabelFormat {
    /// Name plus the short description of every document
    Short,
    /// Name plus the medium description of every document
    Medium,
    /// Name plus the long description of every document
    Long,
    /// Medium descriptions, shown only where names collide
    #[default]
    Auto,
}

impl LabelFormat {
    /// Returns the verbosity used for descriptions and whether duplicate
    /// names should be disambiguated.
    pub fn flags(self) -> (Verbosity, bool) {
        match self {
            LabelFormat::Short => (Verbosity::Short, false),
            LabelFormat::Medium => (Verbosity::Medium, false),
            LabelFormat::Long => (Verbosity::Long, false),
            LabelFormat::Auto => (Verbosity::Medium, true),
        }
    }

    /// Returns the option-file spelling of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelFormat::Short => "short",
            LabelFormat::Medium => "medium",
            LabelFormat::Long => "long",
            LabelFormat::Auto => "default",
        }
    }
}

impl From<&str> for LabelFormat {
    fn from(value: &str) -> Self {
        match value {
            "short" => LabelFormat::Short,
            "medium" => LabelFormat::Medium,
            "long" => LabelFormat::Long,
            _ => LabelFormat::Auto,
        }
    }
}

impl From<String> for LabelFormat {
    fn from(value: String) -> Self {
        LabelFormat::from(value.as_str())
    }
}

impl From<LabelFormat> for String {
    fn from(value: LabelFormat) -> Self {
        value.as_str().to_string()
    }
}

/// Anything that can be shown as a tab.
///
/// A missing description (`None`) is different from an empty one: documents
/// without a description never take part in disambiguation.
pub trait Describe {
    /// The display name, typically the file name.
    fn name(&self) -> String;

    /// Context shown next to the name, typically the parent directory.
    fn description(&self, verbosity: Verbosity) -> Option<String>;

    /// The full title shown on hover.
    fn title(&self, verbosity: Verbosity) -> Option<String>;
}

impl<T: Describe + ?Sized> Describe for &T {
    fn name(&self) -> String {
        (**self).name()
    }

    fn description(&self, verbosity: Verbosity) -> Option<String> {
        (**self).description(verbosity)
    }

    fn title(&self, verbosity: Verbosity) -> Option<String> {
        (**self).title(verbosity)
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn description(&self, verbosity: Verbosity) -> Option<String> {
        (**self).description(verbosity)
    }

    fn title(&self, verbosity: Verbosity) -> Option<String> {
        (**self).title(verbosity)
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn description(&self, verbosity: Verbosity) -> Option<String> {
        (**self).description(verbosity)
    }

    fn title(&self, verbosity: Verbosity) -> Option<String> {
        (**self).title(verbosity)
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn description(&self, verbosity: Verbosity) -> Option<String> {
        (**self).description(verbosity)
    }

    fn title(&self, verbosity: Verbosity) -> Option<String> {
        (**self).title(verbosity)
    }
}
