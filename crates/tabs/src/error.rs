// Chunk: docs/chunks/workspace_session_persistence - Options file errors
//!
//! Error types for reading the tab options and theme files.
//!
//! The strip itself has no failure states: missing widgets are ignored and
//! stale drag data reads as "no payload". Only the file-backed configuration
//! can fail, and callers usually degrade to defaults.

use thiserror::Error;

/// Errors that can occur while loading or saving tab configuration.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not valid JSON for the expected structure.
    #[error("Failed to parse options: {0}")]
    Parse(#[from] serde_json::Error),

    /// The platform has no configuration directory.
    #[error("Could not determine the configuration directory")]
    NoConfigDir,

    /// A theme entry held something other than a hex colour.
    #[error("Invalid color {value:?} for {key}")]
    Color {
        /// The theme key the value was found under.
        key: String,
        /// The offending value.
        value: String,
    },
}

/// Result type alias for configuration operations.
pub type OptionsResult<T> = Result<T, OptionsError>;

impl OptionsError {
    /// Create an invalid colour error.
    pub fn color(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Color {
            key: key.into(),
            value: value.into(),
        }
    }
}
