// Chunk: docs/chunks/workspace_session_persistence - Tab options persistence
//!
//! User options that affect how tabs look.
//!
//! ## File Location
//!
//! Options live in `<config dir>/lite-edit/tabs.json`, for example
//! `~/Library/Application Support/lite-edit/tabs.json` on macOS. Saving
//! writes a temp file and renames it over the old one.
//!
//! Loading degrades gracefully: a missing file means defaults, and an
//! unreadable one is logged and replaced by defaults.

use std::fs;
use std::path::{Path, PathBuf};

use lite_edit_labels::LabelFormat;
use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, OptionsResult};

/// Application name used for the config directory.
const APP_NAME: &str = "lite-edit";

/// Options file name.
const OPTIONS_FILENAME: &str = "tabs.json";

/// Where the close button sits on each tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabCloseButton {
    Off,
    Left,
    #[default]
    Right,
}

/// How tabs size themselves when space runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabSizing {
    /// Tabs keep a readable minimum width and the strip scrolls
    #[default]
    Fit,
    /// Tabs may shrink below the fit minimum
    Shrink,
}

/// Editor-part options read by the tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPartOptions {
    pub label_format: LabelFormat,
    pub tab_close_button: TabCloseButton,
    pub tab_sizing: TabSizing,
    pub show_icons: bool,
    /// Name of the file icon theme, if one is installed.
    pub icon_theme: Option<String>,
    /// Draw a top border on tabs with unsaved changes.
    pub highlight_modified_tabs: bool,
}

impl Default for EditorPartOptions {
    fn default() -> Self {
        Self {
            label_format: LabelFormat::Auto,
            tab_close_button: TabCloseButton::Right,
            tab_sizing: TabSizing::Fit,
            show_icons: true,
            icon_theme: None,
            highlight_modified_tabs: false,
        }
    }
}

impl EditorPartOptions {
    /// Returns true if tab labels must be recomputed after switching from
    /// `old` to `self`.
    pub fn labels_changed(&self, old: &EditorPartOptions) -> bool {
        self.label_format != old.label_format
    }

    /// Returns true if tabs must be redrawn after switching from `old` to
    /// `self`.
    pub fn rendering_changed(&self, old: &EditorPartOptions) -> bool {
        self.label_format != old.label_format
            || self.tab_close_button != old.tab_close_button
            || self.tab_sizing != old.tab_sizing
            || self.show_icons != old.show_icons
            || self.icon_theme != old.icon_theme
            || self.highlight_modified_tabs != old.highlight_modified_tabs
    }

    /// Whether tabs reserve room for a file icon.
    pub fn has_icon_theme(&self) -> bool {
        self.show_icons && self.icon_theme.is_some()
    }

    pub fn from_json(json: &str) -> OptionsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> OptionsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads options from `path`.
    pub fn load_from(path: &Path) -> OptionsResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Writes options to `path`, creating its directory if needed.
    ///
    /// Uses atomic write (write to temp file, then rename).
    pub fn save_to(&self, path: &Path) -> OptionsResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let json = self.to_json()?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

/// Returns the path of the options file.
pub fn options_file_path() -> OptionsResult<PathBuf> {
    let config_dir = dirs::config_dir().ok_or(OptionsError::NoConfigDir)?;
    Ok(config_dir.join(APP_NAME).join(OPTIONS_FILENAME))
}

/// Loads options from the default location.
pub fn load_options() -> OptionsResult<EditorPartOptions> {
    EditorPartOptions::load_from(&options_file_path()?)
}

/// Saves options to the default location.
pub fn save_options(options: &EditorPartOptions) -> OptionsResult<()> {
    options.save_to(&options_file_path()?)
}

/// Loads options from `path`, falling back to defaults on any problem.
pub fn load_options_or_default_from(path: &Path) -> EditorPartOptions {
    if !path.exists() {
        return EditorPartOptions::default();
    }

    match EditorPartOptions::load_from(path) {
        Ok(options) => options,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load tab options, using defaults");
            EditorPartOptions::default()
        }
    }
}

/// Loads options from the default location, falling back to defaults.
pub fn load_options_or_default() -> EditorPartOptions {
    match options_file_path() {
        Ok(path) => load_options_or_default_from(&path),
        Err(e) => {
            tracing::warn!(error = %e, "no options file location, using defaults");
            EditorPartOptions::default()
        }
    }
}
