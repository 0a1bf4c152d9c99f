// Chunk: docs/chunks/content_tab_bar - Tab colors
//!
//! Theme colours used by the tab strip.
//!
//! The strip never hardcodes colours: it asks a [`ColorResolver`] for a
//! [`ColorToken`] and leaves the property unset when the theme has no value.
//! [`Theme`] is the stock resolver, loaded from a JSON object of
//! `"token.key": "#rrggbb[aa]"` entries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{OptionsError, OptionsResult};

/// An RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba8(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Formats the colour as `#rrggbb`, or `#rrggbbaa` when translucent.
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (byte(self.r), byte(self.g), byte(self.b), byte(self.a));
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Returns the colour as the `[r, g, b, a]` array the renderer consumes.
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Theme keys the tab strip reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    TabActiveBackground,
    TabUnfocusedActiveBackground,
    TabInactiveBackground,
    TabActiveForeground,
    TabUnfocusedActiveForeground,
    TabInactiveForeground,
    TabUnfocusedInactiveForeground,
    TabBorder,
    TabActiveBorder,
    TabUnfocusedActiveBorder,
    TabActiveBorderTop,
    TabUnfocusedActiveBorderTop,
    TabActiveModifiedBorder,
    TabInactiveModifiedBorder,
    TabUnfocusedActiveModifiedBorder,
    TabUnfocusedInactiveModifiedBorder,
    TabHoverBackground,
    TabUnfocusedHoverBackground,
    TabHoverBorder,
    TabUnfocusedHoverBorder,
    EditorGroupHeaderTabsBackground,
    EditorDragAndDropBackground,
    ContrastBorder,
    ActiveContrastBorder,
}

impl ColorToken {
    pub const ALL: [ColorToken; 24] = [
        ColorToken::TabActiveBackground,
        ColorToken::TabUnfocusedActiveBackground,
        ColorToken::TabInactiveBackground,
        ColorToken::TabActiveForeground,
        ColorToken::TabUnfocusedActiveForeground,
        ColorToken::TabInactiveForeground,
        ColorToken::TabUnfocusedInactiveForeground,
        ColorToken::TabBorder,
        ColorToken::TabActiveBorder,
        ColorToken::TabUnfocusedActiveBorder,
        ColorToken::TabActiveBorderTop,
        ColorToken::TabUnfocusedActiveBorderTop,
        ColorToken::TabActiveModifiedBorder,
        ColorToken::TabInactiveModifiedBorder,
        ColorToken::TabUnfocusedActiveModifiedBorder,
        ColorToken::TabUnfocusedInactiveModifiedBorder,
        ColorToken::TabHoverBackground,
        ColorToken::TabUnfocusedHoverBackground,
        ColorToken::TabHoverBorder,
        ColorToken::TabUnfocusedHoverBorder,
        ColorToken::EditorGroupHeaderTabsBackground,
        ColorToken::EditorDragAndDropBackground,
        ColorToken::ContrastBorder,
        ColorToken::ActiveContrastBorder,
    ];

    /// The key this token is stored under in theme files.
    pub fn key(self) -> &'static str {
        match self {
            ColorToken::TabActiveBackground => "tab.activeBackground",
            ColorToken::TabUnfocusedActiveBackground => "tab.unfocusedActiveBackground",
            ColorToken::TabInactiveBackground => "tab.inactiveBackground",
            ColorToken::TabActiveForeground => "tab.activeForeground",
            ColorToken::TabUnfocusedActiveForeground => "tab.unfocusedActiveForeground",
            ColorToken::TabInactiveForeground => "tab.inactiveForeground",
            ColorToken::TabUnfocusedInactiveForeground => "tab.unfocusedInactiveForeground",
            ColorToken::TabBorder => "tab.border",
            ColorToken::TabActiveBorder => "tab.activeBorder",
            ColorToken::TabUnfocusedActiveBorder => "tab.unfocusedActiveBorder",
            ColorToken::TabActiveBorderTop => "tab.activeBorderTop",
            ColorToken::TabUnfocusedActiveBorderTop => "tab.unfocusedActiveBorderTop",
            ColorToken::TabActiveModifiedBorder => "tab.activeModifiedBorder",
            ColorToken::TabInactiveModifiedBorder => "tab.inactiveModifiedBorder",
            ColorToken::TabUnfocusedActiveModifiedBorder => "tab.unfocusedActiveModifiedBorder",
            ColorToken::TabUnfocusedInactiveModifiedBorder => "tab.unfocusedInactiveModifiedBorder",
            ColorToken::TabHoverBackground => "tab.hoverBackground",
            ColorToken::TabUnfocusedHoverBackground => "tab.unfocusedHoverBackground",
            ColorToken::TabHoverBorder => "tab.hoverBorder",
            ColorToken::TabUnfocusedHoverBorder => "tab.unfocusedHoverBorder",
            ColorToken::EditorGroupHeaderTabsBackground => "editorGroupHeader.tabsBackground",
            ColorToken::EditorDragAndDropBackground => "editorGroup.dropBackground",
            ColorToken::ContrastBorder => "contrastBorder",
            ColorToken::ActiveContrastBorder => "contrastActiveBorder",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.key() == key)
    }
}

/// Looks up theme colours.
pub trait ColorResolver {
    /// Returns the colour for `token`, or `None` if the theme leaves it unset.
    fn color(&self, token: ColorToken) -> Option<Color>;
}

/// A theme backed by a token map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    colors: HashMap<ColorToken, Color>,
}

impl Theme {
    /// Creates a theme with no colours set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets a colour, returning the theme for chaining.
    pub fn with(mut self, token: ColorToken, color: Color) -> Self {
        self.colors.insert(token, color);
        self
    }

    pub fn set(&mut self, token: ColorToken, color: Option<Color>) {
        match color {
            Some(color) => self.colors.insert(token, color),
            None => self.colors.remove(&token),
        };
    }

    /// Parses a JSON object of `key: "#hex"` entries.
    ///
    /// Unknown keys are skipped; malformed colours are an error.
    pub fn from_json(json: &str) -> OptionsResult<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        let mut theme = Self::empty();

        for (key, value) in entries {
            let Some(token) = ColorToken::from_key(&key) else {
                tracing::debug!(%key, "ignoring unknown theme key");
                continue;
            };
            let color = Color::from_hex(&value).ok_or_else(|| OptionsError::color(&key, &value))?;
            theme.colors.insert(token, color);
        }

        Ok(theme)
    }

    pub fn load(path: &Path) -> OptionsResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The built-in dark theme (Catppuccin Mocha).
    pub fn default_dark() -> Self {
        let base = Color::from([0.12, 0.12, 0.14, 1.0]);
        let inactive = Color::from([0.15, 0.15, 0.18, 1.0]);
        let active = Color::from([0.22, 0.22, 0.28, 1.0]);
        let label = Color::from([0.7, 0.7, 0.75, 1.0]);
        let dimmed = Color::from([0.5, 0.5, 0.55, 1.0]);
        let modified = Color::from([0.9, 0.8, 0.1, 1.0]);
        let accent = Color::from([0.2, 0.6, 0.9, 1.0]);

        Self::empty()
            .with(ColorToken::EditorGroupHeaderTabsBackground, base)
            .with(ColorToken::TabActiveBackground, active)
            .with(ColorToken::TabUnfocusedActiveBackground, active)
            .with(ColorToken::TabInactiveBackground, inactive)
            .with(ColorToken::TabActiveForeground, Color::new(0.9, 0.9, 0.95, 1.0))
            .with(ColorToken::TabUnfocusedActiveForeground, label)
            .with(ColorToken::TabInactiveForeground, label)
            .with(ColorToken::TabUnfocusedInactiveForeground, dimmed)
            .with(ColorToken::TabBorder, base)
            .with(ColorToken::TabActiveBorder, accent)
            .with(ColorToken::TabActiveModifiedBorder, modified)
            .with(ColorToken::TabInactiveModifiedBorder, modified)
            .with(ColorToken::TabUnfocusedActiveModifiedBorder, modified)
            .with(ColorToken::TabUnfocusedInactiveModifiedBorder, modified)
            .with(ColorToken::TabHoverBackground, Color::new(0.19, 0.19, 0.24, 1.0))
            .with(ColorToken::EditorDragAndDropBackground, Color::new(0.2, 0.6, 0.9, 0.25))
    }
}

impl ColorResolver for Theme {
    fn color(&self, token: ColorToken) -> Option<Color> {
        self.colors.get(&token).copied()
    }
}
