// Chunk: docs/chunks/tab_bar_interaction - Tab input events
// Chunk: docs/chunks/tab_drag_and_drop - Drag transfer event types
//!
//! Input event types for keyboard, mouse, scroll and drag-and-drop handling.
//!
//! These types abstract over the platform event details and provide a clean
//! Rust-native interface for input handling. This crate is shared between
//! the tab strip and anything that feeds it events, so the strip never sees
//! toolkit types directly.

use std::path::PathBuf;

// =============================================================================
// Platform
// =============================================================================

/// The platform family, as far as input conventions are concerned.
///
/// The only convention that differs today is which modifier turns a
/// drag-and-drop move into a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS: Option (⌥) requests a copy
    Mac,
    /// Everything else: Ctrl requests a copy
    Other,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

// =============================================================================
// Keyboard
// =============================================================================

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }
}

/// Modifier keys that can be held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Command key (Cmd/⌘)
    pub command: bool,
    /// Option key (Alt/⌥)
    pub option: bool,
    /// Control key (Ctrl/⌃)
    pub control: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.command && !self.option && !self.control
    }

    // Chunk: docs/chunks/tab_drag_and_drop - Copy modifier for tab drops
    /// Returns true if these modifiers ask for a drag-and-drop copy.
    ///
    /// Ctrl on non-Apple platforms, Option on macOS.
    pub fn is_copy_gesture(&self, platform: Platform) -> bool {
        match platform {
            Platform::Mac => self.option,
            Platform::Other => self.control,
        }
    }
}

/// Keys the tab strip reacts to. Anything else arrives as `Char` or is
/// dropped by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character; Space is `Char(' ')`
    Char(char),
    /// Return / Enter
    Return,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Escape key
    Escape,
}

// =============================================================================
// Mouse and scroll
// =============================================================================

// Chunk: docs/chunks/viewport_scrolling - Scroll event handling
/// Scroll delta from trackpad, mouse wheel or a touch pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDelta {
    /// Horizontal scroll amount (positive = right)
    pub dx: f64,
    /// Vertical scroll amount (positive = down)
    pub dy: f64,
}

impl ScrollDelta {
    /// Creates a new ScrollDelta.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// A mouse event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// The type of mouse event
    pub kind: MouseEventKind,
    /// Which button changed state
    pub button: MouseButton,
    /// Position in view coordinates (pixels from top-left)
    pub position: (f64, f64),
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
    /// Number of consecutive clicks (1 for single, 2 for double, etc.)
    pub click_count: u32,
}

impl MouseEvent {
    /// Creates a single click event of the given kind and button at the origin.
    pub fn new(kind: MouseEventKind, button: MouseButton) -> Self {
        Self {
            kind,
            button,
            position: (0.0, 0.0),
            modifiers: Modifiers::default(),
            click_count: 1,
        }
    }

    /// Returns true if this is the second (or later) click of a sequence.
    pub fn is_double_click(&self) -> bool {
        self.click_count >= 2
    }
}

/// Kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Mouse button pressed
    Down,
    /// Mouse button released
    Up,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

// =============================================================================
// Drag and drop
// =============================================================================

/// Transfer type for a list of resource paths (outbound file drags).
pub const RESOURCE_URLS_TYPE: &str = "ResourceURLs";

/// Transfer type for plain URI lists, as produced by file managers.
pub const URI_LIST_TYPE: &str = "text/uri-list";

/// What a drop would do, as reported back to the drag source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// The drop is not allowed here
    #[default]
    None,
    /// The dragged item is copied
    Copy,
    /// The dragged item is moved
    Move,
}

/// The operations the drag source permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectAllowed {
    #[default]
    All,
    Copy,
    Move,
    CopyMove,
}

/// Data carried by the platform drag session.
///
/// This is the external, untrusted part of a drag: it may come from another
/// application. Local tab and group drags carry their identity through the
/// tab crate's transfer channels instead; this only holds the
/// platform-visible types and any resources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTransfer {
    /// The MIME-like types present on the drag
    pub types: Vec<String>,
    /// File resources carried by the drag
    pub resources: Vec<PathBuf>,
    /// The operations the source allows
    pub effect_allowed: EffectAllowed,
}

impl DataTransfer {
    /// Creates an empty data transfer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a data transfer carrying file resources (as from a file manager).
    pub fn with_resources(resources: Vec<PathBuf>) -> Self {
        Self {
            types: vec![URI_LIST_TYPE.to_string()],
            resources,
            effect_allowed: EffectAllowed::All,
        }
    }

    /// Returns true if the transfer carries any type at all.
    pub fn has_types(&self) -> bool {
        !self.types.is_empty()
    }

    /// Adds resources to the transfer, registering the resource types once.
    pub fn add_resources(&mut self, resources: impl IntoIterator<Item = PathBuf>) {
        let before = self.resources.len();
        self.resources.extend(resources);
        if self.resources.len() == before {
            return;
        }
        for ty in [RESOURCE_URLS_TYPE, URI_LIST_TYPE] {
            if !self.types.iter().any(|t| t == ty) {
                self.types.push(ty.to_string());
            }
        }
    }
}

/// A drag event delivered to a drop target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragEvent {
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
    /// Platform data attached to the drag, if the platform exposed any
    pub data: Option<DataTransfer>,
}

impl DragEvent {
    /// Creates a drag event with no data and no modifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a drag event carrying platform data.
    pub fn with_data(data: DataTransfer) -> Self {
        Self {
            modifiers: Modifiers::default(),
            data: Some(data),
        }
    }

    /// Returns the event with the given modifiers held.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns true if the platform data carries at least one type.
    pub fn has_external_data(&self) -> bool {
        self.data.as_ref().is_some_and(DataTransfer::has_types)
    }
}
