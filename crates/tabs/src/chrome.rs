// Chunk: docs/chunks/content_tab_bar - Editor header chrome
//!
//! Header controls that sit next to the tab strips.

use crate::document::DocumentRef;
use crate::geometry::Dimension;

/// Height of the breadcrumbs bar below the tabs
pub const BREADCRUMBS_HEIGHT: f32 = 22.0;

/// The breadcrumbs bar shown under the tabs.
pub trait BreadcrumbsControl {
    /// Refreshes for the active document. Returns `true` if the bar was
    /// shown or hidden as a result.
    fn update(&mut self) -> bool;

    fn is_hidden(&self) -> bool;

    fn layout(&mut self, dimension: Dimension);
}

/// The editor actions toolbar at the end of the header.
pub trait EditorActionsToolbar {
    /// Refreshes the actions for the group's active document.
    fn update(&mut self, group_active: bool, active_document: Option<&DocumentRef>);

    /// Width the toolbar currently takes from the header.
    fn width(&self) -> f32;
}
