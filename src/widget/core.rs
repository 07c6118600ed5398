//! Common widget state.
//!
//! [`WidgetCore`] holds the geometry and visibility every widget carries:
//! absolute origin, allocation, size request, and the visible flag. Concrete
//! widgets embed one and delegate the accessor half of the [`Widget`] trait
//! to it. It also owns the widget's `resize` listeners, the explicit
//! callback registration that stands in for a toolkit-wide signal bus.
//!
//! [`Widget`]: super::Widget

use slotmap::new_key_type;

use crate::event::Listeners;
use crate::geometry::{Offset, Region, Size};

new_key_type! {
    /// Stable identity for a child widget within its container's arena.
    pub struct WidgetId;
}

// ---------------------------------------------------------------------------
// WidgetCore
// ---------------------------------------------------------------------------

/// Geometry, visibility, and resize notification state shared by all widgets.
///
/// Widgets start hidden, with an unconstrained (−1, −1) size request and an
/// empty allocation; containers only lay out visible children.
pub struct WidgetCore {
    origin: Offset,
    allocation: Size,
    size_request: Size,
    visible: bool,
    resize_listeners: Listeners<Region>,
}

impl WidgetCore {
    /// Create widget state with default geometry, hidden.
    pub fn new() -> Self {
        Self {
            origin: Offset::new(0, 0),
            allocation: Size::ZERO,
            size_request: Size::new(-1, -1),
            visible: false,
            resize_listeners: Listeners::new(),
        }
    }

    /// The widget's absolute origin.
    pub fn origin(&self) -> Offset {
        self.origin
    }

    /// Move the widget to a new absolute origin.
    pub fn set_origin(&mut self, origin: Offset) {
        self.origin = origin;
    }

    /// The widget's current allocation.
    pub fn allocation(&self) -> Size {
        self.allocation
    }

    /// Store a new allocation; negative dimensions clamp to zero.
    pub fn set_allocation(&mut self, size: Size) {
        self.allocation = size.floor();
    }

    /// The widget's natural size request; −1 on an axis means unconstrained.
    pub fn size_request(&self) -> Size {
        self.size_request
    }

    /// Replace the size request.
    pub fn set_size_request(&mut self, request: Size) {
        self.size_request = request;
    }

    /// The widget's absolute extent: allocation at origin.
    pub fn region(&self) -> Region {
        self.allocation.at(self.origin)
    }

    /// Whether the widget participates in layout and drawing.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mark the widget visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Mark the widget hidden.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Register a callback for resize announcements under `handle`.
    pub fn connect_resize(&mut self, handle: &str, callback: impl FnMut(&Region) + 'static) {
        self.resize_listeners.connect(handle, callback);
    }

    /// Remove the resize callback registered under `handle`.
    pub fn disconnect_resize(&mut self, handle: &str) -> bool {
        self.resize_listeners.disconnect(handle)
    }

    /// Announce the widget's current extent to resize listeners.
    pub fn emit_resize(&mut self) {
        let region = self.region();
        self.resize_listeners.emit(&region);
    }
}

impl Default for WidgetCore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetCore")
            .field("origin", &self.origin)
            .field("allocation", &self.allocation)
            .field("size_request", &self.size_request)
            .field("visible", &self.visible)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
