//! The Widget trait.
//!
//! Rather than mirroring a deep inheritance chain, coffer-tui keeps one
//! object-safe trait whose accessor half delegates to an embedded
//! [`WidgetCore`]. Concrete widgets implement `core`/`core_mut` plus the two
//! active operations, `resize` and `draw`. The optional alignment capability
//! is a defaulted method: a widget that does not override it has no
//! alignment, and layout slack trails it.
//!
//! Resize and draw are strictly sequential and synchronous: `resize` recurses
//! into children depth-first (parent first), `draw` composites child surfaces
//! bottom-up into ancestor canvases, and both always run to completion.
//! Rust's `&mut` exclusivity provides the per-widget mutual exclusion between
//! external resize and draw callers.

use crate::event::EventFlag;
use crate::geometry::{Offset, Size};
use crate::render::Canvas;

use super::core::WidgetCore;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every widget.
///
/// `resize` and `draw` return an [`EventFlag`], never an error: layout and
/// compositing failures degrade visually and are logged where they happen.
pub trait Widget {
    /// The common state embedded in this widget.
    fn core(&self) -> &WidgetCore;

    /// Mutable access to the common state.
    fn core_mut(&mut self) -> &mut WidgetCore;

    /// Recompute this widget's internal layout for its current allocation.
    ///
    /// Containers recurse into their children, parent first.
    fn resize(&mut self) -> EventFlag;

    /// Paint this widget into `canvas`.
    ///
    /// The canvas is the widget's own surface, sized to its allocation;
    /// containers composite it into their own canvas afterwards.
    fn draw(&mut self, canvas: &mut Canvas) -> EventFlag;

    /// The widget's natural size request; −1 on an axis means unconstrained.
    fn size_request(&self) -> Size {
        self.core().size_request()
    }

    /// The widget's absolute origin.
    fn origin(&self) -> Offset {
        self.core().origin()
    }

    /// Move the widget to a new absolute origin.
    fn set_origin(&mut self, origin: Offset) {
        self.core_mut().set_origin(origin);
    }

    /// The widget's current allocation.
    fn allocation(&self) -> Size {
        self.core().allocation()
    }

    /// Store a new allocation; negative dimensions clamp to zero.
    fn set_allocation(&mut self, size: Size) {
        self.core_mut().set_allocation(size);
    }

    /// Whether the widget participates in layout and drawing.
    fn is_visible(&self) -> bool {
        self.core().is_visible()
    }

    /// Mark the widget visible.
    fn show(&mut self) {
        self.core_mut().show();
    }

    /// Mark the widget hidden.
    fn hide(&mut self) {
        self.core_mut().hide();
    }

    /// Mark this widget and all of its children visible.
    ///
    /// Leaf widgets show only themselves; containers override to recurse.
    fn show_all(&mut self) {
        self.show();
    }

    /// Optional alignment capability: `(x, y)` fractions in `[0, 1]`.
    ///
    /// `None` means the widget has no alignment and layout slack trails it.
    fn alignment(&self) -> Option<(f64, f64)> {
        None
    }
}

// ===========================================================================
// Tests
// ===========================================================================
