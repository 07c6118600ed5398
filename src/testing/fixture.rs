//! Fixture widgets for exercising containers in tests.

use crate::event::EventFlag;
use crate::geometry::Size;
use crate::render::{Canvas, CellStyle};
use crate::widget::{Widget, WidgetCore};

// ---------------------------------------------------------------------------
// Filler
// ---------------------------------------------------------------------------

/// A leaf widget that paints a single rune across its whole canvas.
///
/// The rune makes composited output attributable: each child in a test fills
/// with a distinct character, so the final canvas shows exactly which widget
/// owns each cell.
pub struct Filler {
    core: WidgetCore,
    rune: char,
    alignment: Option<(f64, f64)>,
}

impl Filler {
    /// A filler with an unconstrained size request.
    pub fn new(rune: char) -> Self {
        Self { core: WidgetCore::new(), rune, alignment: None }
    }

    /// A filler with a fixed size request.
    pub fn sized(rune: char, width: i32, height: i32) -> Self {
        let mut filler = Self::new(rune);
        filler.core.set_size_request(Size::new(width, height));
        filler
    }

    /// Give this filler the alignment capability.
    pub fn with_alignment(mut self, x_align: f64, y_align: f64) -> Self {
        self.alignment = Some((x_align, y_align));
        self
    }

    /// The rune this filler paints with.
    pub fn rune(&self) -> char {
        self.rune
    }
}

impl Widget for Filler {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn resize(&mut self) -> EventFlag {
        self.core.emit_resize();
        EventFlag::Stop
    }

    fn draw(&mut self, canvas: &mut Canvas) -> EventFlag {
        if !self.core.is_visible() {
            return EventFlag::Pass;
        }
        let size = canvas.size();
        for y in 0..size.height {
            for x in 0..size.width {
                let _ = canvas.set_rune(x, y, self.rune, CellStyle::default());
            }
        }
        EventFlag::Stop
    }

    fn alignment(&self) -> Option<(f64, f64)> {
        self.alignment
    }
}

// ===========================================================================
// Tests
// ===========================================================================
