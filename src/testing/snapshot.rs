//! Snapshot rendering helpers.
//!
//! Converts canvases into plain-text strings for snapshot testing and
//! assertions: each canvas row becomes one line with trailing spaces
//! trimmed, and rows are joined with `'\n'`.

use crate::geometry::{Offset, Size};
use crate::render::{Canvas, CellStyle};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert a canvas's cells to a plain text string.
pub fn canvas_to_string(canvas: &Canvas) -> String {
    let size = canvas.size();
    if size.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(size.height as usize);
    for y in 0..size.height {
        let mut row = String::with_capacity(size.width as usize);
        for x in 0..size.width {
            match canvas.get(x, y) {
                Some(cell) => row.push(cell.ch),
                None => row.push(' '),
            }
        }
        lines.push(row.trim_end().to_owned());
    }
    lines.join("\n")
}

/// Lay out and draw a widget at `width` x `height`, returning the text.
///
/// The widget is shown, allocated the full region at the origin, resized,
/// and drawn into a fresh canvas.
///
/// # Examples
///
/// ```
/// use coffer_tui::testing::{draw_to_string, Filler};
///
/// let output = draw_to_string(&mut Filler::new('#'), 4, 2);
/// assert_eq!(output, "####\n####");
/// ```
pub fn draw_to_string(widget: &mut dyn Widget, width: i32, height: i32) -> String {
    widget.show_all();
    widget.set_origin(Offset::new(0, 0));
    widget.set_allocation(Size::new(width, height));
    widget.resize();

    let mut canvas =
        Canvas::new(Offset::new(0, 0), Size::new(width, height), CellStyle::default());
    widget.draw(&mut canvas);
    canvas_to_string(&canvas)
}

// ===========================================================================
// Tests
// ===========================================================================
