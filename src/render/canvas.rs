//! Off-screen drawing canvases.
//!
//! Every parent/child widget pair draws through a private [`Canvas`]: the
//! child paints into its own canvas, and the parent composites that canvas
//! into its own at the child's relative origin, clipped to the parent's
//! bounds. A canvas's origin is always expressed relative to its *direct*
//! parent, never in absolute screen coordinates, so a whole subtree moves by
//! updating only the root widget's absolute origin.

use thiserror::Error;

use crate::geometry::{Offset, Region, Size};

use super::cell::{Cell, CellStyle, Theme};

// ---------------------------------------------------------------------------
// CanvasError
// ---------------------------------------------------------------------------

/// A compositing or cell-access failure.
///
/// These are logged by callers and never propagate past a widget's `draw`;
/// a failed composite degrades one child visually and leaves siblings alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("cell ({x}, {y}) is outside the canvas")]
    OutOfBounds { x: i32, y: i32 },
    #[error("canvas at ({x}, {y}) sized {width}x{height} does not intersect its parent")]
    Disjoint { x: i32, y: i32, width: i32, height: i32 },
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// An off-screen cell buffer with an origin relative to its parent canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    origin: Offset,
    size: Size,
    /// `cells[y][x]` is the cell at column x, row y.
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    /// Create a canvas at `origin` (parent-relative), cleared to a blank
    /// styled cell.
    pub fn new(origin: Offset, size: Size, style: CellStyle) -> Self {
        let size = size.floor();
        Self {
            origin,
            size,
            cells: Self::blank_cells(size, style),
        }
    }

    /// The canvas origin, relative to the direct parent.
    pub fn origin(&self) -> Offset {
        self.origin
    }

    /// Reposition the canvas relative to its parent.
    pub fn set_origin(&mut self, origin: Offset) {
        self.origin = origin;
    }

    /// The canvas dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The canvas extent as a parent-relative [`Region`].
    pub fn region(&self) -> Region {
        self.size.at(self.origin)
    }

    /// Resize the buffer, clearing it to a blank cell in `style`.
    ///
    /// Passing the current size is a no-op that preserves content, so
    /// containers may call this unconditionally on every layout pass.
    pub fn resize(&mut self, size: Size, style: CellStyle) {
        let size = size.floor();
        if size == self.size {
            return;
        }
        self.size = size;
        self.cells = Self::blank_cells(size, style);
    }

    /// Fill every cell with the theme's fill rune and content style.
    pub fn fill(&mut self, theme: &Theme) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = Cell::new(theme.fill, theme.content.clone());
            }
        }
    }

    /// The cell at (x, y), or `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// Write one rune at (x, y).
    pub fn set_rune(&mut self, x: i32, y: i32, ch: char, style: CellStyle) -> Result<(), CanvasError> {
        if !self.size.contains(x, y) {
            return Err(CanvasError::OutOfBounds { x, y });
        }
        self.cells[y as usize][x as usize] = Cell::new(ch, style);
        Ok(())
    }

    /// Merge `child`'s cells into this canvas at the child's relative origin,
    /// clipped to this canvas's bounds.
    ///
    /// A zero-sized child is a no-op. A child positioned entirely outside
    /// this canvas is reported as [`CanvasError::Disjoint`].
    pub fn composite(&mut self, child: &Canvas) -> Result<(), CanvasError> {
        if child.size.is_empty() {
            return Ok(());
        }
        let own = self.size.at(Offset::new(0, 0));
        let overlap = child.region().intersection(own);
        if overlap == Region::EMPTY {
            let region = child.region();
            return Err(CanvasError::Disjoint {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
            });
        }
        for y in overlap.y..overlap.bottom() {
            for x in overlap.x..overlap.right() {
                let cell = child.cells[(y - child.origin.y) as usize][(x - child.origin.x) as usize].clone();
                self.cells[y as usize][x as usize] = cell;
            }
        }
        Ok(())
    }

    fn blank_cells(size: Size, style: CellStyle) -> Vec<Vec<Cell>> {
        (0..size.height.max(0) as usize)
            .map(|_| {
                (0..size.width.max(0) as usize)
                    .map(|_| Cell::blank_styled(style.clone()))
                    .collect()
            })
            .collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
