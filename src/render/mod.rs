//! Cells, themes, off-screen canvases, and per-child surfaces.

pub mod canvas;
pub mod cell;
pub mod surface;

pub use canvas::{Canvas, CanvasError};
pub use cell::{Cell, CellStyle, Theme};
pub use surface::SurfaceSet;
