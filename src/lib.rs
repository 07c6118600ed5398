//! # coffer-tui
//!
//! A retained-mode layout and compositing core for terminal user interfaces.
//!
//! coffer-tui provides the box-packing, canvas-compositing, and scrolling
//! machinery a text-mode widget toolkit is built on: containers pack children
//! with expand/fill/padding semantics, every parent/child pair draws through a
//! private off-screen canvas composited into its parent, and scrollable
//! viewports translate child content coordinates into a bounded visible window
//! kept in sync with scrollbar sliders.
//!
//! ## Core Systems
//!
//! - **[`geometry`]** — Offset, Size, Region, Orientation primitives
//! - **[`event`]** — Event flags and callback listener registration
//! - **[`layout`]** — Space allocation arithmetic and the box-packing engine
//! - **[`widget`]** — Widget trait and common widget state
//! - **[`render`]** — Cells, themes, off-screen canvases, per-child surfaces
//! - **[`scroll`]** — Adjustments, viewport axis solving, slider geometry
//! - **[`widgets`]** — Built-in containers: PackedBox, Scrollbar, ScrolledViewport
//! - **[`testing`]** — Canvas-to-string helpers and fixture widgets for tests

// Foundation
pub mod geometry;

// Events and listeners
pub mod event;

// Layout arithmetic
pub mod layout;

// Widget system
pub mod widget;

// Rendering
pub mod render;

// Scrolling
pub mod scroll;

// Built-in containers
pub mod widgets;

// Test support
pub mod testing;
