//! Built-in containers exercising the layout and compositing core.

pub mod packed_box;
pub mod scrollbar;
pub mod scrolled_viewport;

pub use packed_box::PackedBox;
pub use scrollbar::Scrollbar;
pub use scrolled_viewport::ScrolledViewport;
