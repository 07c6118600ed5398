//! Widget trait and common widget state.

pub mod core;
pub mod traits;

pub use core::{WidgetCore, WidgetId};
pub use traits::Widget;
