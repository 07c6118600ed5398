//! Test support: snapshot helpers and fixture widgets.

pub mod fixture;
pub mod snapshot;

pub use fixture::Filler;
pub use snapshot::{canvas_to_string, draw_to_string};
