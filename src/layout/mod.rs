//! Space allocation arithmetic and the box-packing engine.

pub mod engine;
pub mod space;

pub use engine::{aggregate_request, compute_placements, BoxLayout, PackRequest, PackType, Placement};
pub use space::{distribute, solve_space_alloc, DistributeError};
