//! Constructive heuristics for building TSP tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor extension, O(n²)
//! - [`nearest_neighbor_with`] — Same, with an explicit edge weight [`Rounding`](crate::distance::Rounding)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_with};
