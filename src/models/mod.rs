//! Domain model types for the traveling salesman problem.
//!
//! Provides cities as immutable coordinate records and tours as closed,
//! weighted walks over them.

mod node;
mod tour;

pub use node::Node;
pub use tour::{Edge, Tour};
