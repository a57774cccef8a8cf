//! Distance policy.
//!
//! Node-to-node distance is plain Euclidean; [`Rounding`] decides how that
//! distance becomes an edge weight.

mod rounding;

pub use rounding::Rounding;
