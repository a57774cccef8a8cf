//! Edge weight rounding policy.

use crate::models::Node;

/// How a raw Euclidean distance is turned into an edge weight.
///
/// The greedy comparison in the builder is made on the rounded weight, so
/// the policy can change which neighbor wins.
///
/// # Examples
///
/// ```
/// use nn_tour::distance::Rounding;
///
/// assert_eq!(Rounding::Exact.apply(2.7), 2.7);
/// assert_eq!(Rounding::Truncate.apply(2.7), 2.0);
/// assert_eq!(Rounding::Nearest.apply(2.5), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Keep the floating-point distance as is.
    #[default]
    Exact,
    /// Drop the fractional part (integral accumulator semantics).
    Truncate,
    /// Round to the nearest integer, halves away from zero (TSPLIB `EUC_2D`).
    Nearest,
}

impl Rounding {
    /// Applies this policy to a raw distance.
    pub fn apply(self, d: f64) -> f64 {
        match self {
            Self::Exact => d,
            Self::Truncate => d.trunc(),
            Self::Nearest => d.round(),
        }
    }

    /// Weight of the edge between two nodes under this policy.
    pub fn weight(self, from: &Node, to: &Node) -> f64 {
        self.apply(from.distance(to))
    }
}
