//! City node type.

use serde::{Deserialize, Serialize};

/// A city in a TSP instance.
///
/// Nodes are small immutable records copied by value between the working
/// set of a builder and the tour it produces.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Node;
///
/// let a = Node::new(1, 0.0, 0.0);
/// let b = Node::new(2, 3.0, 4.0);
/// assert_eq!(b.id(), 2);
/// assert!((a.distance(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Node ID, unique within an instance.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another node.
    pub fn distance(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
