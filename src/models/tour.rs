//! Tour and edge types.

use serde::{Deserialize, Serialize};

use super::Node;

/// A weighted step between two consecutive nodes of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Node the edge leaves.
    pub from: Node,
    /// Node the edge enters.
    pub to: Node,
    /// Weight of the edge.
    pub weight: f64,
}

/// A closed walk that visits every city once and returns to its start.
///
/// `path` holds the visit order with the start node repeated at the end.
/// `weights` is aligned with `path`: `weights[0]` is a zero sentinel and
/// `weights[i]` is the weight of the edge `path[i-1] -> path[i]`.
///
/// Tours are produced by the constructive heuristics and are read-only to
/// callers.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Node;
/// use nn_tour::constructive::nearest_neighbor;
///
/// let nodes = [Node::new(1, 0.0, 0.0), Node::new(2, 3.0, 0.0), Node::new(3, 3.0, 4.0)];
/// let tour = nearest_neighbor(&nodes, 1).unwrap();
/// assert_eq!(tour.node_ids(), vec![1, 2, 3, 1]);
/// assert_eq!(tour.weights(), &[0.0, 3.0, 4.0, 5.0]);
/// assert_eq!(tour.total_distance(), 12.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    path: Vec<Node>,
    weights: Vec<f64>,
    total_distance: f64,
}

impl Tour {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            weights: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Appends a node reached over an edge of the given weight.
    pub(crate) fn push(&mut self, node: Node, weight: f64) {
        self.path.push(node);
        self.weights.push(weight);
        self.total_distance += weight;
    }

    /// Returns to the start node over an edge of the given weight.
    ///
    /// Does nothing on an empty tour.
    pub(crate) fn close(&mut self, weight: f64) {
        if let Some(&start) = self.path.first() {
            self.push(start, weight);
        }
    }

    /// Last node appended so far.
    pub(crate) fn last(&self) -> Option<&Node> {
        self.path.last()
    }

    /// The visit order, start node first and last.
    pub fn path(&self) -> &[Node] {
        &self.path
    }

    /// Edge weights aligned with [`path`](Self::path).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all edge weights, including the closing edge.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of entries in the path (cities + 1 for a closed tour).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the tour has no nodes.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of distinct cities visited.
    pub fn num_cities(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The start node, if any.
    pub fn start(&self) -> Option<&Node> {
        self.path.first()
    }

    /// Node IDs in path order.
    pub fn node_ids(&self) -> Vec<usize> {
        self.path.iter().map(|n| n.id()).collect()
    }

    /// Consecutive edges in path order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.path
            .windows(2)
            .zip(self.weights.iter().skip(1))
            .map(|(pair, &weight)| Edge {
                from: pair[0],
                to: pair[1],
                weight,
            })
    }
}
