//! Tour evaluator that recomputes weights and checks tour structure.

use std::collections::HashMap;

use crate::distance::Rounding;
use crate::models::{Node, Tour};

const TOLERANCE: f64 = 1e-9;

/// A type of defect found in a tour.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// `path` and `weights` have different lengths.
    LengthMismatch {
        /// Number of path entries.
        path_len: usize,
        /// Number of weight entries.
        weights_len: usize,
    },
    /// The tour does not start at the requested node.
    WrongStart {
        /// Requested start id.
        expected: usize,
        /// ID found at the head of the path.
        actual: usize,
    },
    /// The last path entry differs from the first.
    NotClosed {
        /// ID at the head of the path.
        first: usize,
        /// ID at the tail of the path.
        last: usize,
    },
    /// An input node never appears in the tour.
    MissingNode {
        /// ID of the missing node.
        id: usize,
    },
    /// A node appears more often than allowed.
    RepeatedNode {
        /// ID of the repeated node.
        id: usize,
    },
    /// The tour contains a node that is not part of the input.
    UnknownNode {
        /// ID of the unexpected node.
        id: usize,
    },
    /// A stored edge weight differs from the recomputed one.
    WeightMismatch {
        /// Index into `weights`.
        index: usize,
        /// Recomputed weight.
        expected: f64,
        /// Stored weight.
        actual: f64,
    },
    /// The stored total differs from the sum of the weights.
    TotalMismatch {
        /// Sum of stored weights.
        expected: f64,
        /// Stored total.
        actual: f64,
    },
    /// A closer unvisited node was available than the one chosen.
    NotNearest {
        /// Path index of the chosen node.
        index: usize,
        /// ID of the node that was chosen.
        chosen: usize,
        /// ID of a strictly closer candidate.
        closer: usize,
    },
}

/// A defect found in a tour.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Checks a tour against the nodes it was built from.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Node;
/// use nn_tour::distance::Rounding;
/// use nn_tour::constructive::nearest_neighbor;
/// use nn_tour::evaluation::TourEvaluator;
///
/// let nodes = vec![
///     Node::new(1, 0.0, 0.0),
///     Node::new(2, 3.0, 0.0),
///     Node::new(3, 3.0, 4.0),
/// ];
/// let tour = nearest_neighbor(&nodes, 1).unwrap();
///
/// let evaluator = TourEvaluator::new(&nodes, Rounding::Exact);
/// let (total, violations) = evaluator.evaluate(&tour, 1);
/// assert!((total - 12.0).abs() < 1e-10);
/// assert!(violations.is_empty());
/// assert!(evaluator.greedy_violations(&tour).is_empty());
/// ```
pub struct TourEvaluator<'a> {
    nodes: &'a [Node],
    rounding: Rounding,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator for the given input nodes.
    pub fn new(nodes: &'a [Node], rounding: Rounding) -> Self {
        Self { nodes, rounding }
    }

    /// Recomputes the tour length and checks its structure.
    ///
    /// Returns the recomputed total distance and every violation found.
    /// An empty tour is valid only for empty input.
    pub fn evaluate(&self, tour: &Tour, start_id: usize) -> (f64, Vec<Violation>) {
        let path = tour.path();
        let weights = tour.weights();
        let mut violations = Vec::new();

        if path.len() != weights.len() {
            violations.push(Violation::new(ViolationType::LengthMismatch {
                path_len: path.len(),
                weights_len: weights.len(),
            }));
        }

        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            for node in self.nodes {
                violations.push(Violation::new(ViolationType::MissingNode { id: node.id() }));
            }
            return (0.0, violations);
        };

        if first.id() != start_id {
            violations.push(Violation::new(ViolationType::WrongStart {
                expected: start_id,
                actual: first.id(),
            }));
        }
        let closed = first == last && path.len() >= 2;
        if !closed {
            violations.push(Violation::new(ViolationType::NotClosed {
                first: first.id(),
                last: last.id(),
            }));
        }

        // The closing entry repeats the start and is not counted.
        let body = if closed { &path[..path.len() - 1] } else { path };
        self.check_membership(body, &mut violations);

        // Weights
        let mut recomputed = 0.0;
        if let Some(&w0) = weights.first() {
            if w0 != 0.0 {
                violations.push(Violation::new(ViolationType::WeightMismatch {
                    index: 0,
                    expected: 0.0,
                    actual: w0,
                }));
            }
        }
        for (i, pair) in path.windows(2).enumerate() {
            let expected = self.rounding.weight(&pair[0], &pair[1]);
            recomputed += expected;
            if let Some(&actual) = weights.get(i + 1) {
                if !approx_eq(expected, actual) {
                    violations.push(Violation::new(ViolationType::WeightMismatch {
                        index: i + 1,
                        expected,
                        actual,
                    }));
                }
            }
        }

        let stored_sum: f64 = weights.iter().sum();
        if !approx_eq(stored_sum, tour.total_distance()) {
            violations.push(Violation::new(ViolationType::TotalMismatch {
                expected: stored_sum,
                actual: tour.total_distance(),
            }));
        }

        (recomputed, violations)
    }

    /// Checks that every step picked the nearest unvisited node.
    ///
    /// Only strictly closer alternatives are reported, so any tie-break is
    /// accepted. The closing edge is not a choice and is not checked.
    pub fn greedy_violations(&self, tour: &Tour) -> Vec<Violation> {
        let path = tour.path();
        let mut violations = Vec::new();
        let Some(start) = path.first() else {
            return violations;
        };

        let mut unvisited: Vec<Node> = self
            .nodes
            .iter()
            .filter(|n| n.id() != start.id())
            .copied()
            .collect();

        let steps = path.len().saturating_sub(1);
        for i in 1..steps {
            let prev = &path[i - 1];
            let chosen = &path[i];
            let chosen_w = self.rounding.weight(prev, chosen);
            let closer = unvisited.iter().find(|n| {
                n.id() != chosen.id() && self.rounding.weight(prev, n) < chosen_w - TOLERANCE
            });
            if let Some(closer) = closer {
                violations.push(Violation::new(ViolationType::NotNearest {
                    index: i,
                    chosen: chosen.id(),
                    closer: closer.id(),
                }));
            }
            unvisited.retain(|n| n.id() != chosen.id());
        }

        violations
    }

    /// Returns `true` if the tour has no structural or greedy violations.
    pub fn is_valid(&self, tour: &Tour, start_id: usize) -> bool {
        self.evaluate(tour, start_id).1.is_empty() && self.greedy_violations(tour).is_empty()
    }

    fn check_membership(&self, body: &[Node], violations: &mut Vec<Violation>) {
        let mut counts: HashMap<usize, usize> = HashMap::with_capacity(body.len());
        for node in body {
            *counts.entry(node.id()).or_insert(0) += 1;
        }

        for node in self.nodes {
            match counts.remove(&node.id()) {
                None => violations.push(Violation::new(ViolationType::MissingNode { id: node.id() })),
                Some(c) if c > 1 => {
                    violations.push(Violation::new(ViolationType::RepeatedNode { id: node.id() }))
                }
                Some(_) => {}
            }
        }

        let mut unknown: Vec<usize> = counts.into_keys().collect();
        unknown.sort_unstable();
        for id in unknown {
            violations.push(Violation::new(ViolationType::UnknownNode { id }));
        }
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}
