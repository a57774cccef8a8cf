//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the chosen city, always move to the
//! nearest unvisited city, then return to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Tours are typically
//! around 25% above optimal on random Euclidean instances.

use std::collections::HashSet;

use crate::distance::Rounding;
use crate::error::{Error, Result};
use crate::models::{Node, Tour};

/// Constructs a closed tour using the nearest-neighbor heuristic with exact
/// (unrounded) edge weights.
///
/// See [`nearest_neighbor_with`] for the full contract.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Node;
/// use nn_tour::constructive::nearest_neighbor;
///
/// let nodes = vec![
///     Node::new(1, 0.0, 0.0),
///     Node::new(2, 3.0, 0.0),
///     Node::new(3, 3.0, 4.0),
/// ];
/// let tour = nearest_neighbor(&nodes, 1).unwrap();
/// assert_eq!(tour.node_ids(), vec![1, 2, 3, 1]);
/// assert_eq!(tour.total_distance(), 12.0);
/// ```
pub fn nearest_neighbor(nodes: &[Node], start_id: usize) -> Result<Tour> {
    nearest_neighbor_with(nodes, start_id, Rounding::Exact)
}

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// Starting from the node whose id is `start_id`, repeatedly appends the
/// unvisited node with the smallest edge weight to the current end of the
/// tour. Candidates are scanned in input order and only a strictly smaller
/// weight replaces the current best, so ties go to the earliest node.
/// Finally the tour is closed with an edge back to the start.
///
/// # Arguments
///
/// * `nodes` — All cities, in ingestion order
/// * `start_id` — ID of the city the tour starts and ends at
/// * `rounding` — Policy applied to every edge weight, including comparisons
///
/// # Errors
///
/// * [`Error::UnknownStartId`] if no node has `start_id`
/// * [`Error::DuplicateId`] if two nodes share an id
///
/// An empty `nodes` slice yields an empty tour rather than an error.
pub fn nearest_neighbor_with(nodes: &[Node], start_id: usize, rounding: Rounding) -> Result<Tour> {
    if nodes.is_empty() {
        log::debug!("nearest_neighbor: empty input, returning empty tour");
        return Ok(Tour::new());
    }
    let start_idx = validate(nodes, start_id)?;
    log::debug!(
        "nearest_neighbor: n={} start_id={start_id} rounding={rounding:?}",
        nodes.len()
    );

    let n = nodes.len();
    let mut visited = vec![false; n];
    visited[start_idx] = true;

    let mut tour = Tour::new();
    tour.push(nodes[start_idx], 0.0);
    let mut current = nodes[start_idx];

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for (i, node) in nodes.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let w = rounding.weight(&current, node);
            if best.map_or(true, |(_, best_w)| w < best_w) {
                best = Some((i, w));
            }
        }

        // n - 1 iterations over n - 1 unvisited nodes, so one always remains.
        let Some((next, w)) = best else { break };
        visited[next] = true;
        current = nodes[next];
        log::trace!("nearest_neighbor: visit id={} weight={w}", current.id());
        tour.push(current, w);
    }

    let start = nodes[start_idx];
    let closing = tour
        .last()
        .map(|last| rounding.weight(last, &start))
        .unwrap_or(0.0);
    tour.close(closing);

    log::debug!(
        "nearest_neighbor: done cities={} total_distance={}",
        tour.num_cities(),
        tour.total_distance()
    );
    Ok(tour)
}

/// Checks id uniqueness and returns the index of the start node.
fn validate(nodes: &[Node], start_id: usize) -> Result<usize> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id()) {
            return Err(Error::DuplicateId(node.id()));
        }
    }
    nodes
        .iter()
        .position(|n| n.id() == start_id)
        .ok_or(Error::UnknownStartId(start_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Node> {
        vec![
            Node::new(1, 0.0, 0.0),
            Node::new(2, 3.0, 0.0),
            Node::new(3, 3.0, 4.0),
        ]
    }

    #[test]
    fn test_nn_triangle() {
        let tour = nearest_neighbor(&triangle(), 1).expect("valid input");
        assert_eq!(tour.node_ids(), vec![1, 2, 3, 1]);
        assert_eq!(tour.weights(), &[0.0, 3.0, 4.0, 5.0]);
        assert!((tour.total_distance() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_empty() {
        let tour = nearest_neighbor(&[], 1).expect("empty is fine");
        assert!(tour.is_empty());
        assert!(tour.weights().is_empty());
        assert_eq!(tour.total_distance(), 0.0);
    }

    #[test]
    fn test_nn_single_city() {
        let tour = nearest_neighbor(&[Node::new(1, 0.0, 0.0)], 1).expect("valid input");
        assert_eq!(tour.node_ids(), vec![1, 1]);
        assert_eq!(tour.weights(), &[0.0, 0.0]);
        assert_eq!(tour.total_distance(), 0.0);
    }

    #[test]
    fn test_nn_unknown_start() {
        let err = nearest_neighbor(&triangle(), 9).unwrap_err();
        assert!(matches!(err, Error::UnknownStartId(9)));
    }

    #[test]
    fn test_nn_single_city_unknown_start() {
        let err = nearest_neighbor(&[Node::new(1, 0.0, 0.0)], 2).unwrap_err();
        assert!(matches!(err, Error::UnknownStartId(2)));
    }

    #[test]
    fn test_nn_duplicate_id() {
        let nodes = vec![
            Node::new(1, 0.0, 0.0),
            Node::new(2, 1.0, 0.0),
            Node::new(2, 5.0, 0.0),
        ];
        let err = nearest_neighbor(&nodes, 1).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(2)));
    }

    #[test]
    fn test_nn_start_not_first_in_input() {
        let tour = nearest_neighbor(&triangle(), 3).expect("valid input");
        // From (3,4): node 2 is 4 away, node 1 is 5 away.
        assert_eq!(tour.node_ids(), vec![3, 2, 1, 3]);
        assert_eq!(tour.weights(), &[0.0, 4.0, 3.0, 5.0]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let nodes = vec![
            Node::new(1, 0.0, 0.0),
            Node::new(2, 10.0, 0.0), // far
            Node::new(3, 1.0, 0.0),  // near
        ];
        let tour = nearest_neighbor(&nodes, 1).expect("valid input");
        assert_eq!(tour.node_ids(), vec![1, 3, 2, 1]);
        assert_eq!(tour.weights(), &[0.0, 1.0, 9.0, 10.0]);
    }

    #[test]
    fn test_nn_tie_goes_to_first_encountered() {
        let nodes = vec![
            Node::new(1, 0.0, 0.0),
            Node::new(7, -2.0, 0.0),
            Node::new(4, 2.0, 0.0),
            Node::new(5, 0.0, 2.0),
        ];
        let tour = nearest_neighbor(&nodes, 1).expect("valid input");
        assert_eq!(tour.node_ids()[1], 7);

        let reordered = vec![nodes[0], nodes[3], nodes[2], nodes[1]];
        let tour = nearest_neighbor(&reordered, 1).expect("valid input");
        assert_eq!(tour.node_ids()[1], 5);
    }

    #[test]
    fn test_nn_rounding_changes_choice() {
        // Exact: node 2 at 1.9 beats node 3 at 1.95.
        // Truncated both weigh 1, so input order decides and node 3 comes first.
        let nodes = vec![
            Node::new(1, 0.0, 0.0),
            Node::new(3, 1.95, 0.0),
            Node::new(2, -1.9, 0.0),
        ];
        let exact = nearest_neighbor_with(&nodes, 1, Rounding::Exact).expect("valid input");
        assert_eq!(exact.node_ids()[1], 2);

        let truncated = nearest_neighbor_with(&nodes, 1, Rounding::Truncate).expect("valid input");
        assert_eq!(truncated.node_ids()[1], 3);
        assert!(truncated.weights().iter().all(|w| w.fract() == 0.0));
    }

    #[test]
    fn test_nn_total_matches_weights() {
        let nodes: Vec<Node> = (0..20)
            .map(|i| Node::new(i, (i * 7 % 11) as f64, (i * 3 % 5) as f64 * 1.5))
            .collect();
        let tour = nearest_neighbor(&nodes, 0).expect("valid input");
        let sum: f64 = tour.weights().iter().sum();
        assert!((tour.total_distance() - sum).abs() < 1e-9);
        assert_eq!(tour.len(), nodes.len() + 1);
    }

    #[test]
    fn test_nn_line() {
        let nodes = vec![
            Node::new(1, 0.0, 0.0),
            Node::new(2, 1.0, 0.0),
            Node::new(3, 2.0, 0.0),
            Node::new(4, 3.0, 0.0),
        ];
        let tour = nearest_neighbor(&nodes, 1).expect("valid input");
        assert_eq!(tour.node_ids(), vec![1, 2, 3, 4, 1]);
        // 1 + 1 + 1 + 3
        assert!((tour.total_distance() - 6.0).abs() < 1e-10);
    }
}
