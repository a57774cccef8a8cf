//! Text rendering of tours.

use std::fmt;

use crate::models::Tour;

/// One `EDGE <from> -> <to> | WEIGHT : <w>` line per edge in path order,
/// followed by `TOTAL DISTANCE: <total>`.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges() {
            writeln!(
                f,
                "EDGE {} -> {} | WEIGHT : {}",
                edge.from.id(),
                edge.to.id(),
                edge.weight
            )?;
        }
        writeln!(f, "TOTAL DISTANCE: {}", self.total_distance())
    }
}

#[cfg(test)]
mod tests {
    use crate::constructive::nearest_neighbor;
    use crate::models::{Node, Tour};

    #[test]
    fn test_display_triangle() {
        let nodes = [
            Node::new(1, 0.0, 0.0),
            Node::new(2, 3.0, 0.0),
            Node::new(3, 3.0, 4.0),
        ];
        let tour = nearest_neighbor(&nodes, 1).expect("valid input");
        let expected = "\
EDGE 1 -> 2 | WEIGHT : 3
EDGE 2 -> 3 | WEIGHT : 4
EDGE 3 -> 1 | WEIGHT : 5
TOTAL DISTANCE: 12
";
        assert_eq!(tour.to_string(), expected);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Tour::new().to_string(), "TOTAL DISTANCE: 0\n");
    }

    #[test]
    fn test_display_single_city() {
        let tour = nearest_neighbor(&[Node::new(7, 1.0, 1.0)], 7).expect("valid input");
        assert_eq!(
            tour.to_string(),
            "EDGE 7 -> 7 | WEIGHT : 0\nTOTAL DISTANCE: 0\n"
        );
    }

    #[test]
    fn test_display_fractional_weight() {
        let nodes = [Node::new(1, 0.0, 0.0), Node::new(2, 0.5, 0.0)];
        let tour = nearest_neighbor(&nodes, 1).expect("valid input");
        assert!(tour.to_string().contains("EDGE 1 -> 2 | WEIGHT : 0.5\n"));
        assert!(tour.to_string().ends_with("TOTAL DISTANCE: 1\n"));
    }
}
