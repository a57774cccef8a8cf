use std::path::PathBuf;

use nn_tour::constructive::{nearest_neighbor, nearest_neighbor_with};
use nn_tour::distance::Rounding;
use nn_tour::evaluation::TourEvaluator;
use nn_tour::io::{read_instance, read_nodes};
use nn_tour::Error;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn triangle_file_to_text() {
    let nodes = read_nodes(data("triangle.tsp")).expect("readable fixture");
    let tour = nearest_neighbor(&nodes, 1).expect("valid input");
    assert_eq!(
        tour.to_string(),
        "EDGE 1 -> 2 | WEIGHT : 3\n\
         EDGE 2 -> 3 | WEIGHT : 4\n\
         EDGE 3 -> 1 | WEIGHT : 5\n\
         TOTAL DISTANCE: 12\n"
    );
}

#[test]
fn berlin8_exact() {
    let instance = read_instance(data("berlin8.tsp")).expect("readable fixture");
    assert_eq!(instance.name.as_deref(), Some("berlin8"));
    assert_eq!(instance.dimension, Some(instance.nodes.len()));

    let tour = nearest_neighbor(&instance.nodes, 1).expect("valid input");
    assert_eq!(tour.node_ids(), vec![1, 3, 8, 5, 6, 4, 7, 2, 1]);
    assert!((tour.total_distance() - 2902.2007957618575).abs() < 1e-6);

    let eval = TourEvaluator::new(&instance.nodes, Rounding::Exact);
    assert!(eval.is_valid(&tour, 1));
}

#[test]
fn berlin8_truncated_and_rounded() {
    let nodes = read_nodes(data("berlin8.tsp")).expect("readable fixture");

    let truncated = nearest_neighbor_with(&nodes, 1, Rounding::Truncate).expect("valid input");
    assert_eq!(
        truncated.weights(),
        &[0.0, 281.0, 308.0, 470.0, 35.0, 69.0, 1026.0, 45.0, 666.0]
    );
    assert_eq!(truncated.total_distance(), 2900.0);

    let rounded = nearest_neighbor_with(&nodes, 1, Rounding::Nearest).expect("valid input");
    assert_eq!(rounded.node_ids(), truncated.node_ids());
    assert_eq!(rounded.total_distance(), 2902.0);
}

#[test]
fn unknown_start_is_reported() {
    let nodes = read_nodes(data("triangle.tsp")).expect("readable fixture");
    let err = nearest_neighbor(&nodes, 42).unwrap_err();
    assert!(matches!(err, Error::UnknownStartId(42)));
}

#[test]
fn missing_file_is_an_input_error() {
    let err = read_nodes(data("no_such_file.tsp")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn tour_serializes_to_json() {
    let nodes = read_nodes(data("triangle.tsp")).expect("readable fixture");
    let tour = nearest_neighbor(&nodes, 1).expect("valid input");
    let json = serde_json::to_value(&tour).expect("serializable");
    assert_eq!(json["total_distance"], 12.0);
    assert_eq!(json["path"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["path"][3]["id"], 1);
}
