//! Instance ingestion.

mod tsplib;

pub use tsplib::{parse_instance, read_instance, read_nodes, Instance, NODE_COORD_SECTION};
