//! # nn-tour
//!
//! Nearest-neighbor tour construction for the Euclidean traveling salesman
//! problem over TSPLIB-style 2D coordinate files.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Tour, Edge)
//! - [`distance`] — Edge weight rounding policy
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`evaluation`] — Tour structure and greedy-choice checking
//! - [`io`] — Instance file ingestion
//! - [`options`] / [`logging`] — Command-line configuration and logger setup
//!
//! Tours render as `EDGE` lines through their [`Display`](std::fmt::Display) impl.

pub mod constructive;
mod display;
pub mod distance;
mod error;
pub mod evaluation;
pub mod io;
pub mod logging;
pub mod models;
pub mod options;

pub use error::{Error, Result};
