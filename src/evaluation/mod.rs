//! Tour evaluation.
//!
//! Recomputes edge weights and checks a tour for completeness, closure,
//! weight consistency and greedy locality.

mod evaluator;

pub use evaluator::{TourEvaluator, Violation, ViolationType};
