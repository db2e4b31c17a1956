//! Domain layer: pure, synchronous graph types and rules.

pub mod error;
pub mod graph;
pub mod traits;
