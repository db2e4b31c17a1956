//! Usecase layer: graph building and analysis workflows + events.

pub mod analyze;
pub mod build;
pub mod event;
pub mod stats;
pub mod validate;
