//! Strongly connected components of directed graphs.
//!
//! Layers:
//! - domain: graph arena, component result, validation errors, detector port
//! - usecase: graph builder + analyze workflow with progress events
//! - infrastructure: Tarjan detector, serde + async IO, schema validation, NDJSON events
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
