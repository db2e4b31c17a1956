//! Binary entrypoint.
//!
//! The crate is split into Clean Architecture layers:
//! - domain: graph arena, component result, validation errors
//! - usecase: graph building and analysis + progress events
//! - infrastructure: Tarjan detector, serde + async IO, schema validation
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    digraph_scc::interface::cli::run().await
}
