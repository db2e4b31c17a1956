use crate::usecase::analyze::GraphInput;
use anyhow::Result;

/// Size of a graph that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Checks that `input` describes a well-formed graph without computing components.
pub fn validate_graph(input: &GraphInput) -> Result<GraphSummary> {
    let graph = input.build()?;
    Ok(GraphSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    })
}
