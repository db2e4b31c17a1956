use crate::domain::graph::{Graph, SccResult};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalyzeStats {
    pub nodes: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub singleton_components: usize,
    pub largest_component: usize,
}

impl AnalyzeStats {
    pub fn collect(graph: &Graph, scc: &SccResult) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            self_loops: graph.self_loop_count(),
            components: scc.component_count(),
            cyclic_components: scc.cyclic_count(),
            singleton_components: scc.singleton_count(),
            largest_component: scc.largest_component_size(),
        }
    }
}
