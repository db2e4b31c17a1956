use crate::domain::error::ValidationError;
use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;
use crate::usecase::build::{build_graph, build_graph_from_text};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalyzeStats;
use anyhow::Result;
use tokio::sync::mpsc;

/// Raw graph description as it arrives from a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphInput {
    /// Node count still in textual form (CLI flags, form fields).
    Text { node_count: String, edges: String },
    /// Node count already typed by a structured source (JSON document).
    Counted { node_count: u64, edges: String },
}

impl GraphInput {
    pub fn text(node_count: impl Into<String>, edges: impl Into<String>) -> Self {
        GraphInput::Text {
            node_count: node_count.into(),
            edges: edges.into(),
        }
    }

    pub fn build(&self) -> Result<Graph, ValidationError> {
        match self {
            GraphInput::Text { node_count, edges } => build_graph_from_text(node_count, edges),
            GraphInput::Counted { node_count, edges } => {
                let n = usize::try_from(*node_count).map_err(|_| {
                    ValidationError::InvalidNodeCount {
                        raw: node_count.to_string(),
                    }
                })?;
                build_graph(n, edges)
            }
        }
    }
}

/// Validates the input, computes its strongly connected components and reports progress
/// on `sink`. Validation failures surface as [`ValidationError`] inside the returned
/// error and stop the workflow before any component is computed.
pub async fn analyze_graph(
    input: &GraphInput,
    scc: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(SccResult, AnalyzeStats)> {
    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let graph = input.build()?;
    emit(
        &sink,
        AppEvent::GraphBuilt {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            self_loops: graph.self_loop_count(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let result = scc.compute_scc(&graph);
    for (cid, members) in result.components.iter().enumerate() {
        emit(
            &sink,
            AppEvent::ComponentReported {
                component: cid,
                size: members.len(),
                cyclic: result.cyclic_component[cid],
            },
        )
        .await;
    }
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: result.component_count(),
            cyclic_components: result.cyclic_count(),
            largest_component: result.largest_component_size(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    let stats = AnalyzeStats::collect(&graph, &result);
    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    Ok((result, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
