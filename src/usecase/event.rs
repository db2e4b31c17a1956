use crate::usecase::stats::AnalyzeStats;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphBuilt {
        nodes: usize,
        edges: usize,
        self_loops: usize,
    },

    ComponentReported {
        component: usize,
        size: usize,
        cyclic: bool,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
        largest_component: usize,
    },

    Finished {
        stats: AnalyzeStats,
    },
}
