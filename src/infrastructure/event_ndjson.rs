use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphBuilt {
            nodes,
            edges,
            self_loops,
        } => {
            json!({"type":"graph_built","nodes":nodes,"edges":edges,"self_loops":self_loops})
        }
        AppEvent::ComponentReported {
            component,
            size,
            cyclic,
        } => {
            json!({"type":"component_reported","component":component,"size":size,"cyclic":cyclic})
        }
        AppEvent::SccComputed {
            nodes,
            edges,
            components,
            cyclic_components,
            largest_component,
        } => {
            json!({"type":"scc_computed","nodes":nodes,"edges":edges,"components":components,"cyclic_components":cyclic_components,"largest_component":largest_component})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
