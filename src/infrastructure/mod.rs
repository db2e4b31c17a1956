// Infrastructure layer: detector implementation, file I/O, serde, eventing
pub mod event_ndjson;
pub mod scc_tarjan;
pub mod schema_validator;
pub mod serde_json_adapter;
