use thiserror::Error;

/// Reasons a graph description is rejected before any component is computed.
///
/// Each variant is terminal: no partially built graph is ever handed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid node count: {raw:?} (expected a positive integer)")]
    InvalidNodeCount { raw: String },

    #[error("node count too large: {node_count} (at most {max} nodes are supported)")]
    NodeCountTooLarge { node_count: usize, max: usize },

    #[error("missing edge specification (expected edges like \"0-1, 1-2\")")]
    MissingEdgeSpecification,

    #[error("malformed edge token #{position}: {token:?} (expected \"<source>-<target>\")")]
    MalformedEdgeToken { position: usize, token: String },

    #[error("edge references nonexistent node {endpoint} in {token:?} (node count is {node_count})")]
    NodeOutOfRange {
        token: String,
        endpoint: String,
        node_count: usize,
    },
}
