use crate::domain::error::ValidationError;
use crate::domain::graph::Graph;

/// Parses a user-supplied node count. Surrounding whitespace is ignored; anything other
/// than a positive decimal integer is rejected.
pub fn parse_node_count(raw: &str) -> Result<usize, ValidationError> {
    let invalid = || ValidationError::InvalidNodeCount {
        raw: raw.to_string(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match trimmed.parse::<usize>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(n) => Ok(n),
    }
}

/// Builds a graph from a node count and an edge list such as `"0-1, 1-2, 2-0"`.
///
/// Grammar: `edge ("," edge)*` where `edge = WS* INT WS* "-" WS* INT WS*`. Edges keep
/// their input order in each node's adjacency list. Every token is checked before the
/// node arena is allocated; the first problem found is returned and no graph is produced.
pub fn build_graph(node_count: usize, raw_edge_text: &str) -> Result<Graph, ValidationError> {
    if node_count == 0 {
        return Err(ValidationError::InvalidNodeCount {
            raw: node_count.to_string(),
        });
    }
    if raw_edge_text.trim().is_empty() {
        return Err(ValidationError::MissingEdgeSpecification);
    }

    let mut edges: Vec<(usize, usize)> = Vec::new();

    for (idx, raw_token) in raw_edge_text.split(',').enumerate() {
        let token = raw_token.trim();
        let ((source_text, source), (target_text, target)) = parse_edge_token(idx + 1, token)?;

        for (endpoint_text, endpoint) in [(source_text, source), (target_text, target)] {
            if endpoint >= node_count {
                return Err(ValidationError::NodeOutOfRange {
                    token: token.to_string(),
                    endpoint: endpoint_text.to_string(),
                    node_count,
                });
            }
        }

        edges.push((source, target));
    }

    let mut graph = Graph::new(node_count)?;
    for (source, target) in edges {
        graph.push_edge(source, target);
    }

    Ok(graph)
}

/// Same as [`build_graph`], with the node count still in textual form.
pub fn build_graph_from_text(
    raw_node_count: &str,
    raw_edge_text: &str,
) -> Result<Graph, ValidationError> {
    let node_count = parse_node_count(raw_node_count)?;
    build_graph(node_count, raw_edge_text)
}

type Endpoint<'a> = (&'a str, usize);

fn parse_edge_token(
    position: usize,
    token: &str,
) -> Result<(Endpoint<'_>, Endpoint<'_>), ValidationError> {
    let malformed = || ValidationError::MalformedEdgeToken {
        position,
        token: token.to_string(),
    };

    let mut parts = token.split('-');
    let (Some(source), Some(target), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let source = parse_endpoint(source).ok_or_else(malformed)?;
    let target = parse_endpoint(target).ok_or_else(malformed)?;
    Ok((source, target))
}

/// A decimal literal too large for `usize` still names a node, just never an existing
/// one, so it saturates and fails the range check instead of the syntax check.
fn parse_endpoint(raw: &str) -> Option<Endpoint<'_>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = trimmed.parse::<usize>().unwrap_or(usize::MAX);
    Some((trimmed, value))
}
