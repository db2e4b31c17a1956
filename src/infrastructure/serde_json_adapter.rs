use crate::domain::graph::SccResult;
use crate::infrastructure::schema_validator::validate_graph_document;
use crate::usecase::analyze::GraphInput;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{fs, time};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocumentDto {
    pub node_count: u64,
    pub edges: String,
}

impl From<GraphDocumentDto> for GraphInput {
    fn from(dto: GraphDocumentDto) -> Self {
        GraphInput::Counted {
            node_count: dto.node_count,
            edges: dto.edges,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDto {
    pub id: usize,
    pub members: Vec<usize>,
    pub cyclic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentReportDto {
    pub node_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    pub component_of: Vec<usize>,
    pub components: Vec<ComponentDto>,
}

impl ComponentReportDto {
    pub fn from_result(result: &SccResult, edge_count: usize) -> Self {
        let components = result
            .components
            .iter()
            .zip(result.cyclic_component.iter())
            .enumerate()
            .map(|(id, (members, &cyclic))| ComponentDto {
                id,
                members: members.clone(),
                cyclic,
            })
            .collect();

        Self {
            node_count: result.component_of.len(),
            edge_count,
            component_count: result.component_count(),
            component_of: result.component_of.clone(),
            components,
        }
    }
}

/// Reads a graph document, checking it against the embedded schema before decoding.
pub async fn read_graph_document(path: &str) -> Result<GraphDocumentDto> {
    let raw = fs::read_to_string(path).await?;
    parse_graph_document(&raw)
}

pub fn parse_graph_document(raw: &str) -> Result<GraphDocumentDto> {
    let value: Value = serde_json::from_str(raw).context("graph document is not valid JSON")?;
    validate_graph_document(&value)?;
    let dto: GraphDocumentDto = serde_json::from_value(value)?;
    Ok(dto)
}

pub async fn write_report_file(path: &str, report: &ComponentReportDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(report)?;

    let max_retries = 5;
    let mut last_error = None;

    for attempt in 1..=max_retries {
        match fs::write(path, &pretty).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::PermissionDenied {
                    return Err(e.into());
                }
                last_error = Some(e);

                if attempt < max_retries {
                    let delay_ms = 100 * attempt; // 100ms, 200ms, 300ms, 400ms
                    eprintln!("Retry {attempt} of {max_retries} writing {path} in {delay_ms}ms...");
                    time::sleep(time::Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }

    match last_error {
        Some(e) => Err(anyhow::Error::new(e).context(format!("giving up on {path}"))),
        None => Ok(()),
    }
}
