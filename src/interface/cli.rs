use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_tarjan::TarjanSccDetector;
use crate::infrastructure::serde_json_adapter::{
    read_graph_document, write_report_file, ComponentReportDto,
};
use crate::usecase::analyze::{analyze_graph, GraphInput};
use crate::usecase::event::AppEvent;
use crate::usecase::validate::validate_graph;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Scc {
            source,
            output,
            emit_events,
        } => {
            let input = load_input(&source).await?;

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let detector = TarjanSccDetector;
            let outcome = analyze_graph(&input, &detector, Some(tx)).await;

            // The sender was moved into the workflow, so the printer finishes once it
            // has written every event sent so far, including those before a failure.
            if let Some(handle) = printer {
                handle.await.ok();
            }

            let (result, stats) = outcome
                .with_context(|| format!("analyzing graph from {}", source.describe()))?;

            let report = ComponentReportDto::from_result(&result, stats.edges);
            match output.as_deref() {
                Some(path) => write_report_file(path, &report)
                    .await
                    .with_context(|| format!("writing component report: {path}"))?,
                None if !emit_events => println!("{}", serde_json::to_string_pretty(&report)?),
                None => {}
            }

            eprintln!(
                "summary: nodes={} edges={} components={} cyclic_components={} largest_component={}",
                stats.nodes,
                stats.edges,
                stats.components,
                stats.cyclic_components,
                stats.largest_component
            );

            Ok(())
        }

        Cli::Validate { source } => {
            let input = load_input(&source).await?;
            let summary = validate_graph(&input)
                .with_context(|| format!("validating graph from {}", source.describe()))?;

            eprintln!(
                "ok: graph is well-formed ({} nodes, {} edges)",
                summary.nodes, summary.edges
            );
            Ok(())
        }
    }
}

async fn load_input(source: &Source) -> Result<GraphInput> {
    match source {
        Source::Inline { nodes, edges } => Ok(GraphInput::text(nodes.clone(), edges.clone())),
        Source::File(path) => {
            let dto = read_graph_document(path)
                .await
                .with_context(|| format!("reading graph document: {path}"))?;
            Ok(dto.into())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Source {
    Inline { nodes: String, edges: String },
    File(String),
}

impl Source {
    fn describe(&self) -> String {
        match self {
            Source::Inline { .. } => "command line".to_string(),
            Source::File(path) => path.clone(),
        }
    }
}

#[derive(Debug)]
enum Cli {
    Scc {
        source: Source,
        output: Option<String>,
        emit_events: bool,
    },
    Validate {
        source: Source,
    },
}

/// Flags shared by both subcommands, collected before deciding what is valid.
#[derive(Default)]
struct RawFlags {
    nodes: Option<String>,
    edges: Option<String>,
    input: Option<String>,
    output: Option<String>,
    emit_events: bool,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> scc (--nodes <n> --edges <spec> | --in <graph.json>) [--out <report.json>] [--emit-events]
        // <bin> validate (--nodes <n> --edges <spec> | --in <graph.json>)
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "scc" => Self::parse_scc(args),
            "validate" => Self::parse_validate(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_scc(args: &[String]) -> Result<Self> {
        let flags = parse_flags(args, true)?;
        let output = flags.output.clone();
        let emit_events = flags.emit_events;
        let source = source_from(flags)?;

        Ok(Cli::Scc {
            source,
            output,
            emit_events,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let flags = parse_flags(args, false)?;
        let source = source_from(flags)?;

        Ok(Cli::Validate { source })
    }
}

fn parse_flags(args: &[String], allow_output: bool) -> Result<RawFlags> {
    let mut flags = RawFlags::default();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--nodes" | "-n" => {
                i += 1;
                flags.nodes = Some(flag_value(args, i, "--nodes")?);
            }
            "--edges" | "-e" => {
                i += 1;
                flags.edges = Some(flag_value(args, i, "--edges")?);
            }
            "--in" | "--input" => {
                i += 1;
                flags.input = Some(flag_value(args, i, "--in/--input")?);
            }
            "--out" | "--output" if allow_output => {
                i += 1;
                flags.output = Some(flag_value(args, i, "--out/--output")?);
            }
            "--emit-events" if allow_output => {
                flags.emit_events = true;
            }
            "-h" | "--help" => return Err(anyhow!(usage())),
            other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
        }
        i += 1;
    }

    Ok(flags)
}

fn flag_value(args: &[String], i: usize, name: &str) -> Result<String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| anyhow!(format!("missing value for {name}\n\n{}", usage())))
}

fn source_from(flags: RawFlags) -> Result<Source> {
    match (flags.nodes, flags.edges, flags.input) {
        (Some(nodes), Some(edges), None) => Ok(Source::Inline { nodes, edges }),
        (None, None, Some(path)) => Ok(Source::File(path)),
        (None, None, None) => Err(anyhow!(format!(
            "missing graph: pass --nodes and --edges, or --in\n\n{}",
            usage()
        ))),
        (_, _, Some(_)) => Err(anyhow!(format!(
            "--in cannot be combined with --nodes/--edges\n\n{}",
            usage()
        ))),
        (None, Some(_), None) => Err(anyhow!(format!("missing --nodes\n\n{}", usage()))),
        (Some(_), None, None) => Err(anyhow!(format!("missing --edges\n\n{}", usage()))),
    }
}

fn usage() -> &'static str {
    "Usage:\n  digraph-scc scc (--nodes <count> --edges <spec> | --in <graph.json>) [--out <report.json>] [--emit-events]\n  digraph-scc validate (--nodes <count> --edges <spec> | --in <graph.json>)\n\nEdges:\n  Comma-separated <source>-<target> pairs of zero-based node indices, e.g. \"0-1, 1-2, 2-0\".\n\nGraph documents:\n  {\"node_count\": 3, \"edges\": \"0-1, 1-2, 2-0\"}\n\nOutput:\n  The component report is written to --out, or to stdout unless --emit-events is set.\n  With --emit-events, NDJSON events are written to stdout; the summary always goes to stderr."
}
