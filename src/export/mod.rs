//! Graph export
//!
//! Serializes finished collaboration graphs to attributed-graph interchange
//! formats. Exporters refuse graphs that still carry unresolved gender labels
//! or the bipartite side tag.

pub mod graphml;
pub mod json;

pub use graphml::GraphMlExporter;
pub use json::NodeLinkJsonExporter;

use crate::gender::Gender;
use crate::graph::{keys, CollaborationGraph};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Node '{0}' has no resolved gender label")]
    UnresolvedGender(String),

    #[error("Node '{0}' still carries the bipartite side tag")]
    StructuralTag(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Supported interchange formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// GraphML (.graphml)
    GraphMl,
    /// Node-link JSON (.json)
    Json,
}

impl ExportFormat {
    pub fn exporter(&self) -> Box<dyn GraphExporter> {
        match self {
            ExportFormat::GraphMl => Box::new(GraphMlExporter),
            ExportFormat::Json => Box::new(NodeLinkJsonExporter::default()),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::GraphMl => write!(f, "graphml"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graphml" => Ok(ExportFormat::GraphMl),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unsupported export format: {}", other)),
        }
    }
}

/// Serializer for a finished collaboration graph
pub trait GraphExporter {
    /// File extension without the dot
    fn extension(&self) -> &'static str;

    /// Write `graph` to `out`
    fn write(&self, graph: &CollaborationGraph, out: &mut dyn Write) -> ExportResult<()>;

    /// Render `graph` to a string
    fn render(&self, graph: &CollaborationGraph) -> ExportResult<String> {
        let mut buffer = Vec::new();
        self.write(graph, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Check that a graph is fit for export
pub fn validate(graph: &CollaborationGraph) -> ExportResult<()> {
    for node in graph.nodes() {
        if node.has_property(keys::BIPARTITE) {
            return Err(ExportError::StructuralTag(node.key.clone()));
        }
        match node.gender() {
            Some(Gender::Male) | Some(Gender::Female) => {}
            _ => return Err(ExportError::UnresolvedGender(node.key.clone())),
        }
    }
    Ok(())
}

/// Export file name for a graph: `<organization name>.<extension>`.
///
/// The stem never contains a path separator, so the file always lands
/// directly in the export directory.
pub fn file_name(graph: &CollaborationGraph, exporter: &dyn GraphExporter) -> String {
    let stem = graph
        .organization_name()
        .or_else(|| graph.organization_id())
        .map(file_stem)
        .unwrap_or_default();
    let stem = if stem.is_empty() { "graph".to_string() } else { stem };
    format!("{}.{}", stem, exporter.extension())
}

/// Replace characters that are unsafe in a file name with `_`.
///
/// A stem made only of dots (`.`, `..`) becomes empty.
fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.chars().all(|c| c == '.') {
        String::new()
    } else {
        stem
    }
}

/// Write `graph` into `dir` in `format`; returns the file path
pub fn export_to_dir(
    graph: &CollaborationGraph,
    dir: impl AsRef<Path>,
    format: ExportFormat,
) -> ExportResult<PathBuf> {
    let exporter = format.exporter();
    validate(graph)?;

    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name(graph, exporter.as_ref()));

    let mut file = std::io::BufWriter::new(std::fs::File::create(&path)?);
    exporter.write(graph, &mut file)?;
    file.flush()?;

    info!(
        "Exported {} nodes / {} edges to {:?}",
        graph.node_count(),
        graph.edge_count(),
        path
    );
    Ok(path)
}
