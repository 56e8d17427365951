//! Node-link JSON writer
//!
//! Layout: `{"directed": false, "multigraph": false, "graph": {..},
//! "nodes": [{"id": .., ..}], "links": [{"source": .., "target": .., ..}]}`.

use super::{ExportResult, GraphExporter};
use crate::graph::{CollaborationGraph, PropertyMap};
use serde::Serialize;
use std::io::Write;

/// Node-link JSON exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeLinkJsonExporter {
    pub pretty: bool,
}

#[derive(Serialize)]
struct NodeLinkDocument<'g> {
    directed: bool,
    multigraph: bool,
    graph: &'g PropertyMap,
    nodes: Vec<NodeEntry<'g>>,
    links: Vec<LinkEntry<'g>>,
}

#[derive(Serialize)]
struct NodeEntry<'g> {
    id: &'g str,
    #[serde(flatten)]
    attributes: &'g PropertyMap,
}

#[derive(Serialize)]
struct LinkEntry<'g> {
    source: &'g str,
    target: &'g str,
    #[serde(flatten)]
    attributes: &'g PropertyMap,
}

impl GraphExporter for NodeLinkJsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, graph: &CollaborationGraph, out: &mut dyn Write) -> ExportResult<()> {
        let nodes = graph
            .nodes()
            .map(|n| NodeEntry {
                id: &n.key,
                attributes: &n.properties,
            })
            .collect();

        let links = graph
            .edges()
            .filter_map(|e| {
                let source = graph.get_node(e.source)?;
                let target = graph.get_node(e.target)?;
                Some(LinkEntry {
                    source: &source.key,
                    target: &target.key,
                    attributes: &e.properties,
                })
            })
            .collect();

        let document = NodeLinkDocument {
            directed: false,
            multigraph: false,
            graph: graph.attributes(),
            nodes,
            links,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &document)?;
        } else {
            serde_json::to_writer(&mut *out, &document)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
