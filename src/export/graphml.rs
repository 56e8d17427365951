//! GraphML writer
//!
//! Attribute keys are declared from the properties actually present, in
//! first-seen order (graph, then nodes, then edges), with ids `d0`, `d1`, ...

use super::{ExportResult, GraphExporter};
use crate::graph::{CollaborationGraph, PropertyMap};
use indexmap::IndexMap;
use std::io::Write;

const HEADER: &str = r#"<?xml version='1.0' encoding='utf-8'?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#;

/// GraphML exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphMlExporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Domain {
    Graph,
    Node,
    Edge,
}

impl Domain {
    fn as_str(&self) -> &'static str {
        match self {
            Domain::Graph => "graph",
            Domain::Node => "node",
            Domain::Edge => "edge",
        }
    }
}

/// (domain, attribute name) -> (key id, attr.type)
type KeyTable<'g> = IndexMap<(Domain, &'g str), (String, &'static str)>;

fn collect_keys<'g>(table: &mut KeyTable<'g>, domain: Domain, properties: &'g PropertyMap) {
    for (name, value) in properties {
        if value.is_null() || table.contains_key(&(domain, name.as_str())) {
            continue;
        }
        let id = format!("d{}", table.len());
        table.insert((domain, name.as_str()), (id, value.type_name()));
    }
}

fn write_data(
    out: &mut dyn Write,
    table: &KeyTable<'_>,
    domain: Domain,
    properties: &PropertyMap,
    indent: &str,
) -> ExportResult<()> {
    for (name, value) in properties {
        if value.is_null() {
            continue;
        }
        if let Some((id, _)) = table.get(&(domain, name.as_str())) {
            writeln!(
                out,
                "{}<data key=\"{}\">{}</data>",
                indent,
                id,
                escape(&value.to_string())
            )?;
        }
    }
    Ok(())
}

impl GraphExporter for GraphMlExporter {
    fn extension(&self) -> &'static str {
        "graphml"
    }

    fn write(&self, graph: &CollaborationGraph, out: &mut dyn Write) -> ExportResult<()> {
        let mut table = KeyTable::new();
        collect_keys(&mut table, Domain::Graph, graph.attributes());
        for node in graph.nodes() {
            collect_keys(&mut table, Domain::Node, &node.properties);
        }
        for edge in graph.edges() {
            collect_keys(&mut table, Domain::Edge, &edge.properties);
        }

        writeln!(out, "{}", HEADER)?;
        for ((domain, name), (id, ty)) in &table {
            writeln!(
                out,
                "  <key id=\"{}\" for=\"{}\" attr.name=\"{}\" attr.type=\"{}\" />",
                id,
                domain.as_str(),
                escape(name),
                ty
            )?;
        }

        writeln!(out, "  <graph edgedefault=\"undirected\">")?;
        write_data(out, &table, Domain::Graph, graph.attributes(), "    ")?;

        for node in graph.nodes() {
            writeln!(out, "    <node id=\"{}\">", escape(&node.key))?;
            write_data(out, &table, Domain::Node, &node.properties, "      ")?;
            writeln!(out, "    </node>")?;
        }

        for edge in graph.edges() {
            let (Some(source), Some(target)) = (graph.get_node(edge.source), graph.get_node(edge.target)) else {
                continue;
            };
            writeln!(
                out,
                "    <edge source=\"{}\" target=\"{}\">",
                escape(&source.key),
                escape(&target.key)
            )?;
            write_data(out, &table, Domain::Edge, &edge.properties, "      ")?;
            writeln!(out, "    </edge>")?;
        }

        writeln!(out, "  </graph>")?;
        writeln!(out, "</graphml>")?;
        Ok(())
    }
}

/// Escape XML special characters and drop characters XML 1.0 cannot carry
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
