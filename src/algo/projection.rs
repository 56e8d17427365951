//! Projection of the bipartite membership graph onto the inventor layer

use super::build_bipartite_view;
use crate::graph::{keys, BipartiteGraph, CollaborationGraph, GraphResult, NodeId, Side};
use patentnet_graph_algorithms::weighted_projection;
use tracing::debug;

/// Project `bipartite` onto its inventors.
///
/// Every inventor becomes a node, isolated ones included, carrying its name
/// fields and gender label. Two inventors are joined with weight equal to the
/// number of patents they share. The structural side tag is dropped before
/// the graph is returned.
pub fn project_onto_inventors(bipartite: &BipartiteGraph) -> GraphResult<CollaborationGraph> {
    let mut graph = CollaborationGraph::new();

    // Nodes are created in inventor-layer order, so node i is inventor i.
    for inventor in bipartite.inventors() {
        let id = graph.add_node(inventor.id.as_str())?;
        if let Some(node) = graph.get_node_mut(id) {
            node.set_property(keys::BIPARTITE, Side::Inventor.tag());
            node.set_property(keys::GIVEN_NAME, inventor.given_name.as_str());
            node.set_property(keys::FAMILY_NAME, inventor.family_name.as_str());
            node.set_property(keys::DISPLAY_NAME, inventor.display_name.as_str());
            node.set_gender(inventor.gender);
        }
    }

    let projection = weighted_projection(&build_bipartite_view(bipartite));
    for &(u, v, weight) in &projection.edges {
        graph.add_edge(NodeId::new(u as u64), NodeId::new(v as u64), weight)?;
    }

    let purged = graph.purge_node_property(keys::BIPARTITE);
    debug!(
        "Projected {} inventors / {} patents onto {} collaborations (purged {} side tags)",
        bipartite.inventor_count(),
        bipartite.patent_count(),
        graph.edge_count(),
        purged
    );

    Ok(graph)
}
