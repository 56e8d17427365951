//! Graph algorithms module
//!
//! Algorithms are implemented in the `patentnet-graph-algorithms` crate.
//! This module provides the integration/adapter layer.

pub mod projection;
pub mod summary;

use crate::graph::{BipartiteGraph, CollaborationGraph};
use patentnet_graph_algorithms::{BipartiteView, GraphView, NodeId as AlgoNodeId};

// Re-export algorithms
pub use patentnet_graph_algorithms::{
    count_triangles, weakly_connected_components, weighted_projection, ProjectionResult,
    WccResult,
};
pub use projection::project_onto_inventors;
pub use summary::NetworkSummary;

/// Group the membership edges of a bipartite graph by patent.
///
/// Left indices follow the inventor layer's order, right indices the patent
/// layer's.
pub fn build_bipartite_view(graph: &BipartiteGraph) -> BipartiteView {
    BipartiteView::from_memberships(
        graph.inventor_count(),
        graph.patent_count(),
        graph.membership_indices(),
    )
}

/// Build a dense view of a collaboration graph for algorithm execution
pub fn build_view(graph: &CollaborationGraph) -> GraphView {
    let index_to_node: Vec<AlgoNodeId> = graph.nodes().map(|n| n.id.as_u64()).collect();

    // Node IDs are dense arena indices, so they double as view indices.
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .map(|e| (e.source.as_u64() as usize, e.target.as_u64() as usize))
        .collect();

    GraphView::from_edges(index_to_node, &edges)
}
