//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// Every undirected edge `{u, v}` is stored twice, once in each endpoint's row.
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `adj_targets`. Size = node_count + 1
    pub adj_offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub adj_targets: Vec<usize>,
}

impl GraphView {
    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.adj_offsets[idx + 1] - self.adj_offsets[idx]
    }

    /// Get the neighbors of a node
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.adj_offsets[idx];
        let end = self.adj_offsets[idx + 1];
        &self.adj_targets[start..end]
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adj_targets.len() / 2
    }

    /// Build a view from an undirected edge list over dense indices `0..node_count`.
    ///
    /// Self-loops and out-of-range endpoints are skipped.
    pub fn from_edges(index_to_node: Vec<NodeId>, edges: &[(usize, usize)]) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for &(u, v) in edges {
            if u == v || u >= node_count || v >= node_count {
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        let mut adj_offsets = Vec::with_capacity(node_count + 1);
        let mut adj_targets = Vec::new();

        adj_offsets.push(0);
        for row in adjacency {
            adj_targets.extend(row);
            adj_offsets.push(adj_targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            adj_offsets,
            adj_targets,
        }
    }
}
