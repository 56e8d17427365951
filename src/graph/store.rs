//! In-memory storage for an attributed, undirected, weighted collaboration graph
//!
//! One graph holds one organization's network. Nodes are kept in an arena
//! indexed by `NodeId`; an upstream-key index gives identifier lookups.

use super::edge::Edge;
use super::node::Node;
use super::property::{keys, PropertyMap, PropertyValue};
use super::types::{EdgeId, NodeId};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Node with key '{0}' already exists")]
    NodeAlreadyExists(String),

    #[error("Edge between {0} and {1} already exists")]
    EdgeAlreadyExists(NodeId, NodeId),

    #[error("Self-loop on {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("Membership references unknown inventor '{0}'")]
    UnknownInventor(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Attributed undirected collaboration graph
///
/// Uses an arena plus hash maps for O(1) lookups:
/// - nodes: NodeId -> Node
/// - key_index: upstream key -> NodeId
/// - pair_index: (NodeId, NodeId) -> EdgeId, canonical order
/// - adjacency: NodeId -> Vec<EdgeId>
#[derive(Debug, Default, Clone)]
pub struct CollaborationGraph {
    /// Graph-level attributes
    attributes: PropertyMap,

    /// Node arena
    nodes: Vec<Node>,

    /// Edge arena
    edges: Vec<Edge>,

    /// Edges incident to each node
    adjacency: Vec<Vec<EdgeId>>,

    /// Upstream key lookup
    key_index: FxHashMap<String, NodeId>,

    /// Unordered pair lookup
    pair_index: FxHashMap<(NodeId, NodeId), EdgeId>,
}

impl CollaborationGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a graph-level attribute
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get a graph-level attribute
    pub fn attribute(&self, key: &str) -> Option<&PropertyValue> {
        self.attributes.get(key)
    }

    /// All graph-level attributes
    pub fn attributes(&self) -> &PropertyMap {
        &self.attributes
    }

    /// Organization identifier, when set
    pub fn organization_id(&self) -> Option<&str> {
        self.attribute(keys::ORGANIZATION_ID).and_then(PropertyValue::as_string)
    }

    /// Organization display name, when set
    pub fn organization_name(&self) -> Option<&str> {
        self.attribute(keys::ORGANIZATION_NAME).and_then(PropertyValue::as_string)
    }

    /// Create a node for an upstream key
    pub fn add_node(&mut self, key: impl Into<String>) -> GraphResult<NodeId> {
        let key = key.into();
        if self.key_index.contains_key(&key) {
            return Err(GraphError::NodeAlreadyExists(key));
        }

        let id = NodeId::new(self.nodes.len() as u64);
        self.key_index.insert(key.clone(), id);
        self.nodes.push(Node::new(id, key));
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Look up a node ID by upstream key
    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.key_index.get(key).copied()
    }

    /// Get a node by upstream key
    pub fn node_by_key(&self, key: &str) -> Option<&Node> {
        self.node_id(key).and_then(|id| self.get_node(id))
    }

    /// All nodes, in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Create an undirected edge
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: u64) -> GraphResult<EdgeId> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        for id in [a, b] {
            if self.get_node(id).is_none() {
                return Err(GraphError::NodeNotFound(id));
            }
        }

        let pair = Edge::canonical(a, b);
        if self.pair_index.contains_key(&pair) {
            return Err(GraphError::EdgeAlreadyExists(pair.0, pair.1));
        }

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Edge::new(id, a, b, weight));
        self.pair_index.insert(pair, id);
        self.adjacency[a.index()].push(id);
        self.adjacency[b.index()].push(id);
        Ok(id)
    }

    /// Get an edge by ID
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_u64() as usize)
    }

    /// Edge joining two nodes, in either order
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.pair_index
            .get(&Edge::canonical(a, b))
            .and_then(|&id| self.get_edge(id))
    }

    /// Weight of the edge joining two upstream keys
    pub fn weight_between(&self, a: &str, b: &str) -> Option<u64> {
        let a = self.node_id(a)?;
        let b = self.node_id(b)?;
        self.edge_between(a, b).map(Edge::weight)
    }

    /// All edges, in creation order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges incident to a node
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .get(id.index())
            .into_iter()
            .flatten()
            .filter_map(|&edge_id| self.get_edge(edge_id))
    }

    /// Neighbors of a node
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.incident_edges(id).filter_map(|e| e.other(id)).collect()
    }

    /// Degree of a node
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(id.index()).map_or(0, Vec::len)
    }

    /// Nodes without any collaboration edge
    pub fn isolated_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| self.degree(n.id) == 0)
    }

    /// Remove a property from every node; returns how many nodes carried it
    pub fn purge_node_property(&mut self, key: &str) -> usize {
        self.nodes
            .iter_mut()
            .filter_map(|n| n.remove_property(key))
            .count()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
