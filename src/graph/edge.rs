//! Edge implementation for the collaboration graph
//!
//! Edges are undirected: the endpoint pair is stored in canonical order
//! (`source < target`).

use super::property::{keys, PropertyMap, PropertyValue};
use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// An undirected weighted edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Lower endpoint
    pub source: NodeId,

    /// Higher endpoint
    pub target: NodeId,

    /// Properties associated with this edge (always includes `weight`)
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new undirected edge with the given weight
    pub fn new(id: EdgeId, a: NodeId, b: NodeId, weight: u64) -> Self {
        let (source, target) = Self::canonical(a, b);
        let mut properties = PropertyMap::new();
        properties.insert(keys::WEIGHT.to_string(), weight.into());

        Edge {
            id,
            source,
            target,
            properties,
        }
    }

    /// Order an endpoint pair the way edges store it
    pub fn canonical(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Number of shared patents
    pub fn weight(&self) -> u64 {
        self.get_property(keys::WEIGHT)
            .and_then(PropertyValue::as_integer)
            .and_then(|w| u64::try_from(w).ok())
            .unwrap_or(0)
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge_canonical_order() {
        let edge = Edge::new(EdgeId::new(1), NodeId::new(5), NodeId::new(2), 3);

        assert_eq!(edge.source, NodeId::new(2));
        assert_eq!(edge.target, NodeId::new(5));
        assert_eq!(edge.weight(), 3);
        assert_eq!(edge.get_property(keys::WEIGHT), Some(&PropertyValue::Integer(3)));
    }

    #[test]
    fn test_edge_other_endpoint() {
        let edge = Edge::new(EdgeId::new(3), NodeId::new(4), NodeId::new(9), 1);

        assert_eq!(edge.other(NodeId::new(4)), Some(NodeId::new(9)));
        assert_eq!(edge.other(NodeId::new(9)), Some(NodeId::new(4)));
        assert_eq!(edge.other(NodeId::new(1)), None);
    }
}
