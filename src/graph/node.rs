//! Node implementation for the collaboration graph

use super::property::{keys, PropertyMap, PropertyValue};
use super::types::NodeId;
use crate::gender::Gender;
use serde::{Deserialize, Serialize};

/// A node in the collaboration graph
///
/// Nodes have:
/// - A dense ID local to their graph
/// - The upstream key they were created from (the inventor identifier)
/// - Properties (key-value pairs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Upstream identifier (unique within a graph)
    pub key: String,

    /// Properties associated with this node
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node without properties
    pub fn new(id: NodeId, key: impl Into<String>) -> Self {
        Node {
            id,
            key: key.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove a property, keeping the order of the remaining ones
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Gender label stored on this node, if any
    pub fn gender(&self) -> Option<Gender> {
        self.get_property(keys::GENDER)
            .and_then(PropertyValue::as_string)
            .and_then(|s| s.parse().ok())
    }

    /// Store a gender label
    pub fn set_gender(&mut self, gender: Gender) {
        self.set_property(keys::GENDER, gender.as_str());
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
