//! Core type definitions for the collaboration graphs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier for a node of a collaboration graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Dense identifier for an edge of a collaboration graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// Opaque inventor identifier supplied by the upstream data source.
///
/// Names collide, so identity never derives from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct InventorId(String);

impl InventorId {
    pub fn new(id: impl Into<String>) -> Self {
        InventorId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InventorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InventorId {
    fn from(s: &str) -> Self {
        InventorId(s.to_string())
    }
}

impl From<String> for InventorId {
    fn from(s: String) -> Self {
        InventorId(s)
    }
}

/// Patent number, unique per patent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PatentId(String);

impl PatentId {
    pub fn new(id: impl Into<String>) -> Self {
        PatentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PatentId {
    fn from(s: &str) -> Self {
        PatentId(s.to_string())
    }
}

impl From<String> for PatentId {
    fn from(s: String) -> Self {
        PatentId(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{}", id), "NodeId(42)");

        let id2: NodeId = 100.into();
        assert_eq!(id2.as_u64(), 100);
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(99);
        assert_eq!(id.as_u64(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");
    }

    #[test]
    fn test_domain_ids_serialize_transparently() {
        let inventor = InventorId::new("fl:jo_ln:smith-1");
        assert_eq!(serde_json::to_string(&inventor).unwrap(), "\"fl:jo_ln:smith-1\"");

        let patent: PatentId = serde_json::from_str("\"7654321\"").unwrap();
        assert_eq!(patent.as_str(), "7654321");
        assert_eq!(patent.to_string(), "7654321");
    }

    #[test]
    fn test_id_ordering() {
        assert!(NodeId::new(1) < NodeId::new(2));
        assert!(PatentId::from("1000") < PatentId::from("2000"));
    }
}
