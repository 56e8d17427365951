//! Property value types for graph nodes, edges and the graph itself

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute keys shared by the projector, imputer and exporters
pub mod keys {
    /// Graph attribute: upstream assignee identifier of the organization
    pub const ORGANIZATION_ID: &str = "organization_id";
    /// Graph attribute: display name of the organization
    pub const ORGANIZATION_NAME: &str = "organization_name";

    pub const GIVEN_NAME: &str = "given_name";
    pub const FAMILY_NAME: &str = "family_name";
    pub const DISPLAY_NAME: &str = "display_name";
    pub const GENDER: &str = "gender";

    /// Structural side tag carried through projection and purged before export
    pub const BIPARTITE: &str = "bipartite";

    /// Edge attribute: number of shared patents
    pub const WEIGHT: &str = "weight";
}

/// Property value type
///
/// Exported graphs only carry strings and integers; floats and booleans are
/// kept for attributes added by downstream analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl PropertyValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// GraphML `attr.type` for this value
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Integer(_) => "long",
            PropertyValue::Float(_) => "double",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Null => "string",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Null => Ok(()),
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<u64> for PropertyValue {
    fn from(i: u64) -> Self {
        PropertyValue::Integer(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

/// Property map for storing node, edge and graph attributes.
///
/// Insertion-ordered so exports list attributes in a stable order.
pub type PropertyMap = IndexMap<String, PropertyValue>;
