//! Graph data model
//!
//! - `BipartiteGraph`: inventor and patent layers joined by membership edges
//! - `CollaborationGraph`: attributed, undirected, weighted inventor graph

pub mod bipartite;
pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use bipartite::{BipartiteGraph, BipartiteNode, Side};
pub use edge::Edge;
pub use node::Node;
pub use property::{keys, PropertyMap, PropertyValue};
pub use store::{CollaborationGraph, GraphError, GraphResult};
pub use types::{EdgeId, InventorId, NodeId, PatentId};
