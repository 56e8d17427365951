//! Patentnet
//!
//! Builds per-organization inventor collaboration networks from patent
//! records.
//!
//! # Pipeline
//!
//! - Normalize raw patent records into a deduplicated inventor set and
//!   inventor-patent memberships, classifying gender from given names
//! - Build the bipartite inventor/patent membership graph
//! - Project it onto inventors; edge weight counts shared patents
//! - Impute unresolved gender labels from the organization's resolved pool
//! - Export the finished graph (GraphML or node-link JSON)
//!
//! Organizations are processed independently; one organization's failure
//! never affects another's output.

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod export;
pub mod gender;
pub mod graph;
pub mod ingest;
pub mod pipeline;

// Re-export main types for convenience
pub use graph::{
    BipartiteGraph, CollaborationGraph, Edge, EdgeId, GraphError, GraphResult, InventorId, Node,
    NodeId, PatentId, PropertyMap, PropertyValue, Side,
};

pub use ingest::{
    Inventor, Membership, NormalizationContext, NormalizationStats, QueryResponse, RawInventor,
    RawPatentRecord,
};

pub use gender::{
    impute_gender, Gender, GenderClassifier, ImputationReport, NameGenderLookup, NameLexicon,
    NameSignal,
};

pub use algo::{project_onto_inventors, NetworkSummary};

pub use export::{
    export_to_dir, ExportError, ExportFormat, ExportResult, GraphExporter, GraphMlExporter,
    NodeLinkJsonExporter,
};

pub use config::{ConfigError, ConfigResult, DateWindow, Organization, PipelineConfig};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{NetworkOutput, OrganizationOutcome, Pipeline};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
