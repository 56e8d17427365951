//! Pipeline error types

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::graph::GraphError;
use thiserror::Error;

/// Errors that abort one organization's pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A raw record lacks a required field
    #[error("Malformed record #{record} (patent {patent_no}): missing or invalid {field}", patent_no = .patent.as_deref().unwrap_or("?"))]
    MalformedRecord {
        /// Position of the record in the organization's record set
        record: usize,
        /// Patent number, when the record has one
        patent: Option<String>,
        /// Name of the offending field
        field: &'static str,
    },

    /// No resolved gender labels to sample imputations from
    #[error("No resolved gender labels to impute from for organization '{organization}'")]
    EmptyResolvedPool { organization: String },

    /// Graph construction error
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Export error
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input could not be read or decoded
    #[error("Input error for '{organization}': {message}")]
    Input { organization: String, message: String },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
