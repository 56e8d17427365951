//! Gender imputation
//!
//! Unresolved labels are replaced by draws from the resolved labels of the
//! same graph, so the imputed labels follow that graph's male:female ratio.
//! The random source is supplied by the caller.

use super::Gender;
use crate::error::{PipelineError, PipelineResult};
use crate::graph::{CollaborationGraph, NodeId};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Outcome of one imputation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImputationReport {
    /// Nodes labeled male by the classifier
    pub resolved_male: usize,
    /// Nodes labeled female by the classifier
    pub resolved_female: usize,
    /// Unresolved nodes assigned male
    pub imputed_male: usize,
    /// Unresolved nodes assigned female
    pub imputed_female: usize,
}

impl ImputationReport {
    pub fn imputed(&self) -> usize {
        self.imputed_male + self.imputed_female
    }

    pub fn male(&self) -> usize {
        self.resolved_male + self.imputed_male
    }

    pub fn female(&self) -> usize {
        self.resolved_female + self.imputed_female
    }
}

/// Replace every unresolved (or missing) gender label in `graph`.
///
/// Fails with `EmptyResolvedPool` when there is something to impute but no
/// resolved node to sample from. On failure the graph is left untouched.
pub fn impute_gender<R: Rng + ?Sized>(
    graph: &mut CollaborationGraph,
    rng: &mut R,
) -> PipelineResult<ImputationReport> {
    let mut report = ImputationReport::default();
    let mut unresolved: Vec<NodeId> = Vec::new();

    for node in graph.nodes() {
        match node.gender() {
            Some(Gender::Male) => report.resolved_male += 1,
            Some(Gender::Female) => report.resolved_female += 1,
            Some(Gender::Unresolved) | None => unresolved.push(node.id),
        }
    }

    if unresolved.is_empty() {
        return Ok(report);
    }

    let mut pool = vec![Gender::Male; report.resolved_male];
    pool.extend(std::iter::repeat(Gender::Female).take(report.resolved_female));
    if pool.is_empty() {
        return Err(PipelineError::EmptyResolvedPool {
            organization: graph.organization_name().unwrap_or_default().to_string(),
        });
    }

    for id in unresolved {
        let drawn = pool[rng.gen_range(0..pool.len())];
        if let Some(node) = graph.get_node_mut(id) {
            node.set_gender(drawn);
            match drawn {
                Gender::Male => report.imputed_male += 1,
                _ => report.imputed_female += 1,
            }
        }
    }

    debug!(
        "Imputed {} labels from a pool of {} male / {} female",
        report.imputed(),
        report.resolved_male,
        report.resolved_female
    );
    Ok(report)
}
