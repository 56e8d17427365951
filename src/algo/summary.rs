//! Per-organization network statistics

use super::build_view;
use crate::gender::{Gender, ImputationReport};
use crate::graph::{BipartiteGraph, CollaborationGraph};
use patentnet_graph_algorithms::{count_triangles, weakly_connected_components};
use serde::Serialize;

/// Size and shape of one organization's collaboration network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub organization: String,
    pub inventors: usize,
    pub patents: usize,
    pub memberships: usize,
    pub collaborations: usize,
    pub isolated_inventors: usize,
    pub components: usize,
    pub largest_component: usize,
    pub triangles: usize,
    /// Sum of edge weights (co-inventor pairs counted per shared patent)
    pub total_weight: u64,
    pub male: usize,
    pub female: usize,
    pub imputed: usize,
}

impl NetworkSummary {
    pub fn compute(
        organization: impl Into<String>,
        bipartite: &BipartiteGraph,
        graph: &CollaborationGraph,
        imputation: &ImputationReport,
    ) -> Self {
        let view = build_view(graph);
        let wcc = weakly_connected_components(&view);

        let mut male = 0;
        let mut female = 0;
        for node in graph.nodes() {
            match node.gender() {
                Some(Gender::Male) => male += 1,
                Some(Gender::Female) => female += 1,
                _ => {}
            }
        }

        Self {
            organization: organization.into(),
            inventors: graph.node_count(),
            patents: bipartite.patent_count(),
            memberships: bipartite.membership_count(),
            collaborations: graph.edge_count(),
            isolated_inventors: graph.isolated_nodes().count(),
            components: wcc.component_count(),
            largest_component: wcc.largest_component_size(),
            triangles: count_triangles(&view),
            total_weight: graph.edges().map(|e| e.weight()).sum(),
            male,
            female,
            imputed: imputation.imputed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::project_onto_inventors;
    use crate::graph::InventorId;
    use crate::ingest::{Inventor, Membership};
    use indexmap::IndexMap;

    #[test]
    fn test_summary_counts() {
        let inventors: IndexMap<InventorId, Inventor> = [
            ("A", Gender::Male),
            ("B", Gender::Female),
            ("C", Gender::Female),
            ("D", Gender::Male),
        ]
        .into_iter()
        .map(|(id, g)| (InventorId::from(id), Inventor::new(id, "", id, g)))
        .collect();
        let bipartite = BipartiteGraph::build(
            inventors,
            vec![
                Membership::new("A", "P1"),
                Membership::new("B", "P1"),
                Membership::new("C", "P1"),
                Membership::new("A", "P2"),
                Membership::new("B", "P2"),
                Membership::new("D", "P3"),
            ],
        )
        .unwrap();
        let graph = project_onto_inventors(&bipartite).unwrap();

        let summary =
            NetworkSummary::compute("ACME", &bipartite, &graph, &ImputationReport::default());

        assert_eq!(summary.organization, "ACME");
        assert_eq!(summary.inventors, 4);
        assert_eq!(summary.patents, 3);
        assert_eq!(summary.memberships, 6);
        assert_eq!(summary.collaborations, 3);
        assert_eq!(summary.isolated_inventors, 1);
        assert_eq!(summary.components, 2);
        assert_eq!(summary.largest_component, 3);
        assert_eq!(summary.triangles, 1);
        assert_eq!(summary.total_weight, 4);
        assert_eq!((summary.male, summary.female), (2, 2));
        assert_eq!(summary.imputed, 0);
    }
}
