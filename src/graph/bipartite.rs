//! Two-layer inventor/patent membership graph
//!
//! Inventors and patents live in disjoint, separately indexed layers and a
//! membership always pairs one of each, so no edge can join two nodes of the
//! same layer.

use super::store::{GraphError, GraphResult};
use super::types::{InventorId, PatentId};
use crate::ingest::{Inventor, Membership};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layer a bipartite node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Inventor,
    Patent,
}

impl Side {
    /// Numeric tag used for the `bipartite` node attribute
    pub fn tag(&self) -> i64 {
        match self {
            Side::Inventor => 0,
            Side::Patent => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Inventor => write!(f, "inventor"),
            Side::Patent => write!(f, "patent"),
        }
    }
}

/// A node reference within one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BipartiteNode {
    pub side: Side,
    pub index: usize,
}

/// Bipartite membership graph for one organization
#[derive(Debug, Default)]
pub struct BipartiteGraph {
    inventors: IndexMap<InventorId, Inventor>,
    patents: IndexSet<PatentId>,
    /// (inventor index, patent index), deduplicated, in first-seen order
    memberships: IndexSet<(usize, usize)>,
}

impl BipartiteGraph {
    /// Build the graph from the inventor set and membership edges.
    ///
    /// Patents enter the patent layer through their memberships. Every
    /// membership must name a known inventor.
    pub fn build(
        inventors: IndexMap<InventorId, Inventor>,
        memberships: impl IntoIterator<Item = Membership>,
    ) -> GraphResult<Self> {
        let mut graph = BipartiteGraph {
            inventors,
            patents: IndexSet::new(),
            memberships: IndexSet::new(),
        };
        for membership in memberships {
            graph.add_membership(membership)?;
        }
        Ok(graph)
    }

    /// Record that an inventor is credited on a patent; duplicates are ignored
    pub fn add_membership(&mut self, membership: Membership) -> GraphResult<bool> {
        let inventor = self
            .inventors
            .get_index_of(&membership.inventor)
            .ok_or_else(|| GraphError::UnknownInventor(membership.inventor.to_string()))?;
        let (patent, _) = self.patents.insert_full(membership.patent);
        Ok(self.memberships.insert((inventor, patent)))
    }

    /// Inventor layer, in first-seen order
    pub fn inventors(&self) -> impl Iterator<Item = &Inventor> {
        self.inventors.values()
    }

    /// Look up an inventor
    pub fn inventor(&self, id: &InventorId) -> Option<&Inventor> {
        self.inventors.get(id)
    }

    /// Patent layer, in first-seen order
    pub fn patents(&self) -> impl Iterator<Item = &PatentId> {
        self.patents.iter()
    }

    /// Membership pairs by identifier
    pub fn memberships(&self) -> impl Iterator<Item = (&InventorId, &PatentId)> {
        self.memberships.iter().filter_map(|&(i, p)| {
            let (inventor, _) = self.inventors.get_index(i)?;
            let patent = self.patents.get_index(p)?;
            Some((inventor, patent))
        })
    }

    /// Membership pairs by dense layer index
    pub fn membership_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.memberships.iter().copied()
    }

    /// Membership edges as node references
    pub fn edges(&self) -> impl Iterator<Item = (BipartiteNode, BipartiteNode)> + '_ {
        self.memberships.iter().map(|&(i, p)| {
            (
                BipartiteNode { side: Side::Inventor, index: i },
                BipartiteNode { side: Side::Patent, index: p },
            )
        })
    }

    /// Inventors credited on a patent
    pub fn inventors_of(&self, patent: &PatentId) -> Vec<&InventorId> {
        let Some(p) = self.patents.get_index_of(patent) else {
            return Vec::new();
        };
        self.memberships
            .iter()
            .filter(|&&(_, pi)| pi == p)
            .filter_map(|&(i, _)| self.inventors.get_index(i).map(|(id, _)| id))
            .collect()
    }

    pub fn inventor_count(&self) -> usize {
        self.inventors.len()
    }

    pub fn patent_count(&self) -> usize {
        self.patents.len()
    }

    pub fn membership_count(&self) -> usize {
        self.memberships.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::Gender;

    fn inventor(id: &str) -> Inventor {
        Inventor::new(id, "Ada", "Lovelace", Gender::Female)
    }

    fn inventors(ids: &[&str]) -> IndexMap<InventorId, Inventor> {
        ids.iter().map(|id| (InventorId::from(*id), inventor(id))).collect()
    }

    #[test]
    fn test_build_layers() {
        let graph = BipartiteGraph::build(
            inventors(&["A", "B", "C"]),
            vec![
                Membership::new("A", "P1"),
                Membership::new("B", "P1"),
                Membership::new("B", "P2"),
                Membership::new("C", "P2"),
            ],
        )
        .unwrap();

        assert_eq!(graph.inventor_count(), 3);
        assert_eq!(graph.patent_count(), 2);
        assert_eq!(graph.membership_count(), 4);

        let on_p2: Vec<&str> = graph
            .inventors_of(&PatentId::from("P2"))
            .into_iter()
            .map(InventorId::as_str)
            .collect();
        assert_eq!(on_p2, vec!["B", "C"]);
    }

    #[test]
    fn test_duplicate_membership_ignored() {
        let mut graph = BipartiteGraph::build(inventors(&["A"]), Vec::new()).unwrap();

        assert!(graph.add_membership(Membership::new("A", "P1")).unwrap());
        assert!(!graph.add_membership(Membership::new("A", "P1")).unwrap());
        assert_eq!(graph.membership_count(), 1);
    }

    #[test]
    fn test_unknown_inventor_rejected() {
        let result = BipartiteGraph::build(inventors(&["A"]), vec![Membership::new("Z", "P1")]);
        assert_eq!(result.unwrap_err(), GraphError::UnknownInventor("Z".to_string()));
    }

    #[test]
    fn test_edges_cross_layers() {
        let graph = BipartiteGraph::build(
            inventors(&["A", "B"]),
            vec![Membership::new("A", "P1"), Membership::new("B", "P1")],
        )
        .unwrap();

        for (left, right) in graph.edges() {
            assert_eq!(left.side, Side::Inventor);
            assert_eq!(right.side, Side::Patent);
        }
        assert_eq!(Side::Inventor.tag(), 0);
        assert_eq!(Side::Patent.to_string(), "patent");
    }
}
