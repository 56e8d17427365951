//! Weighted bipartite-to-unipartite projection
//!
//! Projects a two-layer membership structure onto its left layer. Two left
//! nodes are joined when they share at least one right node, and the edge
//! weight is the number of right nodes they share.

use std::collections::HashMap;

/// Membership structure of a bipartite graph, grouped by right-layer node.
///
/// Left nodes are dense indices `0..left_count`. For every right node `r`,
/// `members[member_offsets[r]..member_offsets[r + 1]]` lists the left nodes
/// attached to it.
pub struct BipartiteView {
    /// Number of left-layer nodes (the layer being projected onto)
    pub left_count: usize,
    /// Number of right-layer nodes
    pub right_count: usize,
    /// Offsets into `members`. Size = right_count + 1
    pub member_offsets: Vec<usize>,
    /// Contiguous array of left node indices
    pub members: Vec<usize>,
}

impl BipartiteView {
    /// Build the view from `(left, right)` membership pairs.
    ///
    /// Duplicate pairs collapse to one membership. Pairs with an endpoint
    /// outside `0..left_count` or `0..right_count` are skipped.
    pub fn from_memberships(
        left_count: usize,
        right_count: usize,
        memberships: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut grouped: Vec<Vec<usize>> = vec![Vec::new(); right_count];
        for (left, right) in memberships {
            if left >= left_count || right >= right_count {
                continue;
            }
            grouped[right].push(left);
        }

        let mut member_offsets = Vec::with_capacity(right_count + 1);
        let mut members = Vec::new();
        member_offsets.push(0);
        for mut group in grouped {
            group.sort_unstable();
            group.dedup();
            members.extend(group);
            member_offsets.push(members.len());
        }

        BipartiteView {
            left_count,
            right_count,
            member_offsets,
            members,
        }
    }

    /// Left nodes attached to right node `r`
    pub fn members_of(&self, r: usize) -> &[usize] {
        &self.members[self.member_offsets[r]..self.member_offsets[r + 1]]
    }

    /// Number of memberships
    pub fn membership_count(&self) -> usize {
        self.members.len()
    }
}

/// Result of a weighted projection
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionResult {
    /// Number of nodes in the projected graph (all left nodes, isolated ones included)
    pub node_count: usize,
    /// Undirected edges `(u, v, weight)` with `u < v`, sorted by `(u, v)`
    pub edges: Vec<(usize, usize, u64)>,
}

impl ProjectionResult {
    /// Weight of the edge between `u` and `v`, if any
    pub fn weight(&self, u: usize, v: usize) -> Option<u64> {
        let key = if u < v { (u, v) } else { (v, u) };
        self.edges
            .binary_search_by(|&(a, b, _)| (a, b).cmp(&key))
            .ok()
            .map(|i| self.edges[i].2)
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|&(_, _, w)| w).sum()
    }
}

/// Weighted projection onto the left layer
///
/// For each right node with k >= 2 members, every one of the C(k, 2) member
/// pairs gains one unit of weight. Right nodes with fewer than two members
/// contribute nothing.
pub fn weighted_projection(view: &BipartiteView) -> ProjectionResult {
    let mut pair_weights: HashMap<(usize, usize), u64> = HashMap::new();

    for r in 0..view.right_count {
        let members = view.members_of(r);
        if members.len() < 2 {
            continue;
        }
        // Members are sorted and unique, so i < j gives u < v.
        for (i, &u) in members.iter().enumerate() {
            for &v in &members[i + 1..] {
                *pair_weights.entry((u, v)).or_insert(0) += 1;
            }
        }
    }

    let mut edges: Vec<(usize, usize, u64)> = pair_weights
        .into_iter()
        .map(|((u, v), w)| (u, v, w))
        .collect();
    edges.sort_unstable();

    ProjectionResult {
        node_count: view.left_count,
        edges,
    }
}
