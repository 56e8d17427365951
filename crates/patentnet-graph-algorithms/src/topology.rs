//! Graph topology analysis algorithms

use super::common::GraphView;
use std::collections::HashSet;

/// Triangle Counting
///
/// Returns the number of triangles in an undirected graph, each counted once.
pub fn count_triangles(view: &GraphView) -> usize {
    let mut triangle_count = 0;

    // Only count ordered triples u < v < w to avoid overcounting.
    for u in 0..view.node_count {
        let u_neighbors: HashSet<usize> = view.neighbors(u).iter().copied().collect();

        for &v in &u_neighbors {
            if v <= u {
                continue;
            }

            for &w in view.neighbors(v) {
                if w <= v {
                    continue;
                }
                if u_neighbors.contains(&w) {
                    triangle_count += 1;
                }
            }
        }
    }

    triangle_count
}
