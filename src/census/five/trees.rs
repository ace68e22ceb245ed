//! 5-vertex trees from degree sequences

use crate::census::four::FourPatternCounts;
use crate::census::{choose4, Count};
use crate::graph::CompressedGraph;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FiveTrees {
    pub four_stars: Count,
    pub prongs: Count,
    pub four_paths: Count,
}

/// Σ_v C(d(v), 4)
pub fn four_stars(graph: &CompressedGraph) -> Count {
    (0..graph.node_count)
        .map(|v| choose4(graph.degree(v) as Count))
        .sum()
}

/// A 3-star with one leaf extended. Choosing the extended leaf j of a center
/// i counts every prong once, plus two for every tailed triangle.
pub fn prongs(graph: &CompressedGraph, tailed_triangles: Count) -> Count {
    let mut total = 0;
    for i in 0..graph.node_count {
        let di = graph.degree(i) as Count;
        for &j in graph.neighbors(i) {
            let dj = graph.degree(j as usize) as Count;
            total += (di - 1) * (dj - 1) * (dj - 2) / 2;
        }
    }
    total - 2 * tailed_triangles
}

/// Paths on five vertices, centered at the middle vertex i: any two distinct
/// neighbors of i extended outward. Extensions that meet close a 4-cycle,
/// and ones that hit i's other neighbor close a triangle.
pub fn four_paths(graph: &CompressedGraph, counts: &FourPatternCounts, triangles: Count) -> Count {
    let mut total = 0;
    for i in 0..graph.node_count {
        let mut sum = 0;
        let mut sum_sq = 0;
        for &j in graph.neighbors(i) {
            let ext = graph.degree(j as usize) as Count - 1;
            sum += ext;
            sum_sq += ext * ext;
        }
        total += (sum * sum - sum_sq) / 2;
    }
    total - 4 * counts.four_cycles - 2 * counts.tailed_triangles - 3 * triangles
}

pub fn five_trees(graph: &CompressedGraph, counts: &FourPatternCounts, triangles: Count) -> FiveTrees {
    FiveTrees {
        four_stars: four_stars(graph),
        prongs: prongs(graph, counts.tailed_triangles),
        four_paths: four_paths(graph, counts, triangles),
    }
}
