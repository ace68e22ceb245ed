//! Almost-5-cliques: K5 with one edge missing

use crate::census::four::closing_edges;
use crate::census::{choose2, Count};
use crate::graph::CompressedGraph;

/// Sorted intersection of two sorted neighbor lists, probing the longer one
fn common_neighbors(a: &[u32], b: &[u32], out: &mut Vec<u32>) {
    out.clear();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    out.extend(short.iter().copied().filter(|x| long.binary_search(x).is_ok()));
}

/// Count K5 minus an edge.
///
/// The pattern is a triangle (i, j, x) joined to both ends of the missing
/// edge. Each copy is found once from its triangle, taken in (degree, id)
/// order i <= x <= j, by choosing two of the common neighbors of i, j and x.
pub fn almost_five_cliques(graph: &CompressedGraph) -> Count {
    let key = |v: u32| (graph.degree(v as usize), v);
    let mut total = 0;
    let mut common = Vec::new();

    for i in 0..graph.node_count {
        let vi = i as u32;
        for &j in graph.neighbors(i) {
            if key(j) < key(vi) {
                continue;
            }
            common_neighbors(graph.neighbors(i), graph.neighbors(j as usize), &mut common);

            for &x in &common {
                if key(j) < key(x) || key(x) < key(vi) {
                    continue;
                }
                let shared = closing_edges(graph.neighbors(x as usize), &common);
                total += choose2(shared);
            }
        }
    }

    total
}
