//! 5-cycle counting

use crate::census::scratch::VertexScratch;
use crate::census::Count;
use crate::graph::DegreeOrderedDag;

/// Count 5-cycles.
///
/// Each cycle is anchored at its highest vertex i. The scratch holds, for
/// every vertex l, the number of 2-paths from i to l. Every 3-path
/// i <- j <- k -> l is then closed by those 2-paths. Closures that reuse k
/// or j as the middle vertex are degenerate and removed with two adjacency
/// tests.
pub fn five_cycles(dag: &DegreeOrderedDag, wedges: &mut VertexScratch) -> Count {
    let (outlist, inlist) = (&dag.outlist, &dag.inlist);
    let mut total = 0;

    for i in 0..inlist.node_count {
        let pivot = i as u32;

        for &j in inlist.neighbors(i) {
            for &k in inlist.neighbors(j as usize) {
                wedges.bump(k);
            }
            for &k in outlist.neighbors(j as usize) {
                if k != pivot {
                    wedges.bump(k);
                }
            }
        }
        for &j in outlist.neighbors(i) {
            for &k in outlist.neighbors(j as usize) {
                wedges.bump(k);
            }
        }

        for &j in inlist.neighbors(i) {
            for &k in inlist.neighbors(j as usize) {
                let i_sees_k = dag.connected(pivot, k);
                for &l in outlist.neighbors(k as usize) {
                    if l == j || l == pivot {
                        continue;
                    }
                    total += wedges.get(l);
                    if i_sees_k {
                        total -= 1;
                    }
                    if dag.connected(j, l) {
                        total -= 1;
                    }
                }
            }
        }

        wedges.clear();
    }

    debug_assert!(wedges.is_clean());
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::ordering::prepare;

    fn count(n: usize, edges: &[(u32, u32)]) -> Count {
        let mut builder = GraphBuilder::with_nodes(n);
        for &(u, v) in edges {
            builder.add_edge(u, v);
        }
        let p = prepare(&builder.build().unwrap());
        let mut scratch = VertexScratch::new(n);
        five_cycles(&p.dag, &mut scratch)
    }

    #[test]
    fn test_single_five_cycle() {
        assert_eq!(count(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]), 1);
    }

    #[test]
    fn test_k5_has_twelve() {
        let edges: Vec<(u32, u32)> = (0..5).flat_map(|a| (a + 1..5).map(move |b| (a, b))).collect();
        assert_eq!(count(5, &edges), 12);
    }

    #[test]
    fn test_no_five_cycle_in_k4_with_pendant() {
        assert_eq!(count(5, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (3, 4)]), 0);
    }
}
