//! Wedge and triangle collisions read off the triangle list

use crate::census::scratch::VertexScratch;
use crate::census::triangles::TriangleList;
use crate::census::{choose2, choose3, Count};
use crate::graph::{CompressedGraph, DegreeOrderedDag};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionPatterns {
    /// Three wedges between the same pair of endpoints (K2,3)
    pub three_wedge: Count,
    /// K2,3 with one chord between two middle vertices
    pub chordal_wedge: Count,
    pub wheel: Count,
}

fn forward_slot(dag: &DegreeOrderedDag, a: u32, b: u32) -> usize {
    dag.forward_edge(a, b)
        .unwrap_or_else(|| panic!("edge {}-{} missing from the DAG", a, b))
}

/// Position of `i` in a triangle-list group, which must contain it
fn locate(group: &[u32], i: u32, j: u32, k: u32) -> usize {
    match group.binary_search(&i) {
        Ok(pos) => pos,
        Err(_) => panic!("triangle list is missing {} opposite edge {}-{}", i, j, k),
    }
}

/// Three-wedge collisions, chordal-wedge collisions and wheels.
///
/// For each vertex i, `wedges` counts 2-paths from i to every later vertex.
/// Walking triangles (i, j, k) and then the triangles (j, k, l) on the far
/// edge finds chorded wedges whose ends i and l have further wedges between
/// them. `diamonds` counts, per l, the diamonds i-j-k-l that hang off one
/// hub edge i-j; two of them make a wheel.
pub fn wedge_collisions(
    graph: &CompressedGraph,
    dag: &DegreeOrderedDag,
    list: &TriangleList,
    wedges: &mut VertexScratch,
    diamonds: &mut VertexScratch,
) -> CollisionPatterns {
    let mut result = CollisionPatterns::default();
    let mut chordal_twice = 0;

    for i in 0..graph.node_count {
        let pivot = i as u32;

        for &j in graph.neighbors(i) {
            for &k in graph.neighbors(j as usize) {
                if k > pivot {
                    wedges.bump(k);
                }
            }
        }

        for &j in graph.neighbors(i) {
            let hub = forward_slot(dag, pivot, j);

            for &k in list.group(hub) {
                let group = list.group(forward_slot(dag, j, k));
                let start = locate(group, pivot, j, k);
                for &l in &group[start..] {
                    let w = wedges.get(l);
                    if w > 2 {
                        chordal_twice += w - 2;
                    }
                    if pivot < k && pivot < l {
                        diamonds.bump(l);
                    }
                }
            }

            for &k in list.group(hub) {
                if k <= pivot {
                    continue;
                }
                let group = list.group(forward_slot(dag, j, k));
                let start = locate(group, pivot, j, k);
                for &l in &group[start..] {
                    result.wheel += choose2(diamonds.take(l));
                }
            }
        }

        for &j in graph.neighbors(i) {
            for &k in graph.neighbors(j as usize) {
                result.three_wedge += choose3(wedges.take(k));
            }
        }

        wedges.clear();
        diamonds.clear();
    }

    result.chordal_wedge = chordal_twice / 2;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::triangles::TriangleInfo;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::ordering::prepare;

    fn collisions(n: usize, edges: &[(u32, u32)]) -> CollisionPatterns {
        let mut builder = GraphBuilder::with_nodes(n);
        for &(u, v) in edges {
            builder.add_edge(u, v);
        }
        let p = prepare(&builder.build().unwrap());
        let info = TriangleInfo::from_dag(&p.dag.outlist);
        let list = TriangleList::build(&p.dag.outlist, &info);
        let mut a = VertexScratch::new(n);
        let mut b = VertexScratch::new(n);
        let result = wedge_collisions(&p.graph, &p.dag, &list, &mut a, &mut b);
        assert!(a.is_clean() && b.is_clean());
        result
    }

    #[test]
    fn test_k23() {
        let result = collisions(5, &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)]);
        assert_eq!(result, CollisionPatterns { three_wedge: 1, chordal_wedge: 0, wheel: 0 });
    }

    #[test]
    fn test_wheel_graph() {
        let result = collisions(5, &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (2, 3), (3, 4), (4, 1)]);
        assert_eq!(result, CollisionPatterns { three_wedge: 2, chordal_wedge: 4, wheel: 1 });
    }

    #[test]
    fn test_k5() {
        let edges: Vec<(u32, u32)> = (0..5).flat_map(|a| (a + 1..5).map(move |b| (a, b))).collect();
        let result = collisions(5, &edges);
        assert_eq!(result, CollisionPatterns { three_wedge: 10, chordal_wedge: 30, wheel: 15 });
    }
}
