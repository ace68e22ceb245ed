//! Triangle enumeration over an acyclic orientation
//!
//! Every triangle is reported once, at its lowest vertex in the orientation's
//! total order. The per-vertex and per-edge tallies collected here feed almost
//! every 4- and 5-vertex counter.

use crate::census::Count;
use crate::graph::{CompressedGraph, DegreeOrderedDag};

/// One triangle: pivot `v`, the other two vertices `u` before `w` in the
/// orientation's order, and the slot indices of its three edges in the
/// traversed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub v: u32,
    pub u: u32,
    pub w: u32,
    pub vu: usize,
    pub vw: usize,
    pub uw: usize,
}

/// How the traversed graph is oriented
#[derive(Debug, Clone, Copy)]
pub enum Traversal<'a> {
    /// The graph is already the outlist of an acyclic orientation
    Dag,
    /// Orient on the fly by (total degree, id). A directed graph must bring
    /// its inlist so total degrees can be computed.
    DegreeOrdered { inlist: Option<&'a CompressedGraph> },
}

/// Lazily yields every triangle exactly once
pub struct TriangleIter<'a> {
    graph: &'a CompressedGraph,
    /// Total degrees in on-the-fly mode, empty when traversing a DAG
    degrees: Vec<usize>,
    /// Inlist of a directed graph oriented on the fly. Its edges may point
    /// either way relative to the order, so both directions are searched.
    inlist: Option<&'a CompressedGraph>,
    pivot: usize,
    /// Forward neighbors of the pivot with their slot indices
    candidates: Vec<(u32, usize)>,
    first: usize,
    second: usize,
}

impl<'a> TriangleIter<'a> {
    pub fn new(graph: &'a CompressedGraph, traversal: Traversal<'a>) -> Self {
        let (degrees, inlist) = match traversal {
            Traversal::Dag => (Vec::new(), None),
            Traversal::DegreeOrdered { inlist } => {
                if graph.directed && inlist.is_none() {
                    panic!("degree ordering a directed graph requires its inlist");
                }
                let degrees = (0..graph.node_count)
                    .map(|v| graph.degree(v) + inlist.map_or(0, |g| g.degree(v)))
                    .collect();
                (degrees, inlist.filter(|_| graph.directed))
            }
        };

        let mut iter = Self {
            graph,
            degrees,
            inlist,
            pivot: 0,
            candidates: Vec::new(),
            first: 0,
            second: 1,
        };
        if graph.node_count > 0 {
            iter.load_pivot(0);
        }
        iter
    }

    /// Iterate the triangles of a DAG outlist. Id order within each list must
    /// agree with the orientation, as it does after rank relabeling.
    pub fn over_dag(outlist: &'a CompressedGraph) -> Self {
        Self::new(outlist, Traversal::Dag)
    }

    fn load_pivot(&mut self, v: usize) {
        let graph = self.graph;
        let range = graph.edge_range(v);
        self.candidates.clear();

        if self.degrees.is_empty() {
            self.candidates.extend(range.map(|e| (graph.edges[e], e)));
        } else {
            let degrees = &self.degrees;
            let key = |x: u32| (degrees[x as usize], x);
            let pivot_key = key(v as u32);
            self.candidates.extend(
                range
                    .filter(|&e| pivot_key < key(graph.edges[e]))
                    .map(|e| (graph.edges[e], e)),
            );
            if let Some(inlist) = self.inlist {
                self.candidates.extend(
                    inlist
                        .neighbors(v)
                        .iter()
                        .filter(|&&x| pivot_key < key(x))
                        .filter_map(|&x| graph.edge_index(x as usize, v as u32).map(|e| (x, e))),
                );
            }
            self.candidates.sort_unstable_by_key(|&(x, _)| key(x));
        }

        self.first = 0;
        self.second = 1;
    }
}

impl<'a> Iterator for TriangleIter<'a> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        while self.pivot < self.graph.node_count {
            while self.first < self.candidates.len() {
                let (u, vu) = self.candidates[self.first];
                while self.second < self.candidates.len() {
                    let (w, vw) = self.candidates[self.second];
                    self.second += 1;
                    let closing = self.graph.edge_index(u as usize, w).or_else(|| {
                        if self.inlist.is_some() {
                            self.graph.edge_index(w as usize, u)
                        } else {
                            None
                        }
                    });
                    if let Some(uw) = closing {
                        return Some(Triangle {
                            v: self.pivot as u32,
                            u,
                            w,
                            vu,
                            vw,
                            uw,
                        });
                    }
                }
                self.first += 1;
                self.second = self.first + 1;
            }

            self.pivot += 1;
            if self.pivot < self.graph.node_count {
                self.load_pivot(self.pivot);
            }
        }
        None
    }
}

/// Result of `count_triangles`; the optional tallies are present only when
/// requested
#[derive(Debug, Clone, Default)]
pub struct TriangleCounts {
    pub total: Count,
    pub per_vertex: Option<Vec<Count>>,
    pub per_edge: Option<Vec<Count>>,
}

/// Count triangles, optionally tallying each vertex and each edge slot of
/// the traversed graph
pub fn count_triangles(
    graph: &CompressedGraph,
    traversal: Traversal<'_>,
    per_vertex: bool,
    per_edge: bool,
) -> TriangleCounts {
    let mut counts = TriangleCounts {
        total: 0,
        per_vertex: per_vertex.then(|| vec![0; graph.node_count]),
        per_edge: per_edge.then(|| vec![0; graph.slot_count()]),
    };

    for t in TriangleIter::new(graph, traversal) {
        counts.total += 1;
        if let Some(ref mut pv) = counts.per_vertex {
            pv[t.v as usize] += 1;
            pv[t.u as usize] += 1;
            pv[t.w as usize] += 1;
        }
        if let Some(ref mut pe) = counts.per_edge {
            pe[t.vu] += 1;
            pe[t.vw] += 1;
            pe[t.uw] += 1;
        }
    }

    counts
}

/// Triangle tallies keyed by vertex and by DAG slot.
///
/// `per_edge[e]` is the number of triangles through the undirected edge
/// stored at slot `e`, so both `per_vertex` and `per_edge` sum to
/// `3 * total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleInfo {
    pub total: Count,
    pub per_vertex: Vec<Count>,
    pub per_edge: Vec<Count>,
}

impl TriangleInfo {
    /// Enumerate the triangles of a DAG outlist, indexing `per_edge` by
    /// outlist slot
    pub fn from_dag(outlist: &CompressedGraph) -> Self {
        let counts = count_triangles(outlist, Traversal::Dag, true, true);
        log::debug!("Enumerated {} triangles", counts.total);
        Self {
            total: counts.total,
            per_vertex: counts.per_vertex.unwrap_or_default(),
            per_edge: counts.per_edge.unwrap_or_default(),
        }
    }

    /// Re-key the per-edge tallies by inlist slot
    pub fn mirror_to_inlist(&self, dag: &DegreeOrderedDag) -> Self {
        let inlist = &dag.inlist;
        let mut per_edge = vec![0; inlist.slot_count()];

        for v in 0..inlist.node_count {
            for slot in inlist.edge_range(v) {
                let u = inlist.edges[slot] as usize;
                let out_slot = dag
                    .outlist
                    .edge_index(u, v as u32)
                    .unwrap_or_else(|| panic!("inlist edge {}<-{} missing from outlist", v, u));
                per_edge[slot] = self.per_edge[out_slot];
            }
        }

        Self {
            total: self.total,
            per_vertex: self.per_vertex.clone(),
            per_edge,
        }
    }
}

/// Third vertices of every triangle, grouped by the outlist slot of the
/// opposite edge and sorted within each group
#[derive(Debug, Clone)]
pub struct TriangleList {
    pub offsets: Vec<usize>,
    pub third: Vec<u32>,
}

impl TriangleList {
    pub fn build(outlist: &CompressedGraph, info: &TriangleInfo) -> Self {
        let mut offsets = Vec::with_capacity(info.per_edge.len() + 1);
        offsets.push(0);
        let mut offset = 0usize;
        for &count in &info.per_edge {
            offset += count as usize;
            offsets.push(offset);
        }

        let mut third = vec![0u32; offset];
        let mut cursor: Vec<usize> = offsets[..offsets.len() - 1].to_vec();
        for t in TriangleIter::over_dag(outlist) {
            for (edge, vertex) in [(t.vu, t.w), (t.vw, t.u), (t.uw, t.v)] {
                third[cursor[edge]] = vertex;
                cursor[edge] += 1;
            }
        }

        for e in 0..info.per_edge.len() {
            third[offsets[e]..offsets[e + 1]].sort_unstable();
        }

        Self { offsets, third }
    }

    /// Third vertices of the triangles on outlist slot `edge`
    pub fn group(&self, edge: usize) -> &[u32] {
        &self.third[self.offsets[edge]..self.offsets[edge + 1]]
    }

    /// Total number of stored (edge, third vertex) entries
    pub fn len(&self) -> usize {
        self.third.len()
    }

    pub fn is_empty(&self) -> bool {
        self.third.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::ordering::{degree_ordered, prepare};

    fn graph_from(n: usize, edges: &[(u32, u32)]) -> CompressedGraph {
        let mut builder = GraphBuilder::with_nodes(n);
        for &(u, v) in edges {
            builder.add_edge(u, v);
        }
        builder.build().unwrap()
    }

    fn k4() -> CompressedGraph {
        graph_from(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
    }

    #[test]
    fn test_dag_iterator_visits_each_triangle_once() {
        let prepared = prepare(&k4());
        let mut found: Vec<(u32, u32, u32)> = TriangleIter::over_dag(&prepared.dag.outlist)
            .map(|t| (t.v, t.u, t.w))
            .collect();
        found.sort_unstable();
        assert_eq!(found, vec![(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)]);
    }

    #[test]
    fn test_directed_input_against_the_degree_order() {
        // 1 -> 0, 2 -> 0, 2 -> 1: all total degrees tie, so the id order
        // runs against every stored edge
        let outlist = CompressedGraph::from_adjacency(vec![vec![], vec![0], vec![0, 1]], true);
        let inlist = CompressedGraph::from_adjacency(vec![vec![1, 2], vec![2], vec![]], true);

        let found: Vec<Triangle> = TriangleIter::new(&outlist, Traversal::DegreeOrdered { inlist: Some(&inlist) }).collect();
        assert_eq!(found.len(), 1);
        let t = found[0];
        assert_eq!((t.v, t.u, t.w), (0, 1, 2));
        assert_eq!((t.vu, t.vw, t.uw), (0, 1, 2));
    }

    #[test]
    fn test_directed_input_with_mixed_edge_directions() {
        // 0 -> 1, 0 -> 2, 2 -> 1: the closing edge points from w back to u
        let outlist = CompressedGraph::from_adjacency(vec![vec![1, 2], vec![], vec![1]], true);
        let inlist = CompressedGraph::from_adjacency(vec![vec![], vec![0, 2], vec![0]], true);

        let counts = count_triangles(&outlist, Traversal::DegreeOrdered { inlist: Some(&inlist) }, true, true);
        assert_eq!(counts.total, 1);
        assert_eq!(counts.per_edge.unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_edge_indices_match_endpoints() {
        let prepared = prepare(&graph_from(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]));
        let out = &prepared.dag.outlist;
        for t in TriangleIter::over_dag(out) {
            assert_eq!(out.edges[t.vu], t.u);
            assert_eq!(out.edges[t.vw], t.w);
            assert_eq!(out.edges[t.uw], t.w);
            assert!(out.edge_range(t.v as usize).contains(&t.vu));
            assert!(out.edge_range(t.u as usize).contains(&t.uw));
        }
    }

    #[test]
    fn test_on_the_fly_uses_original_indices() {
        // Hub 0 has the highest degree, so it is never the pivot
        let g = graph_from(5, &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (3, 4)]);
        let traversal = Traversal::DegreeOrdered { inlist: None };
        let triangles: Vec<Triangle> = TriangleIter::new(&g, traversal).collect();

        assert_eq!(triangles.len(), 2);
        for t in &triangles {
            assert_ne!(t.v, 0);
            assert_eq!(t.w, 0);
            assert_eq!(g.edges[t.vu], t.u);
            assert_eq!(g.edges[t.vw], t.w);
            assert_eq!(g.edges[t.uw], t.w);
        }
    }

    #[test]
    fn test_on_the_fly_matches_dag_totals() {
        let prepared = prepare(&graph_from(
            6,
            &[(0, 1), (0, 2), (1, 2), (2, 3), (1, 3), (3, 4), (4, 5), (5, 3), (0, 5)],
        ));
        let fly = count_triangles(&prepared.graph, Traversal::DegreeOrdered { inlist: None }, true, true);
        let info = TriangleInfo::from_dag(&prepared.dag.outlist);

        assert_eq!(fly.total, info.total);
        assert_eq!(fly.per_vertex.as_ref().unwrap(), &info.per_vertex);
        let pe = fly.per_edge.unwrap();
        assert_eq!(pe.iter().sum::<Count>(), 3 * fly.total);
    }

    #[test]
    #[should_panic(expected = "requires its inlist")]
    fn test_directed_without_inlist_panics() {
        let dag = degree_ordered(&k4());
        let _ = TriangleIter::new(&dag.outlist, Traversal::DegreeOrdered { inlist: None });
    }

    #[test]
    fn test_directed_with_inlist_is_accepted() {
        let dag = degree_ordered(&k4());
        let counts = count_triangles(
            &dag.outlist,
            Traversal::DegreeOrdered { inlist: Some(&dag.inlist) },
            false,
            false,
        );
        assert_eq!(counts.total, 4);
        assert!(counts.per_vertex.is_none());
    }

    #[test]
    fn test_triangle_info_sums() {
        let prepared = prepare(&k4());
        let info = TriangleInfo::from_dag(&prepared.dag.outlist);
        assert_eq!(info.total, 4);
        assert_eq!(info.per_vertex, vec![3, 3, 3, 3]);
        assert_eq!(info.per_edge, vec![2; 6]);
    }

    #[test]
    fn test_mirror_to_inlist_copies_edge_counts() {
        let prepared = prepare(&graph_from(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]));
        let dag = &prepared.dag;
        let info = TriangleInfo::from_dag(&dag.outlist);
        let mirrored = info.mirror_to_inlist(dag);

        assert_eq!(mirrored.per_edge.len(), dag.inlist.slot_count());
        assert_eq!(mirrored.per_edge.iter().sum::<Count>(), info.per_edge.iter().sum::<Count>());
        for v in 0..dag.node_count() {
            for slot in dag.inlist.edge_range(v) {
                let u = dag.inlist.edges[slot] as usize;
                let out = dag.outlist.edge_index(u, v as u32).unwrap();
                assert_eq!(mirrored.per_edge[slot], info.per_edge[out]);
            }
        }
    }

    #[test]
    fn test_triangle_list_groups_are_sorted_third_vertices() {
        let prepared = prepare(&k4());
        let dag = &prepared.dag;
        let info = TriangleInfo::from_dag(&dag.outlist);
        let list = TriangleList::build(&dag.outlist, &info);

        assert_eq!(list.len(), 12);
        let e01 = dag.forward_edge(0, 1).unwrap();
        assert_eq!(list.group(e01), &[2, 3]);
        let e23 = dag.forward_edge(2, 3).unwrap();
        assert_eq!(list.group(e23), &[0, 1]);
    }
}
