//! 5-vertex patterns built from triangle tallies
//!
//! Each count here is one identity over `TriangleInfo` and degrees. The
//! hourglass, stingray and stellate trident can also report how the total is
//! distributed over vertices or DAG slots.

use crate::census::four::FourPatternCounts;
use crate::census::triangles::{TriangleInfo, TriangleIter};
use crate::census::{choose2, choose3, czsub, Count};
use crate::graph::{CompressedGraph, DegreeOrderedDag};

/// Triangles with two pendant edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangleExtensions {
    /// Both tails on the same triangle vertex
    pub fork_tailed: Count,
    /// One tail extended by a second edge
    pub long_tailed: Count,
    /// Tails on two different triangle vertices
    pub double_tailed: Count,
}

pub fn triangle_extensions(
    graph: &CompressedGraph,
    outlist: &CompressedGraph,
    info: &TriangleInfo,
    counts: &FourPatternCounts,
) -> TriangleExtensions {
    let mut fork_tailed = 0;
    let mut long_tailed = 0;

    for i in 0..graph.node_count {
        let di = graph.degree(i) as Count;
        let ti = info.per_vertex[i];
        fork_tailed += ti * ((di - 2) * (di - 3)) / 2;

        for &j in graph.neighbors(i) {
            long_tailed += ti * (graph.degree(j as usize) as Count - 1);
        }
    }
    long_tailed -= 4 * counts.chordal_cycles + 6 * info.total + 2 * counts.tailed_triangles;

    let mut double_tailed = 0;
    for i in 0..outlist.node_count {
        let di = graph.degree(i) as Count;
        for e in outlist.edge_range(i) {
            let dj = graph.degree(outlist.edges[e] as usize) as Count;
            double_tailed += info.per_edge[e] * (di - 2) * (dj - 2);
        }
    }
    double_tailed -= 2 * counts.chordal_cycles;

    TriangleExtensions {
        fork_tailed,
        long_tailed,
        double_tailed,
    }
}

/// Two triangles meeting in a single vertex.
///
/// Pairs of triangles at a vertex, minus the pairs that share an edge. With
/// `per_vertex`, each hourglass is credited to its center.
pub fn hourglass(
    outlist: &CompressedGraph,
    info: &TriangleInfo,
    mut per_vertex: Option<&mut [Count]>,
) -> Count {
    if let Some(counts) = per_vertex.as_deref_mut() {
        counts.fill(0);
    }

    let mut total = 0;
    for u in 0..outlist.node_count {
        let c = choose2(info.per_vertex[u]);
        total += c;
        if let Some(counts) = per_vertex.as_deref_mut() {
            counts[u] += c;
        }

        for e in outlist.edge_range(u) {
            let v = outlist.edges[e] as usize;
            let shared = choose2(info.per_edge[e]);
            if let Some(counts) = per_vertex.as_deref_mut() {
                counts[u] -= shared;
                counts[v] -= shared;
            }
            total -= 2 * shared;
        }
    }

    total
}

/// Two triangles on a common spine edge plus a tail off one spine end.
///
/// For spine e = (u, v): C(t(e), 2) · (max(d(u) - 3, 0) + max(d(v) - 3, 0)).
/// With `per_edge`, each stingray is credited to its spine's outlist slot.
pub fn stingray(
    dag: &DegreeOrderedDag,
    info: &TriangleInfo,
    mut per_edge: Option<&mut [Count]>,
) -> Count {
    let outlist = &dag.outlist;
    if let Some(counts) = per_edge.as_deref_mut() {
        counts.fill(0);
    }

    let mut total = 0;
    for u in 0..outlist.node_count {
        let cu = czsub(dag.total_degree(u) as Count, 3);
        for e in outlist.edge_range(u) {
            let v = outlist.edges[e] as usize;
            let cv = czsub(dag.total_degree(v) as Count, 3);
            let c = choose2(info.per_edge[e]) * (cu + cv);
            total += c;
            if let Some(counts) = per_edge.as_deref_mut() {
                counts[e] = c;
            }
        }
    }

    total
}

/// Three triangles on one common edge: Σ_e C(t(e), 3)
pub fn stellate_trident(info: &TriangleInfo, mut per_edge: Option<&mut [Count]>) -> Count {
    if let Some(counts) = per_edge.as_deref_mut() {
        counts.fill(0);
    }

    let mut total = 0;
    for (e, &t) in info.per_edge.iter().enumerate() {
        let c = choose3(t);
        total += c;
        if let Some(counts) = per_edge.as_deref_mut() {
            counts[e] = c;
        }
    }
    total
}

/// Three triangles glued edge to edge in a row.
///
/// Each triangle is the middle of the strip, with wing triangles on two of
/// its edges. Wings that share their apex form a 4-clique instead; every
/// 4-clique is counted that way 12 times.
pub fn triangle_strip(dag: &DegreeOrderedDag, info: &TriangleInfo, four_cliques: Count) -> Count {
    assert!(dag.is_rank_ordered(), "triangle strip count needs a rank-ordered DAG");

    let mut total = 0;
    for t in TriangleIter::over_dag(&dag.outlist) {
        let c0 = czsub(info.per_edge[t.vu], 1);
        let c1 = czsub(info.per_edge[t.vw], 1);
        let c2 = czsub(info.per_edge[t.uw], 1);
        total += c0 * c1 + c0 * c2 + c1 * c2;
    }
    total - 12 * four_cliques
}

/// A chordal 4-cycle with a tail on one of the two vertices off the chord.
///
/// Per edge e: (t(e) - 1) · Σ over triangles on e of max(d(apex) - 2, 0).
/// A tail that lands on the other triangle's apex closes a 4-clique, which
/// contributes 12 times overall.
pub fn cobra(dag: &DegreeOrderedDag, four_cliques: Count) -> Count {
    assert!(dag.is_rank_ordered(), "cobra count needs a rank-ordered DAG");

    let outlist = &dag.outlist;
    let slack: Vec<Count> = (0..outlist.node_count)
        .map(|u| czsub(dag.total_degree(u) as Count, 2))
        .collect();

    let mut triangles = vec![0 as Count; outlist.slot_count()];
    let mut apex_slack = vec![0 as Count; outlist.slot_count()];
    for t in TriangleIter::over_dag(outlist) {
        triangles[t.vu] += 1;
        apex_slack[t.vu] += slack[t.w as usize];
        triangles[t.vw] += 1;
        apex_slack[t.vw] += slack[t.u as usize];
        triangles[t.uw] += 1;
        apex_slack[t.uw] += slack[t.v as usize];
    }

    let total: Count = apex_slack
        .iter()
        .zip(&triangles)
        .map(|(&s, &t)| s * czsub(t, 1))
        .sum();
    total - 12 * four_cliques
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::ordering::{degree_ordered, prepare, PreparedGraph};

    fn prepared(n: usize, edges: &[(u32, u32)]) -> PreparedGraph {
        let mut builder = GraphBuilder::with_nodes(n);
        for &(u, v) in edges {
            builder.add_edge(u, v);
        }
        prepare(&builder.build().unwrap())
    }

    fn hourglass_graph() -> PreparedGraph {
        prepared(5, &[(0, 1), (1, 2), (0, 2), (0, 3), (0, 4), (3, 4)])
    }

    #[test]
    fn test_hourglass_per_vertex_credits_center() {
        let p = hourglass_graph();
        let info = TriangleInfo::from_dag(&p.dag.outlist);
        let mut per_vertex = vec![7; 5];
        let total = hourglass(&p.dag.outlist, &info, Some(&mut per_vertex));

        assert_eq!(total, 1);
        assert_eq!(per_vertex.iter().sum::<Count>(), 1);
        // The center has degree 4 and so the highest rank
        assert_eq!(per_vertex[4], 1);
    }

    #[test]
    fn test_stingray_per_edge_sums_to_total() {
        let p = prepared(6, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (2, 4), (0, 5), (3, 5)]);
        let info = TriangleInfo::from_dag(&p.dag.outlist);
        let mut per_edge = vec![0; p.dag.outlist.slot_count()];
        let total = stingray(&p.dag, &info, Some(&mut per_edge));

        assert!(total > 0);
        assert_eq!(per_edge.iter().sum::<Count>(), total);
        assert_eq!(stingray(&p.dag, &info, None), total);
    }

    #[test]
    fn test_stellate_trident_on_book_graph() {
        // Three triangles sharing edge 0-1
        let p = prepared(5, &[(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4), (1, 4)]);
        let info = TriangleInfo::from_dag(&p.dag.outlist);
        let mut per_edge = vec![0; p.dag.outlist.slot_count()];

        assert_eq!(stellate_trident(&info, Some(&mut per_edge)), 1);
        assert_eq!(per_edge.iter().filter(|&&c| c == 1).count(), 1);
    }

    #[test]
    fn test_strip_and_cobra_on_strip_graph() {
        let p = prepared(5, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (2, 4), (3, 4)]);
        let info = TriangleInfo::from_dag(&p.dag.outlist);
        assert_eq!(triangle_strip(&p.dag, &info, 0), 1);
        // Each end triangle of the strip is a cobra head with the far vertex as tail
        assert_eq!(cobra(&p.dag, 0), 2);
    }

    #[test]
    #[should_panic(expected = "rank-ordered")]
    fn test_strip_rejects_unranked_dag() {
        let mut builder = GraphBuilder::with_nodes(4);
        for leaf in 1..4 {
            builder.add_edge(0, leaf);
        }
        let dag = degree_ordered(&builder.build().unwrap());
        let info = TriangleInfo::from_dag(&dag.outlist);
        triangle_strip(&dag, &info, 0);
    }
}
