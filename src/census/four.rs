//! Non-induced 4-vertex counters

use serde::{Serialize, Deserialize};
use crate::census::scratch::VertexScratch;
use crate::census::three::GraphTotals;
use crate::census::triangles::TriangleInfo;
use crate::census::{choose2, choose3, Count};
use crate::graph::{CompressedGraph, DegreeOrderedDag};

/// The six connected 4-vertex counts, which the 5-vertex formulas correct
/// against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPatternCounts {
    pub three_stars: Count,
    pub three_paths: Count,
    pub tailed_triangles: Count,
    pub four_cycles: Count,
    pub chordal_cycles: Count,
    pub four_cliques: Count,
}

impl FourPatternCounts {
    /// Read the connected slots back out of a full 4-vertex vector
    pub fn from_slots(four: &[f64; 11]) -> Self {
        Self {
            three_stars: four[5] as Count,
            three_paths: four[6] as Count,
            tailed_triangles: four[7] as Count,
            four_cycles: four[8] as Count,
            chordal_cycles: four[9] as Count,
            four_cliques: four[10] as Count,
        }
    }
}

/// Σ_v C(d(v), 3)
pub fn three_stars(graph: &CompressedGraph) -> Count {
    (0..graph.node_count)
        .map(|v| choose3(graph.degree(v) as Count))
        .sum()
}

/// Σ_v (d(v) - 2) · t(v)
pub fn tailed_triangles(graph: &CompressedGraph, info: &TriangleInfo) -> Count {
    (0..graph.node_count)
        .map(|v| (graph.degree(v) as Count - 2) * info.per_vertex[v])
        .sum()
}

/// Σ over edges of (d(u) - 1)(d(v) - 1), less the three paths hidden in
/// each triangle
pub fn three_paths(graph: &CompressedGraph, outlist: &CompressedGraph, triangles: Count) -> Count {
    let mut total = 0;
    for i in 0..outlist.node_count {
        let di = graph.degree(i) as Count;
        for &j in outlist.neighbors(i) {
            let dj = graph.degree(j as usize) as Count;
            total += (di - 1) * (dj - 1);
        }
    }
    total - 3 * triangles
}

/// Σ_e C(t(e), 2): two triangles on a shared edge close a chordal cycle
pub fn chordal_cycles(info: &TriangleInfo) -> Count {
    info.per_edge.iter().map(|&t| choose2(t)).sum()
}

/// Count 4-cycles by colliding wedges that end at the same vertex.
///
/// For each pivot i, every wedge i <- j -> k with k < i and every wedge
/// i <- j <- k bumps k. Each cycle is seen once, from its highest vertex,
/// through both of the wedges it splits into.
pub fn four_cycles(dag: &DegreeOrderedDag, scratch: &mut VertexScratch) -> Count {
    let (outlist, inlist) = (&dag.outlist, &dag.inlist);
    let mut total = 0;

    for i in 0..inlist.node_count {
        for &j in inlist.neighbors(i) {
            for &k in outlist.neighbors(j as usize) {
                if (k as usize) < i {
                    scratch.bump(k);
                }
            }
            for &k in inlist.neighbors(j as usize) {
                scratch.bump(k);
            }
        }

        for &k in scratch.touched() {
            total += choose2(scratch.get(k));
        }
        scratch.clear();
    }

    debug_assert!(scratch.is_clean());
    total
}

/// Count 4-cliques by intersecting triangle ends.
///
/// For every DAG edge i -> j, the out-neighbors of i after j that j also
/// points to are the triangle ends. Any edge between two triangle ends closes
/// a 4-clique. The membership test scans whichever side is shorter.
pub fn four_cliques(outlist: &CompressedGraph) -> Count {
    let mut total = 0;
    let mut tri_ends: Vec<u32> = Vec::new();

    for i in 0..outlist.node_count {
        let out_i = outlist.neighbors(i);
        for (pos_j, &j) in out_i.iter().enumerate() {
            tri_ends.clear();
            tri_ends.extend(
                out_i[pos_j + 1..]
                    .iter()
                    .copied()
                    .filter(|&k| outlist.has_edge(j as usize, k)),
            );

            for (pos_k, &k) in tri_ends.iter().enumerate() {
                total += closing_edges(outlist.neighbors(k as usize), &tri_ends[pos_k + 1..]);
            }
        }
    }

    total
}

/// Number of vertices present in both sorted lists, searching the longer one
pub(crate) fn closing_edges(out_k: &[u32], rest: &[u32]) -> Count {
    let found = if out_k.len() >= rest.len() {
        rest.iter().filter(|l| out_k.binary_search(l).is_ok()).count()
    } else {
        out_k.iter().filter(|l| rest.binary_search(l).is_ok()).count()
    };
    found as Count
}

/// Compute the six connected 4-vertex counts
pub fn count_four_patterns(
    graph: &CompressedGraph,
    dag: &DegreeOrderedDag,
    info: &TriangleInfo,
    scratch: &mut VertexScratch,
) -> FourPatternCounts {
    log::info!("Getting easy four vertex patterns");
    let three_stars = three_stars(graph);
    let three_paths = three_paths(graph, &dag.outlist, info.total);
    let tailed_triangles = tailed_triangles(graph, info);
    let chordal_cycles = chordal_cycles(info);

    log::info!("Getting four cycles");
    let four_cycles = four_cycles(dag, scratch);

    log::info!("Getting four cliques");
    let four_cliques = four_cliques(&dag.outlist);

    FourPatternCounts {
        three_stars,
        three_paths,
        tailed_triangles,
        four_cycles,
        chordal_cycles,
        four_cliques,
    }
}

/// Assemble the full non-induced 4-vertex vector
pub fn four_vertex(totals: &GraphTotals, triangles: Count, counts: &FourPatternCounts) -> [f64; 11] {
    let n = totals.nodes as f64;
    let m = totals.edges as f64;
    let w = totals.wedges as f64;
    let t = triangles as f64;

    [
        n * (n - 1.0) * (n - 2.0) * (n - 3.0) / 24.0,
        m * ((n - 2.0) * (n - 3.0) / 2.0),
        m * (m - 1.0) / 2.0 - w,
        w * (n - 3.0),
        t * (n - 3.0),
        counts.three_stars as f64,
        counts.three_paths as f64,
        counts.tailed_triangles as f64,
        counts.four_cycles as f64,
        counts.chordal_cycles as f64,
        counts.four_cliques as f64,
    ]
}
