//! Patterns that extend a 4-cycle or a 4-clique by one vertex

use crate::census::scratch::VertexScratch;
use crate::census::triangles::TriangleInfo;
use crate::census::Count;
use crate::graph::{CompressedGraph, DegreeOrderedDag};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleBased {
    pub tailed_four_cycles: Count,
    /// 4-cycle with a triangle on one side (the house)
    pub hatted_four_cycles: Count,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliqueBased {
    pub tailed_four_cliques: Count,
    pub hatted_four_cliques: Count,
    pub five_cliques: Count,
}

/// Tailed and hatted 4-cycles.
///
/// Every 4-cycle is walked from its highest vertex i as two wedges
/// i <- j -> k / i <- j <- k landing on the same k. `via_out` and `via_in`
/// count, per k, the wedges whose second edge leaves j forward or backward.
/// Tails are weighed by the spare degree of the cycle vertices, hats by the
/// triangles on the wedge edges. `in_info` is `out_info` keyed by inlist
/// slot.
pub fn four_cycle_based(
    dag: &DegreeOrderedDag,
    out_info: &TriangleInfo,
    in_info: &TriangleInfo,
    chordal_cycles: Count,
    via_out: &mut VertexScratch,
    via_in: &mut VertexScratch,
) -> CycleBased {
    let (outlist, inlist) = (&dag.outlist, &dag.inlist);

    let mut hat_out = 0;
    let mut hat_in = 0;
    let mut hat_mixed = 0;
    let mut tail_pairs = 0;
    let mut tail_mixed = 0;

    for i in 0..inlist.node_count {
        let di = dag.total_degree(i) as Count;

        for &j in inlist.neighbors(i) {
            for &k in outlist.neighbors(j as usize) {
                if k as usize != i {
                    via_out.bump(k);
                }
            }
            for &k in inlist.neighbors(j as usize) {
                via_in.bump(k);
            }
        }

        for pos in inlist.edge_range(i) {
            let j = inlist.edges[pos] as usize;
            let dj = dag.total_degree(j) as Count;

            for next in outlist.edge_range(j) {
                let k = outlist.edges[next];
                if k as usize == i {
                    continue;
                }
                let dk = dag.total_degree(k as usize) as Count;
                let wedge_tris = in_info.per_edge[pos] + out_info.per_edge[next];
                let out_hits = via_out.get(k);
                let in_hits = via_in.get(k);

                hat_out += (out_hits - 1) * wedge_tris;
                hat_mixed += in_hits * wedge_tris;
                if (k as usize) < i {
                    tail_pairs += ((dk - 2) + (di - 2) + 2 * (dj - 2)) * (out_hits - 1);
                }
                tail_mixed += (dk - 2 + di - 2 + dj - 2) * in_hits;
            }

            for next in inlist.edge_range(j) {
                let k = inlist.edges[next];
                let dk = dag.total_degree(k as usize) as Count;
                let wedge_tris = in_info.per_edge[pos] + in_info.per_edge[next];
                let out_hits = via_out.get(k);
                let in_hits = via_in.get(k);

                hat_in += (in_hits - 1) * wedge_tris;
                hat_mixed += out_hits * wedge_tris;
                tail_pairs += ((dk - 2) + (di - 2) + 2 * (dj - 2)) * (in_hits - 1);
                tail_mixed += (dj - 2) * out_hits;
            }
        }

        via_out.clear();
        via_in.clear();
    }

    let tailed = (tail_pairs + 2 * tail_mixed + 1).div_euclid(2);
    let hatted = hat_out / 2 + hat_in + hat_mixed;

    CycleBased {
        tailed_four_cycles: tailed - 2 * chordal_cycles,
        hatted_four_cycles: hatted - 4 * chordal_cycles,
    }
}

/// Tailed and hatted 4-cliques and 5-cliques.
///
/// Nests the 4-clique search one level deeper: for each 4-clique
/// (i, j, k, l), the later triangle ends adjacent to k are 4-clique ends,
/// and an edge between two of them closes a 5-clique.
pub fn four_clique_based(
    graph: &CompressedGraph,
    outlist: &CompressedGraph,
    info: &TriangleInfo,
) -> CliqueBased {
    let mut result = CliqueBased::default();
    // (vertex, slot i -> vertex, slot j -> vertex)
    let mut tri_ends: Vec<(u32, usize, usize)> = Vec::new();
    let mut clique_ends: Vec<u32> = Vec::new();

    for i in 0..outlist.node_count {
        let di = graph.degree(i) as Count;
        for ij in outlist.edge_range(i) {
            let j = outlist.edges[ij] as usize;
            let dj = graph.degree(j) as Count;

            tri_ends.clear();
            for ik in ij + 1..outlist.offsets[i + 1] as usize {
                let k = outlist.edges[ik];
                if let Some(jk) = outlist.edge_index(j, k) {
                    tri_ends.push((k, ik, jk));
                }
            }

            for (pos, &(k, ik, jk)) in tri_ends.iter().enumerate() {
                let dk = graph.degree(k as usize) as Count;
                clique_ends.clear();

                for &(l, il, jl) in &tri_ends[pos + 1..] {
                    let Some(kl) = outlist.edge_index(k as usize, l) else {
                        continue;
                    };
                    clique_ends.push(l);

                    let dl = graph.degree(l as usize) as Count;
                    result.tailed_four_cliques += di + dj + dk + dl - 12;

                    let e = &info.per_edge;
                    result.hatted_four_cliques += e[ij] + e[ik] + e[il] + e[jk] + e[jl] + e[kl] - 12;
                }

                for (pos_l, &l) in clique_ends.iter().enumerate() {
                    let out_l = outlist.neighbors(l as usize);
                    result.five_cliques += clique_ends[pos_l + 1..]
                        .iter()
                        .filter(|o| out_l.binary_search(o).is_ok())
                        .count() as Count;
                }
            }
        }
    }

    result
}
