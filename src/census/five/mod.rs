//! Non-induced 5-vertex counters
//!
//! Slots 0..13 cover the disconnected patterns and follow from lower-order
//! totals. Slots 13..34 are the 21 connected patterns, each produced by one
//! of the submodules.

pub mod trees;
pub mod from_triangles;
pub mod cycle_clique;
pub mod five_cycle;
pub mod collisions;
pub mod almost_clique;

use crate::census::four::FourPatternCounts;
use crate::census::Count;
use crate::census::scratch::VertexScratch;
use crate::census::three::GraphTotals;
use crate::census::triangles::{TriangleInfo, TriangleList};
use crate::graph::{CompressedGraph, DegreeOrderedDag};

/// Non-induced 5-vertex vector.
///
/// `counts` are the exact connected 4-vertex counts of the same graph.
/// `first` and `second` are clean scratch buffers sized to the graph and are
/// handed back clean.
pub fn five_vertex(
    graph: &CompressedGraph,
    dag: &DegreeOrderedDag,
    info: &TriangleInfo,
    counts: &FourPatternCounts,
    first: &mut VertexScratch,
    second: &mut VertexScratch,
) -> [f64; 34] {
    let totals = GraphTotals::of(graph);
    let counts = *counts;
    let mut five = disconnected_five(&totals, info.total, &counts);

    log::info!("Getting all triangles");
    let list = TriangleList::build(&dag.outlist, info);
    log::info!("Also getting reverse triangle info");
    let in_info = info.mirror_to_inlist(dag);

    log::info!("Counting trees");
    let trees = trees::five_trees(graph, &counts, info.total);

    log::info!("Counting triangle based patterns");
    let extensions = from_triangles::triangle_extensions(graph, &dag.outlist, info, &counts);
    let hourglass = from_triangles::hourglass(&dag.outlist, info, None);
    let stingray = from_triangles::stingray(dag, info, None);
    let stellate = from_triangles::stellate_trident(info, None);
    let strip = from_triangles::triangle_strip(dag, info, counts.four_cliques);
    let cobra = from_triangles::cobra(dag, counts.four_cliques);

    log::info!("Counting 4-cycle and 4-clique based patterns");
    let cycle_based = cycle_clique::four_cycle_based(
        dag,
        info,
        &in_info,
        counts.chordal_cycles,
        first,
        second,
    );
    let clique_based = cycle_clique::four_clique_based(graph, &dag.outlist, info);

    log::info!("Counting five cycles");
    let five_cycles = five_cycle::five_cycles(dag, first);

    log::info!("Counting collision patterns");
    let collisions = collisions::wedge_collisions(graph, dag, &list, first, second);

    log::info!("Counting almost cliques");
    let almost = almost_clique::almost_five_cliques(graph);

    let connected = [
        trees.four_stars,
        trees.prongs,
        trees.four_paths,
        extensions.fork_tailed,
        extensions.long_tailed,
        extensions.double_tailed,
        cycle_based.tailed_four_cycles,
        five_cycles,
        hourglass,
        cobra,
        stingray,
        cycle_based.hatted_four_cycles,
        collisions.three_wedge,
        stellate,
        clique_based.tailed_four_cliques,
        strip,
        collisions.chordal_wedge,
        collisions.wheel,
        clique_based.hatted_four_cliques,
        almost,
        clique_based.five_cliques,
    ];
    for (slot, value) in five[13..].iter_mut().zip(connected) {
        *slot = value as f64;
    }

    five
}

/// Slots 0..13 of the 5-vertex vector; the connected slots are left zero
pub fn disconnected_five(
    totals: &GraphTotals,
    triangles: Count,
    counts: &FourPatternCounts,
) -> [f64; 34] {
    let n = totals.nodes as f64;
    let m = totals.edges as f64;
    let w = totals.wedges as f64;
    let t = triangles as f64;

    let mut five = [0.0; 34];
    five[0] = n * (n - 1.0) * (n - 2.0) * (n - 3.0) * (n - 4.0) / 120.0;
    five[1] = m * ((n - 2.0) * (n - 3.0) * (n - 4.0)) / 6.0;
    five[2] = (m * (m - 1.0) / 2.0 - w) * (n - 4.0);
    five[3] = w * ((n - 3.0) * (n - 4.0)) / 2.0;
    five[4] = t * ((n - 3.0) * (n - 4.0)) / 2.0;
    let connected_four = [
        counts.three_stars,
        counts.three_paths,
        counts.tailed_triangles,
        counts.four_cycles,
        counts.chordal_cycles,
        counts.four_cliques,
    ];
    for (slot, count) in five[5..11].iter_mut().zip(connected_four) {
        *slot = count as f64 * (n - 4.0);
    }
    five[11] = w * (m - 2.0)
        - 3.0 * t
        - 3.0 * counts.three_stars as f64
        - 2.0 * counts.three_paths as f64;
    five[12] = t * (m - 3.0) - counts.tailed_triangles as f64;

    five
}
