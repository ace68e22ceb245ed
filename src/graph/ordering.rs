//! Vertex orderings and the acyclic orientations built from them

use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use crate::graph::CompressedGraph;

/// Acyclic orientation of an undirected graph.
///
/// `outlist` holds each edge once, at its lower-ordered endpoint. `inlist`
/// holds the same edge at its higher-ordered endpoint. Both are sorted by id.
#[derive(Debug, Clone)]
pub struct DegreeOrderedDag {
    pub outlist: CompressedGraph,
    pub inlist: CompressedGraph,
}

impl DegreeOrderedDag {
    pub fn node_count(&self) -> usize {
        self.outlist.node_count
    }

    /// Degree of `v` in the underlying undirected graph
    pub fn total_degree(&self, v: usize) -> usize {
        self.outlist.degree(v) + self.inlist.degree(v)
    }

    /// Outlist slot storing the undirected edge {a, b}
    pub fn forward_edge(&self, a: u32, b: u32) -> Option<usize> {
        self.outlist
            .edge_index(a as usize, b)
            .or_else(|| self.outlist.edge_index(b as usize, a))
    }

    /// Whether a and b are adjacent in either direction
    pub fn connected(&self, a: u32, b: u32) -> bool {
        self.outlist.has_edge(a as usize, b) || self.outlist.has_edge(b as usize, a)
    }

    /// True when every edge points from a lower id to a higher id, which is
    /// the case for a degree-ordered DAG over a rank-labelled graph
    pub fn is_rank_ordered(&self) -> bool {
        (0..self.node_count()).all(|v| {
            self.outlist.neighbors(v).iter().all(|&u| u as usize > v)
                && self.inlist.neighbors(v).iter().all(|&u| (u as usize) < v)
        })
    }
}

/// A rank-labelled graph together with its degree-ordered DAG
#[derive(Debug, Clone)]
pub struct PreparedGraph {
    pub graph: CompressedGraph,
    pub dag: DegreeOrderedDag,
    /// New label of each original vertex
    pub rank: Vec<u32>,
}

/// Position of each vertex when sorted by (degree, id)
pub fn degree_rank(graph: &CompressedGraph) -> Vec<u32> {
    let mut rank = vec![0u32; graph.node_count];
    let order = (0..graph.node_count).sorted_by_key(|&v| (graph.degree(v), v));
    for (position, v) in order.enumerate() {
        rank[v] = position as u32;
    }
    rank
}

/// Relabel vertices so that each vertex's id is its rank by (degree, id).
///
/// Returns the relabelled graph and the old-to-new mapping.
pub fn rename_by_degree_order(graph: &CompressedGraph) -> (CompressedGraph, Vec<u32>) {
    let rank = degree_rank(graph);

    let mut lists = vec![Vec::new(); graph.node_count];
    for v in 0..graph.node_count {
        lists[rank[v] as usize] = graph
            .neighbors(v)
            .iter()
            .map(|&u| rank[u as usize])
            .collect();
    }

    let mut relabelled = CompressedGraph::from_adjacency(lists, graph.directed);
    if let Some(ref ids) = graph.node_ids {
        let mut renamed = vec![String::new(); ids.len()];
        for (v, id) in ids.iter().enumerate() {
            renamed[rank[v] as usize] = id.clone();
        }
        relabelled.node_ids = Some(renamed);
    }

    (relabelled, rank)
}

/// Whether ids already follow non-decreasing degree
pub fn is_rank_labelled(graph: &CompressedGraph) -> bool {
    (1..graph.node_count).all(|v| graph.degree(v - 1) <= graph.degree(v))
}

/// Orient every edge from the lower (degree, id) endpoint to the higher one
pub fn degree_ordered(graph: &CompressedGraph) -> DegreeOrderedDag {
    debug_assert!(!graph.directed, "orientation expects the full undirected view");
    let position: Vec<usize> = degree_rank(graph).into_iter().map(|r| r as usize).collect();
    orient_by(graph, &position)
}

/// Orient every edge along a core-peeling order: repeatedly remove a vertex of
/// minimum remaining degree, the lowest id first among ties. Earlier-removed
/// endpoints point at later ones, so no out-degree exceeds the degeneracy.
pub fn degeneracy_ordered(graph: &CompressedGraph) -> DegreeOrderedDag {
    let n = graph.node_count;
    let mut remaining: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
    let mut queue: BinaryHeap<Reverse<(usize, u32)>> =
        (0..n).map(|v| Reverse((remaining[v], v as u32))).collect();

    let mut removed = vec![false; n];
    let mut position = vec![0usize; n];
    let mut step = 0usize;

    while let Some(Reverse((degree, v))) = queue.pop() {
        let v = v as usize;
        // Entries go stale when a vertex is removed or its degree drops
        if removed[v] || remaining[v] != degree {
            continue;
        }

        removed[v] = true;
        position[v] = step;
        step += 1;
        for &u in graph.neighbors(v) {
            let u = u as usize;
            if !removed[u] {
                remaining[u] -= 1;
                queue.push(Reverse((remaining[u], u as u32)));
            }
        }
    }

    orient_by(graph, &position)
}

fn orient_by(graph: &CompressedGraph, position: &[usize]) -> DegreeOrderedDag {
    let n = graph.node_count;
    let mut out = vec![Vec::new(); n];
    let mut inn = vec![Vec::new(); n];

    for v in 0..n {
        for &u in graph.neighbors(v) {
            if position[v] < position[u as usize] {
                out[v].push(u);
            } else {
                inn[v].push(u);
            }
        }
    }

    DegreeOrderedDag {
        outlist: CompressedGraph::from_adjacency(out, true),
        inlist: CompressedGraph::from_adjacency(inn, true),
    }
}

/// Relabel by degree rank and build the degree-ordered DAG
pub fn prepare(graph: &CompressedGraph) -> PreparedGraph {
    log::info!("Relabeling graph by degree order");
    let (relabelled, rank) = rename_by_degree_order(graph);

    log::info!("Creating degree-ordered DAG");
    let dag = degree_ordered(&relabelled);
    log::debug!(
        "DAG max out-degree {}, max in-degree {}, {} bytes across graph and DAG",
        dag.outlist.max_degree(),
        dag.inlist.max_degree(),
        relabelled.memory_usage() + dag.outlist.memory_usage() + dag.inlist.memory_usage()
    );

    PreparedGraph { graph: relabelled, dag, rank }
}
