#![allow(dead_code)]

use motif_census::graph::builder::GraphBuilder;
use motif_census::graph::CompressedGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn graph_from(n: usize, edges: &[(u32, u32)]) -> CompressedGraph {
    let mut builder = GraphBuilder::with_nodes(n);
    for &(u, v) in edges {
        builder.add_edge(u, v);
    }
    builder.build().unwrap()
}

pub fn complete(n: u32) -> CompressedGraph {
    let edges: Vec<_> = (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v))).collect();
    graph_from(n as usize, &edges)
}

pub fn cycle(n: u32) -> CompressedGraph {
    let edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    graph_from(n as usize, &edges)
}

/// Erdos-Renyi G(n, p) edge list
pub fn random_edges(n: usize, p: f64, rng: &mut StdRng) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for u in 0..n as u32 {
        for v in (u + 1)..n as u32 {
            if rng.gen_bool(p) {
                edges.push((u, v));
            }
        }
    }
    edges
}

pub fn random_graph(n: usize, p: f64, seed: u64) -> CompressedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    graph_from(n, &random_edges(n, p, &mut rng))
}

pub fn as_counts(values: &[f64]) -> Vec<i64> {
    values.iter().map(|&x| x.round() as i64).collect()
}
