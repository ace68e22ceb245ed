//! Degree sums and 3-vertex counts

use serde::{Serialize, Deserialize};
use crate::census::{choose2, Count};
use crate::graph::CompressedGraph;

/// Vertex, edge and wedge totals of an undirected graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphTotals {
    pub nodes: Count,
    pub edges: Count,
    pub wedges: Count,
}

impl GraphTotals {
    pub fn of(graph: &CompressedGraph) -> Self {
        let mut degree_sum = 0;
        let mut wedges = 0;
        for v in 0..graph.node_count {
            let d = graph.degree(v) as Count;
            degree_sum += d;
            wedges += choose2(d);
        }

        Self {
            nodes: graph.node_count as Count,
            edges: degree_sum / 2,
            wedges,
        }
    }
}

/// Non-induced 3-vertex counts: independent triples, edges, wedges,
/// triangles
pub fn three_vertex(totals: &GraphTotals, triangles: Count) -> [f64; 4] {
    let n = totals.nodes as f64;
    let m = totals.edges as f64;

    [
        n * (n - 1.0) * (n - 2.0) / 6.0,
        m * (n - 2.0),
        totals.wedges as f64,
        triangles as f64,
    ]
}
