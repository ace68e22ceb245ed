//! Whole-graph statistics reported alongside the census

use serde::{Serialize, Deserialize};
use crate::census::scratch::VertexScratch;
use crate::census::triangles::TriangleInfo;
use crate::graph::{CompressedGraph, DegreeOrderedDag};

/// Average local clustering coefficient of the vertices of one degree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeClustering {
    pub degree: usize,
    pub average_clustering: f64,
    pub vertices: u64,
}

/// Number of DAG vertices with a given out-degree and in-degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DagDegreeRow {
    pub degree: usize,
    pub out_vertices: u64,
    pub in_vertices: u64,
}

/// Vertex pairs sharing exactly `common` neighbors, and how many of them are
/// themselves adjacent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureBucket {
    pub common: usize,
    pub pairs: u64,
    pub closed: u64,
}

/// `dist[d]` = number of vertices of degree d, up to the maximum degree
pub fn degree_distribution(graph: &CompressedGraph) -> Vec<u64> {
    let mut dist = vec![0u64; graph.max_degree() + 1];
    for v in 0..graph.node_count {
        dist[graph.degree(v)] += 1;
    }
    dist
}

/// Clustering coefficient averaged per degree, for every degree present.
/// Vertices of degree below 2 have coefficient 0.
pub fn clustering_per_degree(graph: &CompressedGraph, dag: &DegreeOrderedDag) -> Vec<DegreeClustering> {
    log::info!("Computing clustering coefficient per degree");
    let info = TriangleInfo::from_dag(&dag.outlist);
    let dist = degree_distribution(graph);

    let mut sums = vec![0.0f64; dist.len()];
    for v in 0..graph.node_count {
        let d = graph.degree(v);
        if d >= 2 {
            sums[d] += 2.0 * info.per_vertex[v] as f64 / (d * (d - 1)) as f64;
        }
    }

    dist.iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(degree, &count)| DegreeClustering {
            degree,
            average_clustering: sums[degree] / count as f64,
            vertices: count,
        })
        .collect()
}

/// Out- and in-degree distributions of a DAG, one row per degree from 0 to
/// the largest out- or in-degree
pub fn dag_degree_distribution(dag: &DegreeOrderedDag) -> Vec<DagDegreeRow> {
    let out = degree_distribution(&dag.outlist);
    let inn = degree_distribution(&dag.inlist);

    (0..out.len().max(inn.len()))
        .map(|degree| DagDegreeRow {
            degree,
            out_vertices: out.get(degree).copied().unwrap_or(0),
            in_vertices: inn.get(degree).copied().unwrap_or(0),
        })
        .collect()
}

/// Common-neighbor closure profile over all vertex pairs with at least one
/// common neighbor
pub fn closure_profile(graph: &CompressedGraph) -> Vec<ClosureBucket> {
    log::info!("Computing common-neighbor closure profile");
    let mut common = VertexScratch::new(graph.node_count);
    let mut pairs = vec![0u64; graph.max_degree() + 1];
    let mut closed = vec![0u64; graph.max_degree() + 1];

    for i in 0..graph.node_count {
        for &j in graph.neighbors(i) {
            for &k in graph.neighbors(j as usize) {
                if k as usize > i {
                    common.bump(k);
                }
            }
        }

        for &k in common.touched() {
            let c = common.get(k) as usize;
            pairs[c] += 1;
            if graph.has_edge(i, k) {
                closed[c] += 1;
            }
        }
        common.clear();
    }

    pairs.iter()
        .zip(&closed)
        .enumerate()
        .filter(|&(_, (&p, _))| p > 0)
        .map(|(c, (&p, &cl))| ClosureBucket { common: c, pairs: p, closed: cl })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::ordering::prepare;

    fn graph_from(n: usize, edges: &[(u32, u32)]) -> CompressedGraph {
        let mut builder = GraphBuilder::with_nodes(n);
        for &(u, v) in edges {
            builder.add_edge(u, v);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_degree_distribution() {
        let g = graph_from(5, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(degree_distribution(&g), vec![1, 3, 0, 1]);
    }

    #[test]
    fn test_clustering_on_triangle_with_tail() {
        // Triangle 0-1-2 with a pendant 3 on vertex 2
        let p = prepare(&graph_from(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]));
        let rows = clustering_per_degree(&p.graph, &p.dag);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], DegreeClustering { degree: 1, average_clustering: 0.0, vertices: 1 });
        assert_eq!(rows[1], DegreeClustering { degree: 2, average_clustering: 1.0, vertices: 2 });
        assert_eq!(rows[2].degree, 3);
        assert!((rows[2].average_clustering - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_dag_degree_rows_cover_both_lists() {
        let p = prepare(&graph_from(4, &[(0, 1), (0, 2), (0, 3)]));
        let rows = dag_degree_distribution(&p.dag);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], DagDegreeRow { degree: 0, out_vertices: 1, in_vertices: 3 });
        assert_eq!(rows[1], DagDegreeRow { degree: 1, out_vertices: 3, in_vertices: 0 });
        assert_eq!(rows[3], DagDegreeRow { degree: 3, out_vertices: 0, in_vertices: 1 });
    }

    #[test]
    fn test_closure_profile_of_four_cycle_and_clique() {
        let c4 = graph_from(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(closure_profile(&c4), vec![ClosureBucket { common: 2, pairs: 2, closed: 0 }]);

        let k4 = graph_from(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(closure_profile(&k4), vec![ClosureBucket { common: 2, pairs: 6, closed: 6 }]);
    }
}
