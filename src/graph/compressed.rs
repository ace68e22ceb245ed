//! Compressed sparse adjacency storage

use std::mem;
use std::ops::Range;
use serde::{Serialize, Deserialize};

/// Compressed sparse row graph.
///
/// The same layout backs the full undirected view (every edge stored in both
/// directions) and the two halves of a degree-ordered DAG (each edge stored
/// once). Neighbor lists are kept sorted by vertex id so adjacency tests are
/// a binary search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of vertices in the graph
    pub node_count: usize,

    /// Offset array: index where each vertex's neighbors begin
    /// offsets[i] to offsets[i+1] defines the slot range for vertex i
    pub offsets: Vec<u32>,

    /// Neighbor array: concatenated lists of target vertices
    pub edges: Vec<u32>,

    /// Whether each slot is a one-way edge (DAG halves) or half of a
    /// symmetric pair (full view)
    pub directed: bool,

    /// Optional mapping from internal vertex ids to original labels
    pub node_ids: Option<Vec<String>>,
}

impl CompressedGraph {
    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize, directed: bool) -> Self {
        let mut offsets = Vec::with_capacity(node_count + 1);
        offsets.push(0);
        Self {
            node_count,
            offsets,
            edges: Vec::with_capacity(edge_count),
            directed,
            node_ids: None,
        }
    }

    /// Build a graph from per-vertex neighbor lists, sorting each list by id
    pub fn from_adjacency(mut lists: Vec<Vec<u32>>, directed: bool) -> Self {
        let edge_count = lists.iter().map(Vec::len).sum();
        let mut graph = Self::with_capacity(lists.len(), edge_count, directed);

        let mut offset = 0u32;
        for list in &mut lists {
            list.sort_unstable();
            graph.edges.extend_from_slice(list);
            offset += list.len() as u32;
            graph.offsets.push(offset);
        }

        graph
    }

    /// Neighbors of a vertex, sorted by id
    pub fn neighbors(&self, node: usize) -> &[u32] {
        &self.edges[self.edge_range(node)]
    }

    /// Slot range of a vertex's neighbor list within `edges`
    pub fn edge_range(&self, node: usize) -> Range<usize> {
        self.offsets[node] as usize..self.offsets[node + 1] as usize
    }

    /// Slot index of the edge src -> dst, if present
    pub fn edge_index(&self, src: usize, dst: u32) -> Option<usize> {
        let start = self.offsets[src] as usize;
        self.neighbors(src)
            .binary_search(&dst)
            .ok()
            .map(|pos| start + pos)
    }

    /// Check if there's an edge from src to dst
    pub fn has_edge(&self, src: usize, dst: u32) -> bool {
        self.neighbors(src).binary_search(&dst).is_ok()
    }

    /// Number of neighbor slots of a vertex
    pub fn degree(&self, node: usize) -> usize {
        (self.offsets[node + 1] - self.offsets[node]) as usize
    }

    /// Total number of adjacency slots
    pub fn slot_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of undirected edges represented by the slots
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.edges.len()
        } else {
            self.edges.len() / 2
        }
    }

    /// Largest neighbor-list length, 0 for an empty graph
    pub fn max_degree(&self) -> usize {
        (0..self.node_count).map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<u32>();

        let ids = self.node_ids.as_ref()
            .map(|ids| ids.iter().map(|s| s.capacity()).sum::<usize>())
            .unwrap_or(0);

        base + offsets + edges + ids
    }
}
