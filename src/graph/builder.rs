//! Graph construction module

use anyhow::{anyhow, Result};
use crate::graph::CompressedGraph;
use std::collections::HashMap;

/// Builder for incrementally constructing a simple undirected CompressedGraph.
///
/// Edges are stored in both directions. Self-loops are rejected on insertion
/// and parallel edges are collapsed in `build`.
pub struct GraphBuilder {
    /// Number of vertices
    node_count: usize,

    /// Mapping from string labels to vertex indices
    id_to_index: HashMap<String, u32>,

    /// Vertex labels, empty when vertices are numbered directly
    node_ids: Vec<String>,

    /// Adjacency lists for each vertex
    adjacency_lists: Vec<Vec<u32>>,

    /// Self-loops seen and dropped
    self_loops: usize,
}

impl GraphBuilder {
    /// Create a new builder for labelled vertices with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            node_count: 0,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            self_loops: 0,
        }
    }

    /// Create a builder with vertices `0..node_count` already present
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            id_to_index: HashMap::new(),
            node_ids: Vec::new(),
            adjacency_lists: vec![Vec::new(); node_count],
            self_loops: 0,
        }
    }

    /// Number of vertices created so far
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Get or create a vertex index for the given label
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_count as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.adjacency_lists.push(Vec::new());
        self.node_count += 1;

        idx
    }

    /// Add an undirected edge between two labelled vertices
    pub fn add_labelled_edge(&mut self, src_id: &str, dst_id: &str) {
        if src_id == dst_id {
            self.self_loops += 1;
            return;
        }
        let src = self.get_or_create_node(src_id);
        let dst = self.get_or_create_node(dst_id);
        self.add_edge(src, dst);
    }

    /// Add an undirected edge between two vertex indices, growing the vertex
    /// set if needed
    pub fn add_edge(&mut self, src: u32, dst: u32) {
        if src == dst {
            self.self_loops += 1;
            return;
        }

        let needed = src.max(dst) as usize + 1;
        if needed > self.node_count {
            self.adjacency_lists.resize(needed, Vec::new());
            self.node_count = needed;
        }

        self.adjacency_lists[src as usize].push(dst);
        self.adjacency_lists[dst as usize].push(src);
    }

    /// Build the compressed graph
    pub fn build(mut self) -> Result<CompressedGraph> {
        let mut duplicates = 0usize;
        for list in &mut self.adjacency_lists {
            list.sort_unstable();
            let before = list.len();
            list.dedup();
            duplicates += before - list.len();
        }

        let slots: usize = self.adjacency_lists.iter().map(Vec::len).sum();
        if slots > u32::MAX as usize {
            return Err(anyhow!("graph has {} adjacency slots, more than u32 offsets allow", slots));
        }

        if self.self_loops > 0 {
            log::warn!("Dropped {} self-loops", self.self_loops);
        }
        if duplicates > 0 {
            // Each duplicate undirected edge leaves two extra slots
            log::warn!("Dropped {} duplicate edges", duplicates / 2);
        }

        let mut graph = CompressedGraph::from_adjacency(self.adjacency_lists, false);
        if !self.node_ids.is_empty() {
            graph.node_ids = Some(self.node_ids);
        }

        Ok(graph)
    }
}
