//! Graph input formats

pub mod escape;
pub mod edgelist;

use anyhow::Result;
use crate::config::InputFormat;
use crate::graph::CompressedGraph;
use std::path::Path;

/// Load a graph in the given format
pub fn load_graph<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<CompressedGraph> {
    log::info!("Loading graph from {}", path.as_ref().display());
    match format {
        InputFormat::Escape => escape::load_escape(path),
        InputFormat::Edgelist => edgelist::load_edgelist(path),
    }
}
