//! Escape edge-list format: an `n m` header, then one `u v` pair per line

use anyhow::{Context, Result};
use crate::error::CensusError;
use crate::graph::builder::GraphBuilder;
use crate::graph::CompressedGraph;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

fn is_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with('%')
}

fn parse_id(token: Option<&str>, line: usize) -> Result<u64, CensusError> {
    let token = token.ok_or_else(|| CensusError::Parse {
        line,
        message: "expected two vertex ids".to_string(),
    })?;
    token.parse::<u64>().map_err(|e| CensusError::Parse {
        line,
        message: format!("bad vertex id {:?}: {}", token, e),
    })
}

/// Load an escape-format graph from disk
pub fn load_escape<P: AsRef<Path>>(path: P) -> Result<CompressedGraph> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_escape(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

/// Parse an escape-format graph. Self-loops and repeated edges are dropped.
pub fn parse_escape<R: BufRead>(reader: R) -> Result<CompressedGraph> {
    let mut builder: Option<GraphBuilder> = None;
    let mut node_count = 0usize;
    let mut declared_edges = 0u64;
    let mut edge_lines = 0u64;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(CensusError::from)?;
        let line = line.trim();
        if is_comment(line) {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match builder {
            None => {
                let n = parse_id(tokens.next(), line_no)
                    .map_err(|_| CensusError::InvalidHeader(line.to_string()))?;
                declared_edges = parse_id(tokens.next(), line_no)
                    .map_err(|_| CensusError::InvalidHeader(line.to_string()))?;
                if n > u32::MAX as u64 {
                    return Err(CensusError::InvalidHeader(format!(
                        "{} vertices do not fit 32-bit ids",
                        n
                    ))
                    .into());
                }
                node_count = n as usize;
                builder = Some(GraphBuilder::with_nodes(node_count));
            }
            Some(ref mut builder) => {
                let u = parse_id(tokens.next(), line_no)?;
                let v = parse_id(tokens.next(), line_no)?;
                for vertex in [u, v] {
                    if vertex as usize >= node_count {
                        return Err(CensusError::VertexOutOfRange {
                            line: line_no,
                            vertex,
                            node_count,
                        }
                        .into());
                    }
                }
                builder.add_edge(u as u32, v as u32);
                edge_lines += 1;
            }
        }
    }

    let builder = builder.ok_or_else(|| CensusError::InvalidHeader("empty input".to_string()))?;
    if edge_lines != declared_edges {
        log::warn!("Header declares {} edges but {} edge lines were read", declared_edges, edge_lines);
    }

    let graph = builder.build()?;
    log::info!("Loaded graph with {} vertices and {} edges", graph.node_count, graph.edge_count());
    Ok(graph)
}

/// Write a graph in escape format, each undirected edge once
pub fn write_escape<W: Write>(graph: &CompressedGraph, mut writer: W) -> Result<()> {
    writeln!(writer, "{} {}", graph.node_count, graph.edge_count())?;
    for u in 0..graph.node_count {
        for &v in graph.neighbors(u) {
            if (u as u32) < v {
                writeln!(writer, "{} {}", u, v)?;
            }
        }
    }
    Ok(())
}
