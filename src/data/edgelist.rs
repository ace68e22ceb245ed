//! Labelled edge lists: two vertex labels per line, any strings

use anyhow::{Context, Result};
use crate::error::CensusError;
use crate::graph::builder::GraphBuilder;
use crate::graph::CompressedGraph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn load_edgelist<P: AsRef<Path>>(path: P) -> Result<CompressedGraph> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_edgelist(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

/// Parse a labelled edge list. Labels get dense ids in first-seen order and
/// are kept as `node_ids`. Tokens after the second are ignored.
pub fn parse_edgelist<R: BufRead>(reader: R) -> Result<CompressedGraph> {
    let mut builder = GraphBuilder::with_capacity(1024);
    let mut lines_read = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(CensusError::from)?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(src), Some(dst)) => builder.add_labelled_edge(src, dst),
            _ => {
                return Err(CensusError::Parse {
                    line: idx + 1,
                    message: "expected two vertex labels".to_string(),
                }
                .into())
            }
        }
        lines_read += 1;
    }

    log::debug!("Read {} edge lines", lines_read);
    let graph = builder.build()?;
    log::info!("Loaded graph with {} vertices and {} edges", graph.node_count, graph.edge_count());
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_labels_map_to_dense_ids() {
        let input = "# follows\nalice bob\nbob carol 0.5\ncarol carol\nbob alice\n";
        let g = parse_edgelist(Cursor::new(input)).unwrap();

        assert_eq!(g.node_count, 3);
        assert_eq!(g.edge_count(), 2);
        let ids = g.node_ids.as_ref().unwrap();
        assert_eq!(ids[1], "bob");
        assert_eq!(g.neighbors(1), &[0, 2]);
    }

    #[test]
    fn test_single_token_line_fails() {
        let err = parse_edgelist(Cursor::new("a b\nc\n")).unwrap_err();
        assert!(matches!(err.downcast_ref::<CensusError>(), Some(CensusError::Parse { line: 2, .. })));
    }
}
