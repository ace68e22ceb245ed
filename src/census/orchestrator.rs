//! Census pipeline: triangles, then 4-vertex, then 5-vertex counts

use std::time::Instant;
use serde::{Serialize, Deserialize};
use crate::census::conversion;
use crate::census::five::five_vertex;
use crate::census::four::{count_four_patterns, four_vertex};
use crate::census::scratch::VertexScratch;
use crate::census::three::{three_vertex, GraphTotals};
use crate::census::triangles::TriangleInfo;
use crate::config::Config;
use crate::graph::ordering::{prepare, PreparedGraph};
use crate::graph::CompressedGraph;

/// Largest pattern size to count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PatternSize {
    Three,
    Four,
    Five,
}

/// Induced counterparts of the non-induced vectors. The 5-vertex part
/// covers the 21 connected patterns only.
#[derive(Debug, Clone, PartialEq)]
pub struct InducedCounts {
    pub three: [f64; 4],
    pub four: Option<[f64; 11]>,
    pub five: Option<[f64; 21]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClosureRatios {
    pub four: [[f64; 6]; 6],
    pub five: Option<[[f64; 21]; 21]>,
}

/// Everything one census run produces
#[derive(Debug, Clone, PartialEq)]
pub struct CensusReport {
    pub nodes: usize,
    pub edges: usize,
    pub three: [f64; 4],
    pub four: Option<[f64; 11]>,
    pub five: Option<[f64; 34]>,
    pub induced: Option<InducedCounts>,
    pub closure: Option<ClosureRatios>,
}

/// Relabel, orient and count
pub fn run_census(graph: &CompressedGraph, config: &Config) -> CensusReport {
    let prepared = prepare(graph);
    count_prepared(&prepared, config)
}

/// Count patterns on an already rank-labelled graph and its DAG
pub fn count_prepared(prepared: &PreparedGraph, config: &Config) -> CensusReport {
    let start = Instant::now();
    let (graph, dag) = (&prepared.graph, &prepared.dag);
    let totals = GraphTotals::of(graph);

    log::info!("Counting 3-vertex patterns");
    let info = TriangleInfo::from_dag(&dag.outlist);
    let three = three_vertex(&totals, info.total);
    log::debug!("3-vertex counts: {:?}", three);

    let mut first = VertexScratch::new(graph.node_count);
    let mut second = VertexScratch::new(graph.node_count);

    let four_counts = (config.max_size >= PatternSize::Four).then(|| {
        log::info!("Counting 4-vertex patterns");
        let counts = count_four_patterns(graph, dag, &info, &mut first);
        let four = four_vertex(&totals, info.total, &counts);
        log::debug!("4-vertex counts: {:?}", four);
        (counts, four)
    });
    let four = four_counts.map(|(_, four)| four);

    let five = match four_counts {
        Some((ref counts, _)) if config.max_size >= PatternSize::Five => {
            log::info!("Counting 5-vertex patterns");
            let five = five_vertex(graph, dag, &info, counts, &mut first, &mut second);
            log::debug!("5-vertex counts: {:?}", five);
            Some(five)
        }
        _ => None,
    };

    let induced = config.induced.then(|| InducedCounts {
        three: conversion::three_non_to_induced(&three),
        four: four.as_ref().map(conversion::four_non_to_induced),
        five: five.as_ref().map(conversion::five_non_to_induced),
    });

    let closure = match four {
        Some(ref four) if config.closure => Some(ClosureRatios {
            four: conversion::closure_matrix(four),
            five: five.as_ref().map(conversion::closure_matrix_five),
        }),
        _ => None,
    };

    log::info!("Census finished in {:.2?}", start.elapsed());

    CensusReport {
        nodes: graph.node_count,
        edges: graph.edge_count(),
        three,
        four,
        five,
        induced,
        closure,
    }
}
