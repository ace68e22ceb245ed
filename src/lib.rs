//! Exact counts of every 3, 4 and 5-vertex subgraph pattern in a simple graph

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod census;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use error::CensusError;
