//! Configuration management for the motif census

use serde::{Serialize, Deserialize};
use crate::census::PatternSize;

/// Layout of the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `n m` header followed by `u v` lines with ids in `[0, n)`
    Escape,
    /// Whitespace-separated vertex labels, one edge per line
    Edgelist,
}

/// Layout of the census output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    /// n, m, then every count on its own line
    Text,
    Both,
}

/// Default configuration for a census run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Largest pattern size to count
    pub max_size: PatternSize,

    /// Also convert counts to induced form
    pub induced: bool,

    /// Also compute closure ratio matrices
    pub closure: bool,

    /// Input file layout
    pub input_format: InputFormat,

    /// Output layout
    pub output_format: OutputFormat,

    /// Output directory for results
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: PatternSize::Five,
            induced: false,
            closure: false,
            input_format: InputFormat::Escape,
            output_format: OutputFormat::Json,
            output_dir: "census_results".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        max_size: PatternSize,
        induced: bool,
        closure: bool,
        input_format: InputFormat,
        output_format: OutputFormat,
        output_dir: String,
    ) -> Self {
        Self {
            max_size,
            induced,
            closure,
            input_format,
            output_format,
            output_dir,
        }
    }
}
