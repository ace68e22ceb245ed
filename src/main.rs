use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use motif_census::census::{run_census, PatternSize};
use motif_census::config::{Config, InputFormat, OutputFormat};
use motif_census::data;
use motif_census::graph::algorithms;
use motif_census::graph::ordering;
use motif_census::storage;
use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(Parser, Debug)]
#[clap(
    name = "motif-census",
    about = "Exact counts of all 3, 4 and 5-vertex subgraph patterns"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Verbose logging
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count subgraph patterns
    Count {
        /// Path to input graph
        #[clap(long)]
        input: String,

        /// Input file layout
        #[clap(long, value_enum, default_value = "escape")]
        format: InputFormat,

        /// Output directory for results
        #[clap(long, default_value = "census_results")]
        output_dir: String,

        /// Largest pattern size to count
        #[clap(long, value_enum, default_value = "five")]
        max_size: PatternSize,

        /// Also report induced counts
        #[clap(long)]
        induced: bool,

        /// Also report closure ratio matrices
        #[clap(long)]
        closure: bool,

        /// Output layout
        #[clap(long, value_enum, default_value = "json")]
        output: OutputFormat,
    },

    /// Average clustering coefficient per degree
    Ccperdeg {
        #[clap(long)]
        input: String,

        #[clap(long, value_enum, default_value = "escape")]
        format: InputFormat,

        #[clap(long, default_value = "census_results")]
        output_dir: String,
    },

    /// Out- and in-degree distributions of the degree and degeneracy DAGs
    Dagdegdists {
        #[clap(long)]
        input: String,

        #[clap(long, value_enum, default_value = "escape")]
        format: InputFormat,

        #[clap(long, default_value = "census_results")]
        output_dir: String,
    },

    /// Closure rate of vertex pairs by number of common neighbors
    Closures {
        #[clap(long)]
        input: String,

        #[clap(long, value_enum, default_value = "escape")]
        format: InputFormat,

        #[clap(long, default_value = "census_results")]
        output_dir: String,
    },

    /// Convert a labelled edge list to escape format
    Sanitize {
        #[clap(long)]
        input: String,

        /// Path of the escape file to write
        #[clap(long)]
        output: String,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    match args.command {
        Command::Count { input, format, output_dir, max_size, induced, closure, output } => {
            let config = Config::new(max_size, induced, closure, format, output, output_dir);
            log::info!("Starting motif census");
            log::info!("Input: {}", input);
            log::info!("Output: {}", config.output_dir);

            // 1. Load data
            let graph = data::load_graph(&input, config.input_format)?;

            // 2. Count patterns
            let report = run_census(&graph, &config);

            // 3. Save results
            storage::save_report(&report, &config.output_dir, config.output_format)?;

            log::info!("Census complete. Results saved to {}", config.output_dir);
        }

        Command::Ccperdeg { input, format, output_dir } => {
            let graph = data::load_graph(&input, format)?;
            let prepared = ordering::prepare(&graph);
            let rows = algorithms::clustering_per_degree(&prepared.graph, &prepared.dag);
            storage::save_clustering(&rows, &output_dir)?;
        }

        Command::Dagdegdists { input, format, output_dir } => {
            let graph = data::load_graph(&input, format)?;
            let by_degree = algorithms::dag_degree_distribution(&ordering::degree_ordered(&graph));
            let by_degeneracy = algorithms::dag_degree_distribution(&ordering::degeneracy_ordered(&graph));
            storage::save_dag_degrees(&by_degree, &by_degeneracy, &output_dir)?;
        }

        Command::Closures { input, format, output_dir } => {
            let graph = data::load_graph(&input, format)?;
            let buckets = algorithms::closure_profile(&graph);
            storage::save_closures(&buckets, &output_dir)?;
        }

        Command::Sanitize { input, output } => {
            let graph = data::edgelist::load_edgelist(&input)?;
            let file = File::create(&output).with_context(|| format!("creating {}", output))?;
            let mut writer = BufWriter::new(file);
            data::escape::write_escape(&graph, &mut writer)?;
            writer.flush()?;
            log::info!("Wrote {} vertices and {} edges to {}", graph.node_count, graph.edge_count(), output);
        }
    }

    Ok(())
}
