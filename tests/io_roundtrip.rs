mod common;

use common::random_graph;
use motif_census::census::run_census;
use motif_census::config::{Config, InputFormat, OutputFormat};
use motif_census::data::{self, escape};
use motif_census::storage;
use std::fs::{self, File};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn escape_file_round_trip_preserves_the_census() {
    let graph = random_graph(25, 0.3, 99);
    let mut file = NamedTempFile::new().unwrap();
    escape::write_escape(&graph, &mut file).unwrap();
    file.flush().unwrap();

    let loaded = data::load_graph(file.path(), InputFormat::Escape).unwrap();
    assert_eq!(loaded.node_count, graph.node_count);
    assert_eq!(loaded.edges, graph.edges);

    let config = Config::default();
    assert_eq!(run_census(&loaded, &config), run_census(&graph, &config));
}

#[test]
fn sanitized_edge_list_counts_like_the_original() {
    let dir = tempdir().unwrap();
    let labelled = dir.path().join("follows.txt");
    let mut file = File::create(&labelled).unwrap();
    writeln!(file, "# who follows whom").unwrap();
    for (u, v) in [("ann", "bo"), ("bo", "cy"), ("cy", "ann"), ("cy", "dee"), ("dee", "dee"), ("bo", "ann")] {
        writeln!(file, "{} {}", u, v).unwrap();
    }
    drop(file);

    let graph = data::load_graph(&labelled, InputFormat::Edgelist).unwrap();
    assert_eq!(graph.node_count, 4);
    assert_eq!(graph.edge_count(), 4);

    let sanitized = dir.path().join("follows.escape");
    escape::write_escape(&graph, File::create(&sanitized).unwrap()).unwrap();
    let reloaded = data::load_graph(&sanitized, InputFormat::Escape).unwrap();

    let report = run_census(&reloaded, &Config::default());
    assert_eq!(report.three[3], 1.0);
    assert_eq!(report.four.unwrap()[7], 1.0);
}

#[test]
fn count_output_lands_in_the_output_directory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("census");
    let config = Config::new(
        motif_census::census::PatternSize::Four,
        true,
        false,
        InputFormat::Escape,
        OutputFormat::Both,
        out.to_string_lossy().into_owned(),
    );

    let report = run_census(&random_graph(12, 0.4, 3), &config);
    storage::save_report(&report, &config.output_dir, config.output_format).unwrap();

    let text = fs::read_to_string(out.join("out.txt")).unwrap();
    assert_eq!(text.lines().count(), 2 + 4 + 11);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("census.json")).unwrap()).unwrap();
    assert!(json["non_induced"].get("five").is_none());
    assert_eq!(json["induced"]["four"].as_array().unwrap().len(), 11);
}

#[test]
fn missing_input_reports_the_path() {
    let err = data::load_graph("/definitely/not/here.txt", InputFormat::Escape).unwrap_err();
    assert!(format!("{:#}", err).contains("/definitely/not/here.txt"));
}
