//! Results persistence module

use anyhow::{Context, Result};
use crate::census::patterns::{
    FIVE_CONNECTED_START, FIVE_VERTEX_PATTERNS, FOUR_CONNECTED_START, FOUR_VERTEX_PATTERNS,
    THREE_VERTEX_PATTERNS,
};
use crate::census::CensusReport;
use crate::config::OutputFormat;
use crate::graph::algorithms::{ClosureBucket, DagDegreeRow, DegreeClustering};
use serde_json::{json, to_string_pretty, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Save a census report to `output_dir` as `census.json`, `out.txt` or both
pub fn save_report(report: &CensusReport, output_dir: &str, format: OutputFormat) -> Result<()> {
    log::info!("Saving census results to {}", output_dir);
    fs::create_dir_all(output_dir).with_context(|| format!("creating {}", output_dir))?;

    if matches!(format, OutputFormat::Json | OutputFormat::Both) {
        let path = Path::new(output_dir).join("census.json");
        let mut file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        file.write_all(to_string_pretty(&report_json(report))?.as_bytes())?;
    }

    if matches!(format, OutputFormat::Text | OutputFormat::Both) {
        let path = Path::new(output_dir).join("out.txt");
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_text(report, &mut writer)?;
        writer.flush()?;
    }

    log::info!("Results saved successfully");
    Ok(())
}

fn named_counts(names: &[&str], values: &[f64]) -> Value {
    Value::Array(
        names.iter()
            .zip(values)
            .enumerate()
            .map(|(slot, (name, count))| json!({ "slot": slot, "pattern": name, "count": count }))
            .collect(),
    )
}

fn ratio_matrix<const N: usize>(names: &[&str], matrix: &[[f64; N]; N]) -> Value {
    json!({
        "patterns": names,
        "ratios": matrix.iter().map(|row| row.to_vec()).collect::<Vec<_>>(),
    })
}

/// JSON document for a report, each count labelled with its pattern name
pub fn report_json(report: &CensusReport) -> Value {
    let mut counts = json!({ "three": named_counts(&THREE_VERTEX_PATTERNS, &report.three) });
    if let Some(ref four) = report.four {
        counts["four"] = named_counts(&FOUR_VERTEX_PATTERNS, four);
    }
    if let Some(ref five) = report.five {
        counts["five"] = named_counts(&FIVE_VERTEX_PATTERNS, five);
    }

    let mut doc = json!({
        "graph_stats": {
            "node_count": report.nodes,
            "edge_count": report.edges,
        },
        "non_induced": counts,
    });

    if let Some(ref induced) = report.induced {
        let mut section = json!({ "three": named_counts(&THREE_VERTEX_PATTERNS, &induced.three) });
        if let Some(ref four) = induced.four {
            section["four"] = named_counts(&FOUR_VERTEX_PATTERNS, four);
        }
        if let Some(ref five) = induced.five {
            section["five_connected"] = named_counts(&FIVE_VERTEX_PATTERNS[FIVE_CONNECTED_START..], five);
        }
        doc["induced"] = section;
    }

    if let Some(ref closure) = report.closure {
        let mut section = json!({
            "four": ratio_matrix(&FOUR_VERTEX_PATTERNS[FOUR_CONNECTED_START..], &closure.four),
        });
        if let Some(ref five) = closure.five {
            section["five"] = ratio_matrix(&FIVE_VERTEX_PATTERNS[FIVE_CONNECTED_START..], five);
        }
        doc["closure"] = section;
    }

    doc
}

/// Plain layout: n, m, then every non-induced count in slot order, one per line
pub fn write_text<W: Write>(report: &CensusReport, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", report.nodes)?;
    writeln!(writer, "{}", report.edges)?;

    let four = report.four.as_ref().map(|v| v.as_slice()).unwrap_or(&[]);
    let five = report.five.as_ref().map(|v| v.as_slice()).unwrap_or(&[]);
    for value in report.three.iter().chain(four).chain(five) {
        writeln!(writer, "{}", value)?;
    }
    Ok(())
}

fn write_json(value: &Value, output_dir: &str, file_name: &str) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| format!("creating {}", output_dir))?;
    let path = Path::new(output_dir).join(file_name);
    let mut file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}

/// Save the clustering-per-degree table as `ccperdeg.json`
pub fn save_clustering(rows: &[DegreeClustering], output_dir: &str) -> Result<()> {
    log::info!("Saving clustering coefficients for {} degrees", rows.len());
    write_json(&json!({ "clustering_per_degree": rows }), output_dir, "ccperdeg.json")
}

/// Save the DAG degree tables of both orientations as `dagdegdists.json`
pub fn save_dag_degrees(
    degree_ordered: &[DagDegreeRow],
    degeneracy_ordered: &[DagDegreeRow],
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving DAG degree distributions");
    let doc = json!({
        "degree_ordered": degree_ordered,
        "degeneracy_ordered": degeneracy_ordered,
    });
    write_json(&doc, output_dir, "dagdegdists.json")
}

/// Save the common-neighbor closure profile as `closures.json`
pub fn save_closures(buckets: &[ClosureBucket], output_dir: &str) -> Result<()> {
    log::info!("Saving closure profile with {} buckets", buckets.len());
    let doc = json!({
        "closures": buckets.iter().map(|b| json!({
            "common_neighbors": b.common,
            "pairs": b.pairs,
            "closed": b.closed,
            "closure_rate": if b.pairs == 0 { 0.0 } else { b.closed as f64 / b.pairs as f64 },
        })).collect::<Vec<_>>()
    });
    write_json(&doc, output_dir, "closures.json")
}
