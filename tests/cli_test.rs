//! Tests for the `pajek-tools` binary.
//!
//! Each test runs the compiled binary against files in a `TempDir` and checks
//! the exit status and the files it leaves behind.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pajek-tools"))
        .args(args)
        .output()
        .expect("failed to run pajek-tools")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn convert_writes_net_file() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("edges.csv");
    let output = dir.path().join("edges.net");
    fs::write(&input, "ID,cited_ID\na,b\na,c\nc,a\nc,d\n")?;

    let result = run(&[
        "convert",
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
        "--source-column",
        "ID",
        "--target-column",
        "cited_ID",
    ]);

    assert!(result.status.success());
    assert_eq!(
        fs::read_to_string(&output)?,
        "*Vertices 4\n1 \"a\"\n2 \"b\"\n3 \"c\"\n4 \"d\"\n*Arcs\n1 2\n1 3\n3 1\n3 4\n"
    );
    Ok(())
}

#[test]
fn convert_uses_config_file_and_flag_overrides() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("edges.csv");
    let config = dir.path().join("config.json");
    let output = dir.path().join("edges.net");
    fs::write(&input, "src,dst,w\nb,a,2\na,b,1\n")?;
    fs::write(
        &config,
        r#"{"source_column": "src", "target_column": "dst", "weight_column": "w"}"#,
    )?;

    let result = run(&[
        "convert",
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
        "--config",
        path_str(&config),
        "--undirected",
        "--sort-vertices",
        "--weight-precision",
        "1",
    ]);

    assert!(result.status.success());
    assert_eq!(
        fs::read_to_string(&output)?,
        "*Vertices 2\n1 \"a\"\n2 \"b\"\n*Edges\n2 1 2.0\n1 2 1.0\n"
    );
    Ok(())
}

#[test]
fn convert_missing_column_fails_without_output() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("edges.csv");
    let output = dir.path().join("edges.net");
    fs::write(&input, "PaperId,PaperReferenceId\n1,2\n")?;

    let result = run(&["convert", "-i", path_str(&input), "-o", path_str(&output)]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("configuration error"), "{stderr}");
    assert!(!output.exists());
    Ok(())
}

#[test]
fn vertices_writes_index_csv() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("edges.tsv");
    let output = dir.path().join("vertices.csv");
    fs::write(&input, "source\ttarget\nx\ty\ny\tz\n")?;

    let result = run(&[
        "vertices",
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
        "--delimiter",
        "\\t",
    ]);

    assert!(result.status.success());
    assert_eq!(
        fs::read_to_string(&output)?,
        "node_id,node_name\n1,x\n2,y\n3,z\n"
    );
    Ok(())
}
