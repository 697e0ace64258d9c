//! End-to-end checks of the files the clients write.

#![allow(clippy::unwrap_used)]

use std::fs;

use march_clients::{write_pattern_report, write_trace_file};
use march_engine::ReportFormat;

#[test]
fn pattern_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mats_patterns");

    let analysis = write_pattern_report(&out, "awz,urzwi,dri", ReportFormat::Text).unwrap();
    assert_eq!(analysis.registry.len(), 9);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Neighborhood patterns in AWZ,URZWI,DRI:\n\n9 patterns found\n\nU 0 0\n"));
    assert!(text.ends_with("1 1 1\n1 1 1\n1 1 U\n\n"));
}

#[test]
fn pattern_report_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("patterns.json");

    write_pattern_report(&out, "aw1,aw0", ReportFormat::Json).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"algorithm\": \"AW1,AW0\""));
    assert!(text.contains("\"count\": 9"));
}

#[test]
fn malformed_algorithm_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never");

    let err = write_pattern_report(&out, ",", ReportFormat::Text).unwrap_err();
    assert!(err.to_string().contains("Failed to parse March algorithm"));
    assert!(!out.exists());
}

#[test]
fn trace_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mats.trace");

    let lines = write_trace_file(&out, "aw,urw,dr", 2).unwrap();
    assert_eq!(lines, 4 + 8 + 4);

    let text = fs::read_to_string(&out).unwrap();
    let first: Vec<&str> = text.lines().take(6).collect();
    assert_eq!(first, ["0 W", "1 W", "2 W", "3 W", "0 R", "0 W"]);
    assert_eq!(text.lines().last(), Some("0 R"));
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no/such/dir/out.trace");

    let err = write_trace_file(&out, "ar", 1).unwrap_err();
    assert!(err.to_string().contains("Failed to create output file"));
}
