// tests/export.rs
use std::fs;
use std::path::PathBuf;

use tri_slots::config::options::{ExportFormat, ExportOptions};
use tri_slots::csv::to_export_string;
use tri_slots::file::write_export;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tri_slots_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let headers = Some(vec!["Name".into(), "Age group".into()]);
    let rows = vec![
        vec!["Anna, Ahl".into(), "F30-34".into()],
        vec!["Bo Berg".into(), "M45-49".into()],
    ];
    (headers, rows)
}

#[test]
fn qualifier_column_and_quoting() {
    let (headers, rows) = sample();
    let txt = to_export_string(&headers, &rows, Some(&[0]), true, ',');
    assert_eq!(
        txt,
        "Name,Age group,Qualifier\n\"Anna, Ahl\",F30-34,yes\nBo Berg,M45-49,no\n"
    );
}

#[test]
fn plain_export_without_marks_or_headers() {
    let (headers, rows) = sample();
    let txt = to_export_string(&headers, &rows, None, false, '\t');
    assert_eq!(txt, "Anna, Ahl\tF30-34\nBo Berg\tM45-49\n");
}

#[test]
fn export_respects_explicit_file_name() {
    let dir = tmp_dir("name");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(dir.join("report.txt").to_str().unwrap());

    let (headers, rows) = sample();
    let written = write_export(&opts, &headers, &rows, None).unwrap();
    assert!(written.to_string_lossy().ends_with("report.txt"));
    assert!(written.exists());
}

#[test]
fn directory_path_gets_default_file_name() {
    let dir = tmp_dir("dir");
    let mut opts = ExportOptions::default();
    opts.set_path(&format!("{}/", dir.to_str().unwrap()));

    let (headers, rows) = sample();
    let written = write_export(&opts, &headers, &rows, Some(&[1])).unwrap();
    assert!(written.to_string_lossy().ends_with("qualifiers.csv"));
    let txt = fs::read_to_string(written).unwrap();
    assert!(txt.lines().nth(2).unwrap().ends_with(",yes"));
}
