/// End-to-end tests of the readlocate binary
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn search_cmd(reference: &PathBuf, reads: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("readlocate").unwrap();
    cmd.arg("search").arg("--reference").arg(reference).arg("--reads").arg(reads);
    cmd
}

#[test]
fn exact_modes_agree_on_example() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.fa", ">chr1\nACGTACGTAA\n");
    let reads = write_file(&dir, "reads.fa", ">r1\nACGT\n>r2\nGGGG\n");

    for mode in ["naive", "suffix", "fm", "filter"] {
        search_cmd(&reference, &reads)
            .arg("--mode")
            .arg(mode)
            .assert()
            .success()
            .stdout("r1\t2\t0,4\nr2\t0\t*\n");
    }
}

#[test]
fn filter_mode_tolerates_one_substitution() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.fa", ">chr1\nAAACAAATAAA\n");
    let reads = write_file(&dir, "reads.fq", "@r1\nAAACAAAGAAA\n+\nIIIIIIIIIII\n");

    search_cmd(&reference, &reads)
        .args(["--mode", "filter", "--errors", "1", "--seed-index", "fm"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("r1\t1\t0\n"));

    search_cmd(&reference, &reads).arg("--mode").arg("suffix").assert().success().stdout("r1\t0\t*\n");
}

#[test]
fn budget_larger_than_read_fails_up_front() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.fa", ">chr1\nACGTACGTAA\n");
    let reads = write_file(&dir, "reads.fa", ">r1\nACG\n");

    search_cmd(&reference, &reads)
        .args(["--mode", "filter", "--errors", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error budget 3"));
}

#[test]
fn errors_without_filter_mode_is_rejected() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.fa", ">chr1\nACGTACGTAA\n");
    let reads = write_file(&dir, "reads.fa", ">r1\nACGT\n");

    search_cmd(&reference, &reads)
        .args(["--errors", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mode filter"));
}

#[test]
fn query_count_and_threads_and_json_output() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.fa", ">a\nACGTAC\n>b\nGTAA\n");
    let reads = write_file(&dir, "reads.fa", ">r1\nACGT\n>r2\nCGTA\n");
    let out = dir.path().join("hits.jsonl");

    search_cmd(&reference, &reads)
        .args(["--query-count", "5", "--threads", "3", "--format", "json", "--out"])
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    // records are concatenated: ACGTACGTAA
    assert_eq!(lines[0], r#"{"read":"r1","count":2,"offsets":[0,4]}"#);
    assert_eq!(lines[1], r#"{"read":"r2","count":2,"offsets":[1,5]}"#);
    assert_eq!(lines[4], lines[0]);
}

#[test]
fn index_reports_sizes() {
    let dir = TempDir::new().unwrap();
    let reference = write_file(&dir, "ref.fa", ">chr1\nACGTACGTAA\n");

    Command::cargo_bin("readlocate")
        .unwrap()
        .arg("index")
        .arg(&reference)
        .assert()
        .success()
        .stdout(predicate::str::contains("reference_len\t10"))
        .stdout(predicate::str::contains("bwt_len\t11"));
}

#[test]
fn missing_reference_fails() {
    let dir = TempDir::new().unwrap();
    let reads = write_file(&dir, "reads.fa", ">r1\nACGT\n");
    let missing = dir.path().join("nope.fa");

    search_cmd(&missing, &reads).assert().failure().stderr(predicate::str::contains("cannot open"));
}
