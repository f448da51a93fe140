use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use redline::testing::{del, document_xml, ins, paragraph, run, write_docx};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn proof_xml() -> String {
    document_xml(&paragraph(&[
        run("The "),
        del("1", "quick"),
        ins("1", "slow"),
        run(" fox jumps"),
    ]))
}

fn write_proof(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    write_docx(&path, &proof_xml());
    path
}

#[test]
fn extract_prints_records() {
    let dir = TempDir::new().unwrap();
    let file = write_proof(dir.path(), "CORR_proof.docx");

    let mut cmd = cargo_bin_cmd!("redline");
    cmd.arg("extract").arg(&file);

    cmd.assert().success().stdout(
        predicate::str::contains("#1 both")
            .and(predicate::str::contains("- quick"))
            .and(predicate::str::contains("+ slow")),
    );
}

#[test]
fn extract_as_json_lines() {
    let dir = TempDir::new().unwrap();
    let file = write_proof(dir.path(), "CORR_proof.docx");

    let mut cmd = cargo_bin_cmd!("redline");
    cmd.arg("extract").arg(&file).arg("--format").arg("jsonl");

    cmd.assert().success().stdout(
        predicate::str::contains(r#""ID":1"#)
            .and(predicate::str::contains(r#""original_single":"quick""#))
            .and(predicate::str::contains(r#""change_type":"both""#)),
    );
}

#[test]
fn extract_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("redline");
    cmd.arg("extract").arg(dir.path().join("missing.docx"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid document container"));
}

#[test]
fn extract_rejects_unknown_joiner() {
    let dir = TempDir::new().unwrap();
    let file = write_proof(dir.path(), "CORR_proof.docx");

    let mut cmd = cargo_bin_cmd!("redline");
    cmd.arg("extract").arg(&file).arg("--joiner").arg("comma");

    cmd.assert().failure();
}

#[test]
fn batch_writes_datasets() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let folder = input.path().join("2023.00274");
    fs::create_dir(&folder).unwrap();
    write_proof(&folder, "CORR_proof.docx");

    let mut cmd = cargo_bin_cmd!("redline");
    cmd.current_dir(input.path())
        .arg("batch")
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .arg("--format")
        .arg("ron");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DONE: 1 documents, 1 records, 0 skipped"));

    let dataset = output
        .path()
        .join("2023.00274-dataset-xml-corrections.ron");
    let content = fs::read_to_string(dataset).unwrap();
    assert!(content.contains("original_single"));
}

#[test]
fn batch_reads_config_file() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let folder = input.path().join("2023.00274");
    fs::create_dir(&folder).unwrap();
    write_proof(&folder, "FINAL_proof.docx");

    let config = output.path().join("redline.toml");
    fs::write(
        &config,
        format!(
            "input_dir = {:?}\noutput_dir = {:?}\nfile_pattern = '^FINAL_.*\\.docx$'\n",
            input.path().display().to_string(),
            output.path().join("results").display().to_string(),
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("redline");
    cmd.arg("batch").arg("--config").arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 documents"));
    assert!(output
        .path()
        .join("results")
        .join("2023.00274-dataset-xml-corrections.json")
        .exists());
}

#[test]
fn batch_rejects_missing_explicit_config() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("corpus");
    fs::create_dir(&input).unwrap();

    let mut cmd = cargo_bin_cmd!("redline");
    cmd.current_dir(dir.path())
        .arg("batch")
        .arg("--config")
        .arg(dir.path().join("prod.toml"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("results"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("prod.toml"));
    assert!(!dir.path().join("results").exists());
}

#[test]
fn batch_missing_corpus_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("redline");
    cmd.current_dir(dir.path())
        .arg("batch")
        .arg("--input")
        .arg(dir.path().join("nowhere"))
        .arg("--output")
        .arg(dir.path().join("results"));

    cmd.assert().failure().stderr(predicate::str::contains("error:"));
}
