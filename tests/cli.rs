use serde_json::{json, Value};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn write_job(dir: &Path, job: &Value) -> PathBuf {
    let path = dir.join("job.json");
    std::fs::write(&path, serde_json::to_vec_pretty(job).unwrap()).unwrap();
    path
}

fn pdf_creator(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdf-creator"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn successful_job_prints_the_written_path() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(
        dir.path(),
        &json!({
            "fileProperties": { "Directory": dir.path(), "FileName": "out.pdf" },
            "content": [ { "ContentType": "Paragraph", "Text": "hi" } ]
        }),
    );

    let output = pdf_creator(&[job.as_os_str()]);

    assert_eq!(output.status.code(), Some(0));
    let written = dir.path().join("out.pdf");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), written.display().to_string());
    assert!(std::fs::read(&written).unwrap().starts_with(b"%PDF"));
}

#[test]
fn json_flag_prints_the_output_record() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(
        dir.path(),
        &json!({
            "fileProperties": { "Directory": dir.path(), "FileName": "out.pdf" },
            "content": [ { "ContentType": "Paragraph", "Text": "hi" } ]
        }),
    );

    let output = pdf_creator(&[job.as_os_str(), OsStr::new("--json")]);

    assert_eq!(output.status.code(), Some(0));
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["Success"], json!(true));
}

#[test]
fn unreadable_job_exits_with_1() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-job.json");

    let output = pdf_creator(&[missing.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn swallowed_failure_exits_with_2() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(
        dir.path(),
        &json!({
            "fileProperties": { "Directory": dir.path(), "FileName": "out.pdf" },
            "content": [ { "ContentType": "Image", "ImagePath": dir.path().join("absent.png") } ],
            "options": { "ThrowErrorOnFailure": false }
        }),
    );

    let output = pdf_creator(&[job.as_os_str()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn raised_failure_exits_with_1() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(
        dir.path(),
        &json!({
            "fileProperties": { "Directory": dir.path(), "FileName": "out.pdf" },
            "content": [ { "ContentType": "Image", "ImagePath": dir.path().join("absent.png") } ]
        }),
    );

    let output = pdf_creator(&[job.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("out.pdf").exists());
}
