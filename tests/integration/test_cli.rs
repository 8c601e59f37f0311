//! End-to-end runs of the clangview binary

use crate::common::{CLASS_H, COMPILE_COMMANDS, TestProject};
use std::path::{Path, PathBuf};
use std::process::Command;

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn run_cli(workspace: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_clangview"))
        .args(args)
        .current_dir(workspace)
        .env_remove("CV_LOG_LEVEL")
        .output()
        .expect("run clangview CLI");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

#[test]
fn test_parse_tree_output() {
    require_libclang!();

    let (code, stdout, stderr) = run_cli(&manifest_dir(), &["parse", CLASS_H, "--", "-x", "c++"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with(CLASS_H));
    assert!(stdout.contains("  Namespace my_namespace"));
    assert!(stdout.contains("      Field field1 public : Float"));
}

#[test]
fn test_parse_jsonl_to_file() {
    require_libclang!();

    let project = TestProject::new();
    let out = project.path().join("ast.jsonl");
    let fixture = manifest_dir().join(CLASS_H);
    let (code, _, stderr) = run_cli(
        project.path(),
        &[
            "parse",
            fixture.to_str().unwrap(),
            "--format",
            "jsonl",
            "--max-depth",
            "1",
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0, "stderr: {stderr}");

    let written = std::fs::read_to_string(&out).unwrap();
    let nodes: Vec<serde_json::Value> = written
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["kind"], "Root");
    assert_eq!(nodes[1]["kind"], "Namespace");
    assert_eq!(nodes[1]["name"], "my_namespace");
}

#[test]
fn test_parse_missing_file() {
    let (code, _, stderr) = run_cli(&manifest_dir(), &["parse", "tests/fixtures/nope.h"]);
    assert_eq!(code, 3);
    assert!(stderr.contains("File not found"));
}

#[test]
fn test_db_command() {
    require_libclang!();

    let (code, stdout, stderr) = run_cli(&manifest_dir(), &["db", COMPILE_COMMANDS]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Class MyTestClass"));
    assert!(stdout.contains("Function add"));
    assert!(stderr.contains("Parsed 2 translation unit(s), 0 failed"));
}

#[test]
fn test_db_missing_database() {
    let project = TestProject::new();
    let (code, _, stderr) = run_cli(project.path(), &["db", "compile_commands.json"]);
    assert_eq!(code, 3, "stderr: {stderr}");
}

#[test]
fn test_init_and_config() {
    let project = TestProject::new();

    let (code, stdout, _) = run_cli(project.path(), &["init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Created configuration file"));
    assert!(project.path().join(".clangview/settings.toml").exists());

    let (code, _, _) = run_cli(project.path(), &["init"]);
    assert_eq!(code, 6);
    let (code, _, _) = run_cli(project.path(), &["init", "--force"]);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(project.path(), &["config"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("format = \"tree\""));
}

#[test]
fn test_custom_config_file() {
    let project = TestProject::new();
    let custom = project.add_file("custom.toml", "[output]\nformat = \"json\"\nmax_depth = 2\n");
    let (code, stdout, _) = run_cli(
        project.path(),
        &["config", "--config", custom.to_str().unwrap()],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("format = \"json\""));
    assert!(stdout.contains("max_depth = 2"));

    let broken = project.add_file("broken.toml", "[output\nformat = ");
    let (code, _, _) = run_cli(
        project.path(),
        &["config", "--config", broken.to_str().unwrap()],
    );
    assert_eq!(code, 6);
}
