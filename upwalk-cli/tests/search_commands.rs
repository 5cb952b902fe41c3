//! Integration tests for the find-up and glob-up commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn upwalk() -> Command {
    Command::cargo_bin("upwalk").expect("Failed to find upwalk binary")
}

/// Build a project tree with markers at two levels:
///
/// ```text
/// <root>/proj/
///   package.json
///   src/
///     package.json
///     components/
/// ```
fn project_tree() -> (TempDir, PathBuf) {
    let root = TempDir::new().unwrap();
    let proj = root.path().join("proj");
    fs::create_dir_all(proj.join("src").join("components")).unwrap();
    fs::write(proj.join("package.json"), "{}").unwrap();
    fs::write(proj.join("src").join("package.json"), "{}").unwrap();
    (root, proj)
}

#[test]
fn test_find_up_lists_matches_nearest_first() {
    let (_root, proj) = project_tree();
    let start = proj.join("src").join("components");

    let output = upwalk()
        .args(["find-up", "package.json"])
        .arg("--start")
        .arg(&start)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            proj.join("src").join("package.json").display().to_string(),
            proj.join("package.json").display().to_string(),
        ]
    );
}

#[test]
fn test_find_up_first_prints_single_match() {
    let (_root, proj) = project_tree();
    let start = proj.join("src").join("components");

    let output = upwalk()
        .args(["find-up", "package.json", "--first"])
        .arg("--start")
        .arg(&start)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(
        stdout.trim(),
        proj.join("src").join("package.json").display().to_string()
    );
}

#[test]
fn test_find_up_multiple_names_in_priority_order() {
    let (_root, proj) = project_tree();
    fs::write(proj.join("src").join("deno.json"), "{}").unwrap();
    let start = proj.join("src").join("components");

    let output = upwalk()
        .args(["find-up", "deno.json", "package.json", "--first"])
        .arg("--start")
        .arg(&start)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // deno.json listed first, so it wins at the level where both exist
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(
        stdout.trim(),
        proj.join("src").join("deno.json").display().to_string()
    );
}

#[test]
fn test_find_up_no_match_exits_one() {
    let (_root, proj) = project_tree();
    let start = proj.join("src").join("components");

    upwalk()
        .args(["find-up", "missing.toml"])
        .arg("--start")
        .arg(&start)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No match for missing.toml"));
}

#[test]
fn test_find_up_json_output() {
    let (_root, proj) = project_tree();
    let start = proj.join("src").join("components");

    let output = upwalk()
        .args(["find-up", "package.json", "--json"])
        .arg("--start")
        .arg(&start)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Vec<String> = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(
        parsed[0],
        proj.join("src").join("package.json").display().to_string()
    );
}

#[test]
fn test_find_up_requires_a_name() {
    upwalk()
        .arg("find-up")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_glob_up_matches_files_below_each_level() {
    let (_root, proj) = project_tree();
    fs::write(proj.join("src").join("app.test.js"), "").unwrap();
    let start = proj.join("src").join("components");

    let output = upwalk()
        .args(["glob-up", "*.test.*"])
        .arg("--start")
        .arg(&start)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(
        stdout.trim(),
        proj.join("src").join("app.test.js").display().to_string()
    );
}

#[test]
fn test_glob_up_no_match_exits_one() {
    let (_root, proj) = project_tree();
    let start = proj.join("src").join("components");

    upwalk()
        .args(["glob-up", "*.nothing-here"])
        .arg("--start")
        .arg(&start)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No file matching"));
}

#[test]
fn test_glob_up_invalid_pattern_is_usage_error() {
    let (_root, proj) = project_tree();

    upwalk()
        .args(["glob-up", "[unclosed"])
        .arg("--start")
        .arg(&proj)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_glob_up_json_output() {
    let (_root, proj) = project_tree();
    fs::write(proj.join("notes.md"), "").unwrap();
    let start = proj.join("src");

    let output = upwalk()
        .args(["glob-up", "*.md", "--json"])
        .arg("--start")
        .arg(&start)
        .arg("--stop")
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Vec<String> = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed, vec![proj.join("notes.md").display().to_string()]);
}
