//! CLI Integration Tests for galaxy
//!
//! These tests execute the binary and verify:
//! - Listing sectors, nodes and prompts
//! - Layout output in text, JSON and SVG
//! - Config file handling
//! - Error handling for bad input

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn galaxy(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    // Keep user-level config out of the way
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path());
    cmd
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_sectors_lists_all_four() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .arg("sectors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Home (4 nodes"))
        .stdout(predicate::str::contains("Work (6 nodes"))
        .stdout(predicate::str::contains("School (5 nodes"))
        .stdout(predicate::str::contains("Health (3 nodes"));
}

#[test]
fn test_nodes_filtered_by_sector_and_orbit() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .args(["nodes", "--sector", "work", "--orbit", "actions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeblock"))
        .stdout(predicate::str::contains("formfill"))
        .stdout(predicate::str::contains("emails").not())
        .stdout(predicate::str::contains("2 node(s)"));
}

#[test]
fn test_nodes_json() {
    let dir = TempDir::new().unwrap();
    let output = galaxy(&dir)
        .args(["nodes", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let nodes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(nodes.as_array().unwrap().len(), 16);
    assert_eq!(nodes[0]["id"], "shots");
    assert_eq!(nodes[0]["category"], "home");
}

#[test]
fn test_unknown_sector_fails() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .args(["nodes", "--sector", "garden"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("garden"));
}

// =============================================================================
// Prompts
// =============================================================================

#[test]
fn test_prompt_with_related() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .args(["prompt", "shots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("produce a clean table"))
        .stdout(predicate::str::contains("Rename/Sort"))
        .stdout(predicate::str::contains("Context Search"));
}

#[test]
fn test_prompt_unknown_id_is_empty() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .args(["prompt", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_related_json_limit() {
    let dir = TempDir::new().unwrap();
    let output = galaxy(&dir)
        .args(["related", "emails", "--limit", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let related: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = related
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["calendar", "timeblock", "formfill"]);
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_layout_text_marks_selection() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .args(["layout", "--node", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("◀ selected"))
        .stdout(predicate::str::contains("Prompt: Extract totals"));
}

#[test]
fn test_layout_svg_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("galaxy.svg");
    galaxy(&dir)
        .args(["layout", "--sector", "school", "--format", "svg", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote svg layout"));

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("data-filter=\"school\""));
}

#[test]
fn test_layout_output_gets_format_extension() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .args(["layout", "--format", "json", "-o", "galaxy"])
        .assert()
        .success();

    let json = fs::read_to_string(dir.path().join("galaxy.json")).unwrap();
    let layout: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(layout["nodes"].as_array().unwrap().len(), 16);
}

#[test]
fn test_svg_rejected_outside_layout() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .args(["nodes", "--format", "svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only available for `layout`"));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_local_config_sets_canvas_and_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".galaxy_config.json"),
        r#"{"canvas": {"width": 600, "height": 600}, "format": "json"}"#,
    )
    .unwrap();

    let output = galaxy(&dir).arg("layout").output().unwrap();
    assert!(output.status.success());
    let layout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(layout["center"]["x"], 300.0);
    assert_eq!(layout["center"]["y"], 300.0);
}

#[test]
fn test_config_svg_default_only_applies_to_layout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".galaxy_config.json"), r#"{"format": "svg"}"#).unwrap();

    galaxy(&dir)
        .arg("sectors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Home (4 nodes"));
    galaxy(&dir)
        .args(["nodes", "--sector", "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 node(s)"));
    galaxy(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 error(s)"));
    galaxy(&dir)
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"));
}

#[test]
fn test_explicit_svg_flag_still_rejected_with_svg_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".galaxy_config.json"), r#"{"format": "svg"}"#).unwrap();

    galaxy(&dir)
        .args(["sectors", "--format", "svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only available for `layout`"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .args(["sectors", "--config", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"canvas": {"base_orbit": 10}}"#).unwrap();
    galaxy(&dir)
        .args(["sectors", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_orbit"));
}

// =============================================================================
// Validate
// =============================================================================

#[test]
fn test_validate_shipped_tables() {
    let dir = TempDir::new().unwrap();
    galaxy(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 error(s)"))
        .stdout(predicate::str::contains("prompt 'travel' is never referenced"));
}
