use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn strutils() -> Command {
    let mut cmd = Command::cargo_bin("strutils").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_sos_lists_combinations() {
    strutils()
        .args(["--no-color", "sos", "variable_cost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  variable_Cost\n"))
        .stdout(predicate::str::contains("  Variable_Cost\n"))
        .stderr(predicate::str::contains("4 variations from 1 input"));
}

#[test]
fn test_variate_json() {
    let output = strutils()
        .args(["-o", "json", "variate", "variable_cost"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_variations"], 8);
    assert_eq!(value["groups"][0]["variations"][1], "cost_variable");
    assert_eq!(value["groups"][0]["variations"][7], "Cost_Variable");
}

#[test]
fn test_variate_without_permutation_and_custom_stitch() {
    let output = strutils()
        .args(["-o", "json", "--stitch-with", " ", "variate", "--no-permute", "flow_costs"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["groups"][0]["variations"],
        serde_json::json!(["flow costs", "flow Costs", "Flow costs", "Flow Costs"])
    );
}

#[test]
fn test_permute_passthrough() {
    strutils()
        .args(["--no-color", "permute", "variable", "a_b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  variable\n  a_b\n  b_a\n"));
}

#[test]
fn test_limit() {
    let output = strutils()
        .args(["-o", "json", "--limit", "3", "variate", "a_b_c"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_variations"], 3);
}

#[test]
fn test_table_text() {
    strutils()
        .args([
            "--no-color",
            "table",
            "variable_cost",
            "flow_costs",
            "--stitcher",
            "_",
            "--stitcher",
            " ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("15  Cost Variable  Costs Flow"));
}

#[test]
fn test_patterns() {
    strutils()
        .args(["--no-color", "patterns", "variable_cost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  v_cost\n  variable_c\n"));
}

#[test]
fn test_local_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".strutils.toml"),
        "transform = \"upper\"\npermutate = false\n",
    )
    .unwrap();

    let output = strutils()
        .current_dir(dir.path())
        .args(["-o", "json", "variate", "ab_cd"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["groups"][0]["variations"],
        serde_json::json!(["ab_cd", "ab_CD", "AB_cd", "AB_CD"])
    );
}

#[test]
fn test_empty_split_delimiter_fails() {
    strutils()
        .args(["--split-at", "", "sos", "variable_cost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("split delimiter must not be empty"));
}

#[test]
fn test_missing_command() {
    strutils()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No command specified"));
}

#[test]
fn test_completion() {
    strutils()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strutils"));
}

#[test]
fn test_permute_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".strutils.toml"), "permutate = false\n").unwrap();

    let output = strutils()
        .current_dir(dir.path())
        .args(["-o", "json", "variate", "--permute", "variable_cost"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_variations"], 8);
    assert_eq!(value["groups"][0]["variations"][1], "cost_variable");
}
