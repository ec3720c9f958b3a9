use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn trendcheck() -> Command {
    let mut cmd = Command::cargo_bin("trendcheck").unwrap();
    cmd.args(["--latency-ms", "0", "--log-level", "error"]);
    cmd
}

#[test]
fn run_prints_json_result() -> Result<(), Box<dyn std::error::Error>> {
    let output = trendcheck().args(["run", "ab cd", "--format", "json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["keywords"], serde_json::json!(["ab", "cd"]));
    assert_eq!(value["score"], 9);
    assert_eq!(value["action"], "WAIT_AND_SEE");
    assert_eq!(value["metadata"]["text_len"], 5);
    assert_eq!(value["metadata"]["token_count"], 2);
    Ok(())
}

#[test]
fn run_output_is_identical_across_processes() {
    let first = trendcheck().args(["run", "Berlin winter fit", "-f", "json"]).output().unwrap();
    let second = trendcheck().args(["run", "Berlin winter fit", "-f", "json"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn run_empty_text_uses_sentinel() {
    trendcheck()
        .args(["run", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("keywords: [\"empty\"]"))
        .stdout(predicate::str::contains("action: WAIT_AND_SEE"));
}

#[test]
fn demo_lists_all_samples() {
    trendcheck()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trend XYZ"))
        .stdout(predicate::str::contains("Quiet luxury"))
        .stdout(predicate::str::contains("Berlin winter"))
        .stdout(predicate::str::contains("\"empty\""));
}

#[test]
fn compare_reports_single_deterministic_outcome() -> Result<(), Box<dyn std::error::Error>> {
    let output = trendcheck()
        .args(["compare", "--runs", "5", "--seed", "11", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["deterministic"]["runs"], 5);
    assert_eq!(value["deterministic"]["unique_scores"], 1);
    assert_eq!(value["deterministic"]["unique_actions"], 1);
    assert_eq!(value["jittered"]["runs"], 5);
    Ok(())
}

#[test]
fn compare_parallel_text_report() {
    trendcheck()
        .args(["compare", "--runs", "8", "--seed", "1", "--parallel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== DETERMINISTIC ==="))
        .stdout(predicate::str::contains("=== DETERMINISTIC (PARALLEL) ==="));
}

#[test]
fn compare_rejects_zero_runs() {
    trendcheck().args(["compare", "--runs", "0"]).assert().failure();
}

#[test]
fn config_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("pipeline.toml");
    std::fs::write(&path, "panic_reorder_threshold = 5\n")?;

    trendcheck()
        .args(["run", "ab cd", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("action: PANIC_REORDER"));
    Ok(())
}

#[test]
fn invalid_config_file_fails_fast() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("pipeline.json");
    std::fs::write(&path, r#"{"mod_base": 0}"#)?;

    trendcheck()
        .args(["run", "ab cd", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("mod_base"));
    Ok(())
}

#[test]
fn config_command_prints_effective_values() {
    trendcheck()
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mod_base\": 7"))
        .stdout(predicate::str::contains("\"simulate_latency_ms\": 0"));
}
