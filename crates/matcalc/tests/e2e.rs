//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn matcalc() -> Command {
    let mut cmd = Command::cargo_bin("matcalc").expect("binary not found");
    cmd.env_remove("MATCALC_N").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    matcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strassen"));
}

#[test]
fn version_flag() {
    matcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matcalc"));
}

#[test]
fn all_strategies_agree() {
    matcalc()
        .args(["-n", "32", "--seed", "11", "--workers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schoolbook"))
        .stdout(predicate::str::contains("DivideConquer"))
        .stdout(predicate::str::contains("Strassen"))
        .stdout(predicate::str::contains("all strategies agree"));
}

#[test]
fn parallel_strassen_below_threshold() {
    matcalc()
        .args([
            "-n", "64", "--algo", "strassen", "--threshold", "8", "--workers", "4", "--seed", "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: Strassen"));
}

#[test]
fn quiet_prints_product_only() {
    matcalc()
        .args(["-n", "2", "--algo", "schoolbook", "--seed", "1", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm").not())
        .stdout(predicate::function(|out: &str| out.lines().count() == 2));
}

#[test]
fn size_from_env() {
    Command::cargo_bin("matcalc")
        .unwrap()
        .env("MATCALC_N", "4")
        .args(["--algo", "dc", "--seed", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 4x4"));
}

#[test]
fn odd_size_warns_and_runs_schoolbook() {
    matcalc()
        .args(["-n", "3", "--seed", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: Schoolbook"))
        .stderr(predicate::str::contains("not a power of two"));
}

#[test]
fn odd_size_with_only_recursive_strategy_fails() {
    matcalc()
        .args(["-n", "6", "--algo", "strassen"])
        .assert()
        .code(4);
}

#[test]
fn unknown_algorithm_is_config_error() {
    matcalc()
        .args(["-n", "4", "--algo", "winograd"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn zero_size_is_config_error() {
    matcalc().args(["-n", "0"]).assert().code(4);
}

#[test]
fn oversized_matrix_fails_cleanly() {
    matcalc()
        .args(["-n", "5000000000", "--algo", "schoolbook"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid matrix size 5000000000"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn output_file_holds_product() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("c.json");
    matcalc()
        .args(["-n", "8", "--algo", "strassen", "--seed", "3", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();

    let dump: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(dump["algorithm"], "Strassen");
    assert_eq!(dump["size"], 8);
    let rows = dump["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.as_array().unwrap().len() == 8));
}

#[test]
fn details_show_throughput() {
    matcalc()
        .args(["-n", "16", "--algo", "schoolbook", "--runs", "2", "-d", "--seed", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Runs: 2"))
        .stdout(predicate::str::contains("Throughput:"));
}

#[test]
fn completion_bash() {
    matcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matcalc"));
}
