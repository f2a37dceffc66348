// Regression tests for the primer binary: verdict lines, exit codes and
// diagnostics as seen from the outside.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{
    prelude::PredicateBooleanExt,
    str::{contains, starts_with},
};

fn primer() -> Command {
    Command::cargo_bin("primer").unwrap()
}

#[test]
fn run_reports_every_built_in_snippet_as_passing() {
    primer()
        .arg("run")
        .assert()
        .success()
        .stdout(starts_with("hello: PASS\n"))
        .stdout(contains("sum: PASS\n"))
        .stdout(contains("two-d-array: PASS\n"))
        .stdout(contains("FAIL").not())
        .stdout(contains("summary: 18/18 passed\n"));
}

#[test]
fn run_single_id() {
    primer()
        .args(["run", "--id", "hello"])
        .assert()
        .success()
        .stdout("hello: PASS\nsummary: 1/1 passed\n");
}

#[test]
fn run_unknown_id_exits_with_two() {
    primer()
        .args(["run", "--id", "missing"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("NotFoundError: missing"));
}

#[test]
fn list_prints_ids_in_registration_order() {
    let assert = primer().arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids.first(), Some(&"hello"));
    assert_eq!(ids.last(), Some(&"two-d-array"));
    assert_eq!(ids.len(), 18);
}

#[test]
fn filter_runs_matching_subset() {
    primer()
        .args(["run", "--filter", "slice"])
        .assert()
        .success()
        .stdout(
            "slice-make: PASS\nslice-append: PASS\nslice-literal: PASS\nsummary: 3/3 passed\n",
        );
}

#[test]
fn json_format_emits_document() {
    let assert = primer()
        .args(["run", "--id", "map-literal", "--format", "json"])
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["summary"]["total"], 1);
    assert_eq!(value["results"][0]["id"], "map-literal");
    assert_eq!(value["results"][0]["actual"][0], "Map: map[Alice:30 Bob:25]");
}

#[test]
fn show_prints_expected_output() {
    primer()
        .args(["show", "constant"])
        .assert()
        .success()
        .stdout(contains("expected:\n  The value of pi is 3.14\n"));
}

#[test]
fn show_unknown_id_exits_with_two() {
    primer()
        .args(["show", "nope"])
        .assert()
        .code(2)
        .stderr(contains("NotFoundError: nope").and(contains("primer list")));
}
