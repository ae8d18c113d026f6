//! End-to-end tests for the postcode binary

use assert_cmd::Command;
use predicates::prelude::*;

fn postcode_cmd() -> Command {
    Command::cargo_bin("postcode").expect("binary builds")
}

#[test]
fn splits_a_valid_postcode() {
    postcode_cmd()
        .arg("cr0 2yr")
        .assert()
        .success()
        .stdout("CR0\t2YR\n");
}

#[test]
fn splits_several_postcodes_in_argument_order() {
    postcode_cmd()
        .args(["cr0 2yr", "EC1A 1HQ"])
        .assert()
        .success()
        .stdout("CR0\t2YR\nEC1A\t1HQ\n");
}

#[test]
fn rejects_an_unknown_zone() {
    postcode_cmd()
        .arg("xx0 2yr")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not conform to UK postcode rules"));
}

#[test]
fn lenient_mode_skips_validation() {
    postcode_cmd()
        .args(["xx0 2yr", "--lenient"])
        .assert()
        .success()
        .stdout("XX0\t2YR\n");
}

#[test]
fn outcode_only_requires_the_flag() {
    postcode_cmd()
        .arg("sw19")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Incode mandatory"));

    postcode_cmd()
        .args(["sw19", "--optional-incode"])
        .assert()
        .success()
        .stdout("SW19\t\n");
}

#[test]
fn json_format_emits_named_fields() {
    let output = postcode_cmd()
        .args(["gir 0aa", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed[0]["outcode"], "GIR");
    assert_eq!(parsed[0]["incode"], "0AA");
}

#[test]
fn unknown_format_is_reported() {
    postcode_cmd()
        .args(["cr0 2yr", "--format", "yaml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Format 'yaml' not supported"));
}

#[test]
fn no_output_for_a_partially_valid_invocation() {
    postcode_cmd()
        .args(["cr0 2yr", "npt 0dt"])
        .assert()
        .failure()
        .code(1)
        .stdout("");
}
