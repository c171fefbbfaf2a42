use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("commander"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_log() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("mixed")
        .join("input.hex")
}

#[test]
fn help_supports_replay_and_play() {
    cmd().arg("replay").arg("--help").assert().success();
    cmd().arg("play").arg("--help").assert().success();
}

#[test]
fn decode_prints_setpoint_json() {
    let assert = cmd()
        .arg("decode")
        .arg("01 0000803f 00000040 00004040 0000003f")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["tag"], 1);
    assert_eq!(value["packet_type"], "velocity_world");
    assert_eq!(value["setpoint"]["mode"]["x"], "velocity");
    assert_eq!(value["setpoint"]["y"][1], 2.0);
    assert_eq!(value["setpoint"]["attitude_rate"]["yaw"], 0.5);
}

#[test]
fn decode_unknown_tag_is_neutral() {
    let assert = cmd().arg("decode").arg("63 01 02").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["tag"], 99);
    assert!(value.get("packet_type").is_none());
    assert_eq!(value["setpoint"]["mode"]["x"], "disable");
}

#[test]
fn decode_accepts_uppercase_prefix() {
    let assert = cmd().arg("decode").arg("0X00").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["packet_type"], "stop");
}

#[test]
fn decode_length_mismatch_fails() {
    cmd()
        .arg("decode")
        .arg("01 0000803f")
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("expected 16 bytes, got 4")));
}

#[test]
fn decode_rejects_bad_hex() {
    cmd()
        .arg("decode")
        .arg("0g")
        .assert()
        .code(2)
        .stderr(contains("invalid packet").and(contains("hint:")));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.hex");
    let report = temp.path().join("report.json");

    cmd()
        .arg("replay")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn report_is_written_to_file() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("replay")
        .arg(sample_log())
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let json = std::fs::read_to_string(&report).expect("report written");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["report_version"], 1);
    assert_eq!(value["summary"]["packets_total"], 7);
    assert_eq!(value["summary"]["rejected"], 1);
}

#[test]
fn stdout_outputs_json() {
    let input = sample_log();
    let assert = cmd()
        .arg("replay")
        .arg(input)
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let _: Value = serde_json::from_str(&stdout).expect("valid json");
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_log();
    let report = temp.path().join("report.json");

    cmd()
        .arg("replay")
        .arg(input)
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_log();
    let report = temp.path().join("report.json");

    cmd()
        .arg("replay")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn report_path_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("packets.hex");
    std::fs::write(&input, "00\n").expect("write log");

    cmd()
        .arg("replay")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(contains("report would overwrite the packet log"));
}

#[test]
fn glob_pattern_must_match_one_file() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::write(temp.path().join("a.hex"), "00\n").expect("write log");
    std::fs::write(temp.path().join("b.hex"), "00\n").expect("write log");
    let pattern = temp.path().join("*.hex");

    cmd()
        .arg("replay")
        .arg(pattern)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern").and(contains("hint:")));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_log();
    let report = temp.path().join("report.json");

    cmd()
        .arg("replay")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn list_rejected_outputs_lines() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_log();
    let report = temp.path().join("report.json");

    cmd()
        .arg("replay")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--list-rejected")
        .assert()
        .success()
        .stderr(contains("Rejected packets: 1").and(contains("line 8:")));
}

#[test]
fn strict_fails_on_length_mismatch() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_log();
    let report = temp.path().join("report.json");

    cmd()
        .arg("replay")
        .arg(input)
        .arg("-o")
        .arg(&report)
        .arg("--strict")
        .assert()
        .code(2)
        .stderr(contains("decode failed on line 8"));
    assert!(!report.exists());
}

#[test]
fn verbose_flag_enables_debug_logging() {
    cmd()
        .arg("-vv")
        .arg("replay")
        .arg(sample_log())
        .arg("--stdout")
        .assert()
        .success()
        .stderr(contains("no decoder for packet tag"));
}

#[test]
fn report_in_new_directory_is_not_the_log() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("fresh").join("nested").join("report.json");

    cmd()
        .arg("replay")
        .arg(sample_log())
        .arg("-o")
        .arg(&report)
        .assert()
        .success();
    assert!(report.exists());
}
