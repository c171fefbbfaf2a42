use std::fs;
use std::path::{Path, PathBuf};

use commander_core::{
    DecodeError, DecodeReport, MismatchPolicy, PacketType, ReplayError, replay_packet_file,
};

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn load_expected_report(dir: &str) -> DecodeReport {
    let expected_path = repo_root().join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let input = repo_root().join(dir).join("input.hex");
    let expected = load_expected_report(dir);

    let mut actual = replay_packet_file(&input, MismatchPolicy::Neutral).expect("replay log");
    actual.input.path = expected.input.path.clone();
    actual.tool.version = expected.tool.version.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_mixed() {
    run_golden("tests/golden/mixed");
}

#[test]
fn golden_full_control() {
    run_golden("tests/golden/full_control");
}

#[test]
fn golden_mixed_has_one_rejected_packet() {
    let report = load_expected_report("tests/golden/mixed");
    assert_eq!(report.summary.rejected, 1);
    let rejected = report.packets.last().expect("packets");
    assert_eq!(rejected.packet_type, Some(PacketType::VelocityWorld));
    assert!(rejected.setpoint.is_neutral());
}

#[test]
fn golden_mixed_aborts_in_strict_mode() {
    let input = repo_root().join("tests/golden/mixed/input.hex");
    let err = replay_packet_file(&input, MismatchPolicy::Abort).unwrap_err();
    match err {
        ReplayError::Decode { line, source } => {
            assert_eq!(line, 8);
            assert_eq!(
                source,
                DecodeError::PayloadLengthMismatch {
                    packet_type: PacketType::VelocityWorld,
                    expected: 16,
                    actual: 8,
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn golden_full_control_reports_diagnostics() {
    let report = load_expected_report("tests/golden/full_control");
    assert_eq!(report.diagnostics.packets_received, 2);
    assert_eq!(report.diagnostics.last_z, 65504.0);
    let all_modes = &report.packets[1].setpoint;
    assert_eq!(all_modes.legacy_mode.x.bits(), 7);
    assert!(all_modes.emergency.reset);
}

#[test]
fn missing_log_fails_before_replay() {
    let input = repo_root().join("tests/golden/missing/input.hex");
    let err = replay_packet_file(&input, MismatchPolicy::Neutral).unwrap_err();
    assert!(matches!(err, ReplayError::Io(_)), "unexpected error: {err}");
}
