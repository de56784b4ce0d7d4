//! Integration tests for the harmony CLI.
//!
//! These tests run the built `harmony` binary end-to-end and check the
//! printed result line.

use std::process::{Command, Output};

fn harmony(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_harmony"))
        .args(args)
        .output()
        .expect("Failed to execute harmony")
}

fn stdout_of(args: &[&str]) -> String {
    let output = harmony(args);
    assert!(
        output.status.success(),
        "harmony {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Last printed line, which holds the result.
fn result_of(args: &[&str]) -> String {
    stdout_of(args)
        .lines()
        .last()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn test_combine_add() {
    assert_eq!(result_of(&["combine", "1,2", "10,20,30"]), "11,22,31,12,21,32");
}

#[test]
fn test_combine_mul_with_negative_cycle() {
    assert_eq!(
        result_of(&["combine", "--op", "mul", "-1,1", "3,2,1"]),
        "-3,2,-1,3,-2,1"
    );
}

#[test]
fn test_combine_then_minimize() {
    assert_eq!(
        result_of(&["combine", "--normalize", "minimize", "2,4", "2"]),
        "0,1"
    );
}

#[test]
fn test_combine_verbose_reports_period() {
    let stdout = stdout_of(&["combine", "-v", "1,2,3,4", "1,2,3,4,5,6"]);
    assert!(stdout.contains("Periods: [4, 6]"));
    assert!(stdout.contains("Combined Period: 12"));
}

#[test]
fn test_normalize_default_is_minimize() {
    assert_eq!(result_of(&["normalize", "10,14,6"]), "1,2,0");
}

#[test]
fn test_normalize_modes() {
    assert_eq!(result_of(&["normalize", "-m", "shift-zero", "5,7,3"]), "2,4,0");
    assert_eq!(result_of(&["normalize", "-m", "center", "0,3"]), "-1,2");
    assert_eq!(result_of(&["normalize", "-m", "simplify", "4,6,8"]), "2,3,4");
    assert_eq!(result_of(&["normalize", "-m", "mincenter", "0,6"]), "-1,1");
    assert_eq!(result_of(&["normalize", "-m", "average-zero", "0,1,3"]), "-4,-1,5");
}

#[test]
fn test_normalize_overflow_fails_with_code() {
    let output = harmony(&["normalize", "-m", "center", "0,9223372036854775806"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("H003"), "stderr: {}", stderr);
}

#[test]
fn test_combine_overflow_fails_with_code() {
    let output = harmony(&["combine", "--op", "mul", "9223372036854775807", "2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("H003"), "stderr: {}", stderr);

    let output = harmony(&["combine", "9223372036854775807", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("H003"));
}

#[test]
fn test_unknown_normalization_lists_names() {
    let output = harmony(&["normalize", "-m", "median", "1,2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("average_zero"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_sample_is_rejected() {
    let output = harmony(&["normalize", "1,two,3"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid sample 'two'"));
}

#[test]
fn test_half_wave() {
    assert_eq!(result_of(&["half-wave", "1,2"]), "1,2,-1,-2");
    assert_eq!(result_of(&["half-wave", "--odd", "1,2"]), "1,2,0,-1,-2");
}

#[test]
fn test_interpolate_and_windowed_sum() {
    assert_eq!(result_of(&["interpolate", "-n", "3", "1,-1"]), "1,1,1,-1,-1,-1");
    assert_eq!(result_of(&["interpolate", "--repeat", "2", "4"]), "4,4");
    assert_eq!(result_of(&["windowed-sum", "-w", "2", "1,2,3,4"]), "3,5,7");
}

#[test]
fn test_windowed_sum_rejects_zero_window() {
    let output = harmony(&["windowed-sum", "-w", "0", "1,2"]);
    assert!(!output.status.success());
}

#[test]
fn test_factor_prints_input() {
    assert_eq!(result_of(&["factor", "1,0"]), "1,0");
}
