//! End-to-end CLI tests for the `-N` random-benchmark mode.

use std::process::{Command, Output};

fn run_pisect(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pisect"))
        .args(args)
        .output()
        .expect("failed to run pisect")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn random_mode_reports_an_intersection_count() {
    let output = run_pisect(&["-N", "2000"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("intersections"));
    assert!(stdout(&output).contains("Intersection time"));
}

#[test]
fn random_mode_honors_replication_count() {
    let output = run_pisect(&["-N", "200", "-r", "3"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert_eq!(text.matches("Replication").count(), 3);
}

#[test]
fn missing_input_mode_is_a_fatal_error() {
    let output = run_pisect(&[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("FATAL"));
}
