//! Tests for the pf CLI help functionality

mod common;
use common::pf;

#[test]
fn test_no_args_shows_help() {
    let output = pf().output().expect("Failed to execute pf command");

    assert!(output.status.success(), "Command should exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("Usage:"),
        "Output should contain 'Usage:': {}",
        stdout
    );
    assert!(
        stdout.contains("Commands:"),
        "Output should contain 'Commands:': {}",
        stdout
    );
    assert!(
        stdout.contains("Options:"),
        "Output should contain 'Options:': {}",
        stdout
    );
}

#[test]
fn test_check_help_explains_output() {
    let output = pf()
        .args(["check", "--help"])
        .output()
        .expect("Failed to execute pf command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--raw"), "{}", stdout);
    assert!(stdout.contains("Failed"), "{}", stdout);
}
