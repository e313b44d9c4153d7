//! CLI integration tests
//!
//! Run the built `calculator` binary and check stdout, stderr and the exit
//! status.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calculator"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_add() {
    let output = run(&["--a=10", "--b=5", "--op=add"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("10.00 + 5.00 = 15.00"));
}

#[test]
fn test_cli_each_selector() {
    let cases = [
        ("sub", "10.00 - 4.00 = 6.00"),
        ("mul", "10.00 * 4.00 = 40.00"),
        ("div", "10.00 / 4.00 = 2.50"),
    ];
    for (op, expected) in cases {
        let output = run(&["--a", "10", "--b", "4", "--op", op]);
        assert!(output.status.success(), "{op}");
        assert!(stdout(&output).contains(expected), "{op}: {}", stdout(&output));
    }
}

#[test]
fn test_cli_defaults() {
    let output = run(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("0.00 + 0.00 = 0.00"));
}

#[test]
fn test_cli_negative_operand() {
    let output = run(&["--a=-4", "--b", "-2", "--op=mul"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("-4.00 * -2.00 = 8.00"));
}

#[test]
fn test_cli_division_by_zero_fails() {
    let output = run(&["--a=10", "--b=0", "--op=div"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("division by zero"));
    assert!(!stdout(&output).contains(" = "));
}

#[test]
fn test_cli_unknown_operation_fails() {
    let output = run(&["--a=2", "--b=3", "--op=pow"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Unknown operation: pow"), "{err}");
    assert!(err.contains("Available operations: add, sub, mul, div"), "{err}");
}

#[test]
fn test_cli_rejects_non_numeric_operand() {
    let output = run(&["--a=ten"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_rejects_out_of_range_operand() {
    let output = run(&["--a=1e400", "--b=1", "--op=add"]);
    assert!(!output.status.success());
    assert!(!stdout(&output).contains(" = "));
    assert!(stderr(&output).contains("out of range"), "{}", stderr(&output));
}
