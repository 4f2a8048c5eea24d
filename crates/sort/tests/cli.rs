// End-to-end runs of the rv-sort binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_sort(args: &[&str], stdin: &str) -> Output {
    run_sort_with_env(args, &[], stdin)
}

/// Run rv-sort with a clean `RV_SORT_*` environment plus `envs`.
fn run_sort_with_env(args: &[&str], envs: &[(&str, &str)], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rv-sort"))
        .args(args)
        .env_remove("RV_SORT_CAPACITY")
        .env_remove("RV_SORT_LOG")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn rv-sort");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait rv-sort")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_sorts_example() {
    let out = run_sort(&[], "5\n3 1 4 1 5\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1 1 3 4 5\n");
}

#[test]
fn test_zero_values_prints_empty_line() {
    let out = run_sort(&[], "0\n\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "\n");
}

#[test]
fn test_single_value_unchanged() {
    let out = run_sort(&[], "1\n-5\n");
    assert_eq!(stdout(&out), "-5\n");
}

#[test]
fn test_trailing_space_style() {
    let out = run_sort(&["--trailing-space"], "2\n2 1\n");
    assert_eq!(stdout(&out), "1 2 \n");
}

#[test]
fn test_full_capacity_reversed() {
    let values: Vec<String> = (0..100).rev().map(|v| v.to_string()).collect();
    let input = format!("100\n{}\n", values.join(" "));
    let out = run_sort(&[], &input);
    assert!(out.status.success());

    let expected: Vec<String> = (0..100).map(|v| v.to_string()).collect();
    assert_eq!(stdout(&out), format!("{}\n", expected.join(" ")));
}

#[test]
fn test_over_capacity_fails_cleanly() {
    let out = run_sort(&[], "101\n");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("at most 100"), "stderr: {stderr}");
}

#[test]
fn test_capacity_from_env() {
    let out = run_sort_with_env(&[], &[("RV_SORT_CAPACITY", "2")], "3\n1 2 3\n");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("at most 2"));
}

#[test]
fn test_unbounded_capacity_does_not_preallocate() {
    let max = usize::MAX.to_string();
    let out = run_sort_with_env(&[], &[("RV_SORT_CAPACITY", &max)], "0\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout(&out), "\n");

    let out = run_sort(&["--capacity", &max], "3\n2 3 1\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1 2 3\n");
}

#[test]
fn test_empty_input_file_reported() {
    let out = run_sort(&["--input", "/dev/null"], "");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("value count"));
}

#[test]
fn test_reads_input_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "3").expect("write");
    writeln!(file, "30 -10 20").expect("write");

    let path = file.path().to_str().expect("utf-8 path");
    let out = run_sort(&["--input", path], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "-10 20 30\n");
}

#[test]
fn test_malformed_value_reported() {
    let out = run_sort(&[], "2\n1 two\n");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("\"two\""));
}

#[cfg(not(target_arch = "riscv64"))]
#[test]
fn test_raw_io_needs_riscv() {
    let out = run_sort(&["--raw-io"], "1\n1\n");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("riscv64"));
}

#[cfg(target_arch = "riscv64")]
#[test]
fn test_raw_io_writes_through_ecall() {
    let out = run_sort(&["--raw-io"], "3\n3 2 1\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1 2 3\n");
}
