use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_wildre(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wildre"))
        .args(args)
        .output()
        .expect("failed to execute wildre")
}

fn stdout(output: &Output) -> String {
    assert!(output.status.success(), "wildre exited with {:?}", output.status);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn converts_argument_patterns() {
    let output = run_wildre(&["--preset", "unix", "*.{rs,toml}", "a?b"]);
    assert_eq!(
        stdout(&output),
        "*.{rs,toml} => .*\\.(?:rs|toml)\na?b => a.b\n"
    );
}

#[test]
fn converts_win32_comma_lists() {
    let output = run_wildre(&["--preset", "win32", "a,b\\,c"]);
    assert_eq!(stdout(&output), "a,b\\,c => (?:a|b\\,c)\n");
}

#[test]
fn converts_with_capture_settings() {
    let output = run_wildre(&["--preset", "jokers", "--capture", "any", "**.txt"]);
    assert_eq!(stdout(&output), "**.txt => (.*)\\.txt\n");
}

#[test]
fn reads_patterns_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wildre"))
        .args(["--preset", "sql"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn wildre");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"100%\na_c\n")
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait for wildre");
    assert_eq!(stdout(&output), "100% => 100.*\na_c => a.c\n");
}

#[test]
fn rejects_unknown_preset() {
    let output = run_wildre(&["--preset", "vms", "x"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset 'vms'"), "stderr: {stderr}");
}
