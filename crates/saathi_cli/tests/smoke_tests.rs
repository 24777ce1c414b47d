//! CLI smoke tests: run the built binary with piped stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const MISSING_CONFIG: &str = "/tmp/nonexistent_saathi_config_12345.toml";

fn cli_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_saathi"));
    for var in ["SAATHI_CONFIG", "SAATHI_LANGUAGE", "SAATHI_SEED", "SAATHI_CRISIS_ESCALATION"] {
        cmd.env_remove(var);
    }
    cmd
}

fn run_session(args: &[&str], input: &str) -> Output {
    let mut child = cli_bin()
        .arg("--config")
        .arg(MISSING_CONFIG)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait")
}

#[test]
fn test_help_flag() {
    let output = cli_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "Expected usage info in --help output");
    assert!(stdout.contains("--language"));
}

#[test]
fn test_version_flag() {
    let output = cli_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("saathi"), "Expected binary name in --version output");
}

#[test]
fn test_invalid_config_does_not_panic() {
    // A nonexistent config file falls back to defaults
    let output = cli_bin()
        .arg("--config")
        .arg(MISSING_CONFIG)
        .arg("--help")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
}

#[test]
fn test_unknown_language_is_rejected() {
    let output = cli_bin().args(["--language", "klingon"]).output().expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("klingon"));
}

#[test]
fn test_piped_session() {
    let output = run_session(
        &["--seed", "7", "--language", "en"],
        "2\n   \nI am so worried about tomorrow\n/lang hi\n/quit\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello! I'm Saathi"), "greeting missing: {stdout}");
    assert!(stdout.contains("Sad 😢"));
    assert!(stdout.contains("I'm really sorry you're feeling low"));
    assert!(stdout.contains("हिन्दी में जवाब"));
    // farewell follows the language switch
    assert!(stdout.contains("अपना ख़याल रखें"));
}

#[test]
fn test_eof_says_goodbye() {
    let output = run_session(&["--language", "spanish"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("¡Hola!"));
    assert!(stdout.contains("Cuídate mucho"));
}

#[test]
fn test_transcript_command_prints_json() {
    let output = run_session(&["--seed", "1"], "1\n/transcript\n/quit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"sender\": \"user\""));
    assert!(stdout.contains("\"text\": \"Happy 😊\""));
}

#[test]
fn test_mood_is_recorded_once() {
    let output = run_session(&[], "/mood sad\n/mood happy\n/quit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sad 😢"));
    assert!(stdout.contains("Mood already recorded for this session (sad)"));
}
