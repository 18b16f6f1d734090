use std::io::Write;
use std::process::{Command, Stdio};

use truthlens::analysis::AnalysisRecord;

fn cli(config_home: &std::path::Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_truthlens-analyze"));
    command.env("TRUTHLENS_CONFIG_HOME", config_home);
    command
}

#[test]
fn prints_json_record_for_text_argument() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = cli(temp.path())
        .args(["--text", "Breaking news!", "--delay-ms", "0", "--seed", "3"])
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let record: AnalysisRecord =
        serde_json::from_slice(&output.stdout).expect("stdout is a record");
    assert!(record.validate().is_ok());
    let json = String::from_utf8_lossy(&output.stdout);
    assert!(json.contains("\"credibilityScore\""));
    assert!(json.contains("\"immunityTip\""));
}

#[test]
fn reads_stdin_and_prints_text_report() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut child = cli(temp.path())
        .args(["--format", "text", "--delay-ms", "0"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"Scientists discover something")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait cli");
    assert!(output.status.success());
    let report = String::from_utf8_lossy(&output.stdout);
    assert!(report.contains("/100"));
    assert!(report.contains("Pattern:"));
}

#[test]
fn empty_input_exits_with_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = cli(temp.path())
        .args(["--text", "   ", "--delay-ms", "0"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Enter some text to analyze"));
}
