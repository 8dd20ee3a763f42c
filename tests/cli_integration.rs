//! Integration tests that run the CLI binary.

fn bin() -> std::process::Command {
    let bin = env!("CARGO_BIN_EXE_ask-me-bot");
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("ASK_ME_API_URL");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty());
    assert!(
        stdout.contains("ask-me-bot") || stdout.contains("prompt"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ask-me-bot"));
}

#[test]
fn cli_blank_prompt_exits_with_error() {
    // The blank-prompt guard fires before any network access.
    let output = bin()
        .arg("-p")
        .arg("   ")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success(), "expected failure for blank prompt");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty prompt"));
}
