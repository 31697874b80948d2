use assert_cmd::Command;

const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about\n";

fn recovery() -> Command {
    let mut cmd = Command::cargo_bin("dough-recovery").unwrap();
    cmd.env_remove("DOUGH_RECOVERY_COUNT")
        .env_remove("DOUGH_RECOVERY_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str], input: &str) -> String {
    let output = recovery().args(args).write_stdin(input).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

fn stderr_of_failure(input: &str) -> String {
    let output = recovery().write_stdin(input).output().unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Address:"), "report leaked: {}", stdout);
    String::from_utf8(output.stderr).unwrap()
}

#[test]
fn default_run_prints_one_entry_per_chain() {
    let stdout = stdout_of(&[], ABANDON_ABOUT);
    assert!(stdout.contains("Dough Wallet Recovery"));
    assert!(stdout.contains("External (Receive) Chain: m/0'/0/n"));
    assert!(stdout.contains("Internal (Change) Chain: m/0'/1/n"));
    assert!(stdout.contains("  m/0'/0/0\n    Address:     DEoAdeKU9b8MHbMAYiM7osV6FxzDr9UjjV\n    Private Key: QWEs2ZEsx7uJEDHfbBbycpa1fFtJf1BTh2h1gHb2N14dxp15Feww\n"));
    assert!(stdout.contains("  m/0'/1/0\n    Address:     DANETuJA48T6qRWqSyjNYjYcV1aQTYYDJr\n"));
    assert_eq!(stdout.matches("Address:").count(), 2);
}

#[test]
fn count_zero_prints_headers_only() {
    let stdout = stdout_of(&["--count", "0", "--no-banner"], ABANDON_ABOUT);
    assert!(stdout.contains("External (Receive) Chain"));
    assert!(stdout.contains("Internal (Change) Chain"));
    assert_eq!(stdout.matches("Address:").count(), 0);
}

#[test]
fn count_three_prints_three_per_chain() {
    let stdout = stdout_of(&["--count", "3", "--no-banner"], ABANDON_ABOUT);
    assert_eq!(stdout.matches("Address:").count(), 6);
    assert!(stdout.contains("m/0'/0/2"));
    assert!(stdout.contains("m/0'/1/2"));
    assert!(!stdout.contains("m/0'/0/3"));
}

#[test]
fn count_from_environment() {
    let output = recovery()
        .env("DOUGH_RECOVERY_COUNT", "2")
        .arg("--no-banner")
        .write_stdin(ABANDON_ABOUT)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).matches("Address:").count(), 4);
}

#[test]
fn json_output_is_parseable() {
    let stdout = stdout_of(&["--format", "json"], ABANDON_ABOUT);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["external"]["entries"][0]["address"], "DEoAdeKU9b8MHbMAYiM7osV6FxzDr9UjjV");
    assert_eq!(value["internal"]["path"], "m/0'/1/n");
}

#[test]
fn rejects_eleven_words() {
    let line = ABANDON_ABOUT.splitn(2, ' ').nth(1).unwrap();
    assert!(stderr_of_failure(line).contains("expected 12 words, got 11"));
}

#[test]
fn rejects_thirteen_words() {
    let line = format!("abandon {}", ABANDON_ABOUT);
    assert!(stderr_of_failure(&line).contains("expected 12 words, got 13"));
}

#[test]
fn rejects_unknown_word() {
    let line = ABANDON_ABOUT.replace("about", "dogecoin");
    assert!(stderr_of_failure(&line).contains("word #12 \"dogecoin\" is not in the BIP39 wordlist"));
}

#[test]
fn rejects_empty_input() {
    assert!(stderr_of_failure("").contains("no recovery phrase provided"));
}

#[test]
fn bad_checksum_still_recovers() {
    let line = format!("{}\n", "abandon ".repeat(12).trim_end());
    let stdout = stdout_of(&["--no-banner"], &line);
    assert_eq!(stdout.matches("Address:").count(), 2);
}
