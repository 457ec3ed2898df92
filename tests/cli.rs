use assert_cmd::Command;
use predicates::prelude::*;

// An unparseable URL must be rejected before any service call is made, so
// this runs offline.
#[test]
fn unparseable_url_prints_error_and_fails() {
    let mut cmd = Command::cargo_bin("ytsum").unwrap();
    cmd.write_stdin("not-a-url\nEnglish\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Fetching transcript..."))
        .stderr(predicate::str::contains("Invalid YouTube URL: not-a-url"));
}

#[test]
fn url_flag_skips_the_url_prompt() {
    let mut cmd = Command::cargo_bin("ytsum").unwrap();
    cmd.args(["--url", "still-not-a-url"])
        .write_stdin("English\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter the language for the summary").and(
            predicate::str::contains("Enter the YouTube video URL").not(),
        ))
        .stderr(predicate::str::contains("Invalid YouTube URL: still-not-a-url"));
}

#[test]
fn help_mentions_both_inputs() {
    let mut cmd = Command::cargo_bin("ytsum").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--url").and(predicate::str::contains("--language")));
}
