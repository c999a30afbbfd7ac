use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_email-extractor"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("email-extractor"));
}

#[test]
fn missing_argument_is_usage_error() {
    bin()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("INPUT"));
}

#[test]
fn missing_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ghost.txt");

    bin()
        .args(["--quiet", "--no-title"])
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ghost.txt"));

    assert!(!dir.path().join("ghost_emails.txt").exists());
}

#[test]
fn extracts_and_summarises() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("comments.txt");
    std::fs::write(&input, "a@x.com b@y.com a@x.com\n").unwrap();

    bin()
        .args(["--no-title", "--no-banner"])
        .arg(&input)
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task completed."))
        .stdout(predicate::str::contains("Removed Duplicates: 1"))
        .stdout(predicate::str::contains("comments_emails.txt"));

    let output = std::fs::read_to_string(dir.path().join("comments_emails.txt")).unwrap();
    assert_eq!(output, "a@x.com\nb@y.com\n");
}

#[test]
fn quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dump.txt");
    std::fs::write(&input, "z@b.org a@b.org").unwrap();

    bin()
        .args(["-q", "--no-title"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = std::fs::read_to_string(dir.path().join("dump_emails.txt")).unwrap();
    assert_eq!(output.lines().count(), 2);
}

#[test]
fn unwritable_output_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("list.txt");
    std::fs::write(&input, "a@x.com").unwrap();
    std::fs::create_dir(dir.path().join("list_emails.txt")).unwrap();

    bin()
        .args(["-q", "--no-title"])
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("list_emails.txt"));
}

#[test]
fn redirected_stdout_gets_no_title_escape() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.html");
    std::fs::write(&input, "<p>info@site.org</p>").unwrap();

    bin()
        .arg("--no-banner")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b]2;").not());
}

#[test]
fn oversized_buffer_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("list.txt");
    std::fs::write(&input, "a@x.com").unwrap();

    bin()
        .args(["-q", "--buffer-size", "99999999999999999GB"])
        .arg(&input)
        .assert()
        .failure()
        .code(1);

    assert!(!dir.path().join("list_emails.txt").exists());
}
